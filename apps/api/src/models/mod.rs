pub mod document;
pub mod form;
