// Document generation pipeline: validation → prompt synthesis → provider call
// → quota fallback → persistence. All provider calls go through llm_client.

pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod languages;
pub mod prompts;
pub mod synthesizer;

#[cfg(test)]
pub mod test_support;
