//! Form schema validation.
//!
//! Walks the raw JSON body and records every violated field (not just the
//! first) before anything is deserialized into a `GenerationRequest`.
//! Unknown language codes pass here; profile resolution happens in the
//! prompt synthesizer.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::form::{DocumentType, GenerationRequest};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9._%+'-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .expect("email pattern is a valid regex")
});

const MIN_AGE: f64 = 16.0;
const MAX_AGE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(&'static str),
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub path: Vec<PathSegment>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} field violation(s)", .violations.len())]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

/// Parses and validates a raw request body.
pub fn parse_request(body: &[u8]) -> Result<GenerationRequest, ValidationErrors> {
    let value: Value = serde_json::from_slice(body).map_err(|e| ValidationErrors {
        violations: vec![FieldViolation {
            path: vec![],
            message: format!("Invalid JSON: {e}"),
        }],
    })?;
    validate_request(&value)
}

/// Validates an arbitrary JSON value against the generation request schema.
pub fn validate_request(value: &Value) -> Result<GenerationRequest, ValidationErrors> {
    let mut checker = Checker::default();
    checker.check_request(value);

    if !checker.violations.is_empty() {
        return Err(ValidationErrors {
            violations: checker.violations,
        });
    }

    // Every shape rule is checked above, so this only fails if the two drift apart.
    serde_json::from_value(value.clone()).map_err(|e| ValidationErrors {
        violations: vec![FieldViolation {
            path: vec![],
            message: e.to_string(),
        }],
    })
}

#[derive(Default)]
struct Checker {
    violations: Vec<FieldViolation>,
}

fn child(path: &[PathSegment], segment: PathSegment) -> Vec<PathSegment> {
    let mut next = path.to_vec();
    next.push(segment);
    next
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Checker {
    fn fail(&mut self, path: Vec<PathSegment>, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            path,
            message: message.into(),
        });
    }

    fn check_request(&mut self, value: &Value) {
        let Some(root) = self.object(Some(value), vec![]) else {
            return;
        };

        self.document_type(root);
        self.required_string(root, "language", &[], "Language is required");

        if let Some(info) =
            self.object(root.get("basicInfo"), vec![PathSegment::Key("basicInfo")])
        {
            self.basic_info(info);
        }

        self.each_object(root, "workExperience", |checker, entry, path| {
            checker.required_string(entry, "jobTitle", path, "Job title is required");
            checker.required_string(entry, "companyName", path, "Company name is required");
            checker.required_string(entry, "startDate", path, "Start date is required");
            checker.optional_string(entry, "endDate", path);
            checker.required_string(
                entry,
                "responsibilities",
                path,
                "Responsibilities are required",
            );
            checker.optional_string(entry, "achievements", path);
        });

        self.each_object(root, "education", |checker, entry, path| {
            checker.required_string(entry, "degree", path, "Degree is required");
            checker.required_string(entry, "institution", path, "Institution is required");
            checker.required_string(entry, "startDate", path, "Start date is required");
            checker.optional_string(entry, "endDate", path);
            checker.optional_string(entry, "description", path);
        });

        let skills_path = [PathSegment::Key("skills")];
        if let Some(skills) = self.object(root.get("skills"), skills_path.to_vec()) {
            self.required_string(
                skills,
                "technicalSkills",
                &skills_path,
                "Technical skills are required",
            );
            self.required_string(skills, "softSkills", &skills_path, "Soft skills are required");
            self.required_string(
                skills,
                "languageSkills",
                &skills_path,
                "Language skills are required",
            );
        }

        match root.get("motivation") {
            None | Some(Value::Null) => {}
            Some(value) => {
                let path = [PathSegment::Key("motivation")];
                if let Some(motivation) = self.object(Some(value), path.to_vec()) {
                    for key in ["whyApplying", "whatAttracts", "uniqueQualities", "careerGoals"] {
                        self.optional_string(motivation, key, &path);
                    }
                }
            }
        }
    }

    fn basic_info(&mut self, info: &Map<String, Value>) {
        let path = [PathSegment::Key("basicInfo")];
        self.required_string(info, "name", &path, "Name is required");
        self.number(info, "age", &path, Some(MIN_AGE), Some(MAX_AGE));
        self.optional_string(info, "gender", &path);
        self.required_string(info, "country", &path, "Country is required");
        self.required_string(info, "jobTitle", &path, "Job title is required");
        self.number(info, "yearsExperience", &path, Some(0.0), None);
        if let Some(email) = self.required_string(info, "email", &path, "Valid email is required")
        {
            if !EMAIL_RE.is_match(email) {
                self.fail(child(&path, PathSegment::Key("email")), "Valid email is required");
            }
        }
        self.required_string(info, "phone", &path, "Phone is required");
        self.required_string(info, "location", &path, "Location is required");
    }

    fn document_type(&mut self, root: &Map<String, Value>) {
        let path = vec![PathSegment::Key("documentType")];
        let expected = format!(
            "Invalid enum value. Expected {}",
            DocumentType::ALL
                .iter()
                .map(|v| format!("'{v}'"))
                .collect::<Vec<_>>()
                .join(" | ")
        );
        match root.get("documentType") {
            None => self.fail(path, "Required"),
            Some(Value::String(s)) if DocumentType::ALL.contains(&s.as_str()) => {}
            Some(_) => self.fail(path, expected),
        }
    }

    fn object<'a>(
        &mut self,
        value: Option<&'a Value>,
        path: Vec<PathSegment>,
    ) -> Option<&'a Map<String, Value>> {
        match value {
            None => {
                self.fail(path, "Required");
                None
            }
            Some(Value::Object(map)) => Some(map),
            Some(other) => {
                self.fail(
                    path,
                    format!("Expected object, received {}", type_name(other)),
                );
                None
            }
        }
    }

    /// Checks a required array of objects, running `check` on each element.
    fn each_object<F>(&mut self, root: &Map<String, Value>, key: &'static str, mut check: F)
    where
        F: FnMut(&mut Self, &Map<String, Value>, &[PathSegment]),
    {
        let path = vec![PathSegment::Key(key)];
        match root.get(key) {
            None => self.fail(path, "Required"),
            Some(Value::Array(items)) => {
                for (index, item) in items.iter().enumerate() {
                    let item_path = child(&path, PathSegment::Index(index));
                    if let Some(entry) = self.object(Some(item), item_path.clone()) {
                        check(self, entry, &item_path);
                    }
                }
            }
            Some(other) => self.fail(
                path,
                format!("Expected array, received {}", type_name(other)),
            ),
        }
    }

    fn required_string<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        key: &'static str,
        path: &[PathSegment],
        empty_message: &str,
    ) -> Option<&'a str> {
        let path = child(path, PathSegment::Key(key));
        match obj.get(key) {
            None => {
                self.fail(path, "Required");
                None
            }
            Some(Value::String(s)) if s.is_empty() => {
                self.fail(path, empty_message);
                None
            }
            Some(Value::String(s)) => Some(s),
            Some(other) => {
                self.fail(
                    path,
                    format!("Expected string, received {}", type_name(other)),
                );
                None
            }
        }
    }

    fn optional_string(&mut self, obj: &Map<String, Value>, key: &'static str, path: &[PathSegment]) {
        match obj.get(key) {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(other) => self.fail(
                child(path, PathSegment::Key(key)),
                format!("Expected string, received {}", type_name(other)),
            ),
        }
    }

    fn number(
        &mut self,
        obj: &Map<String, Value>,
        key: &'static str,
        path: &[PathSegment],
        min: Option<f64>,
        max: Option<f64>,
    ) {
        let path = child(path, PathSegment::Key(key));
        let number = match obj.get(key) {
            None => return self.fail(path, "Required"),
            Some(Value::Number(n)) => n,
            Some(other) => {
                return self.fail(
                    path,
                    format!("Expected number, received {}", type_name(other)),
                )
            }
        };

        let Some(n) = number.as_f64() else {
            return self.fail(path, "Expected a finite number");
        };

        if let Some(min) = min.filter(|min| n < *min) {
            self.fail(path, format!("Number must be greater than or equal to {min}"));
        } else if let Some(max) = max.filter(|max| n > *max) {
            self.fail(path, format!("Number must be less than or equal to {max}"));
        }
    }
}
