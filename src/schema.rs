//! Inbound task configuration schema
//!
//! The data part of an inbound message carries an untyped mapping that must
//! match the [`TaskConfig`] shape. Validation walks the raw value and
//! collects every field-level problem instead of failing on the first, so a
//! caller fixing a rejected payload sees the full diagnostic list at once.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A single configurable input parameter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Parameter {
    /// The configured value: a string or an ordered list of strings
    pub value: ParameterValue,

    /// Tag describing the semantic kind of the value
    pub value_type: String,

    /// Human-readable description of the parameter
    pub description: String,

    /// Example value, same shape as `value`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_value: Option<ParameterValue>,

    /// Whether the value was lifted from conversation context
    pub from_conversation: bool,

    /// Allowed values, when the parameter is constrained
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_options: Option<Vec<String>>,
}

impl Parameter {
    /// The value as a single string, when it is one
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            ParameterValue::Text(text) => Some(text),
            ParameterValue::List(_) => None,
        }
    }
}

/// A parameter value: a single string or an ordered list of strings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ParameterValue {
    /// A single string
    Text(String),

    /// An ordered list of strings
    List(Vec<String>),
}

/// The task configuration this agent accepts: one parameter under
/// `target_text`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskConfig {
    /// The text to transform
    pub target_text: Parameter,
}

impl TaskConfig {
    /// Validate and coerce an untyped mapping into a `TaskConfig`
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every field-level problem found.
    pub fn parse(data: &Value) -> Result<Self, ValidationError> {
        let mut issues = Vec::new();

        let Some(obj) = data.as_object() else {
            return Err(ValidationError::single(
                "target_text",
                format!("payload must be an object, got {}", type_name(data)),
            ));
        };

        let target_text = match obj.get("target_text") {
            Some(raw) => parse_parameter("target_text", raw, &mut issues),
            None => {
                issues.push(FieldIssue::new("target_text", "field is required"));
                None
            }
        };

        match target_text {
            Some(target_text) if issues.is_empty() => Ok(Self { target_text }),
            _ => Err(ValidationError { issues }),
        }
    }
}

/// A single field-level validation problem
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldIssue {
    /// Dotted path of the offending field
    pub field: String,

    /// What is wrong with it
    pub problem: String,
}

impl FieldIssue {
    fn new(field: impl Into<String>, problem: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            problem: problem.into(),
        }
    }
}

fn issue_summary(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.problem))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validation failure carrying the full field-level diagnostic list
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid task configuration: {}", issue_summary(.issues))]
pub struct ValidationError {
    /// Every problem found, in document order
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// A validation error with exactly one issue
    pub fn single(field: impl Into<String>, problem: impl Into<String>) -> Self {
        Self {
            issues: vec![FieldIssue::new(field, problem)],
        }
    }

    /// The diagnostic list as a JSON value, for error envelope payloads
    pub fn to_data(&self) -> Value {
        serde_json::to_value(&self.issues).unwrap_or(Value::Null)
    }
}

fn parse_parameter(path: &str, raw: &Value, issues: &mut Vec<FieldIssue>) -> Option<Parameter> {
    let Some(obj) = raw.as_object() else {
        issues.push(FieldIssue::new(
            path,
            format!("expected an object, got {}", type_name(raw)),
        ));
        return None;
    };

    let value = parse_value(&format!("{path}.value"), obj.get("value"), issues);
    let value_type = require_string(&format!("{path}.value_type"), obj.get("value_type"), issues);
    let description = require_string(&format!("{path}.description"), obj.get("description"), issues);
    let from_conversation = require_bool(
        &format!("{path}.from_conversation"),
        obj.get("from_conversation"),
        issues,
    );

    let example_value = match obj.get("example_value") {
        None | Some(Value::Null) => None,
        Some(raw) => parse_value(&format!("{path}.example_value"), Some(raw), issues),
    };

    let value_options = match obj.get("value_options") {
        None | Some(Value::Null) => None,
        Some(raw) => parse_string_list(&format!("{path}.value_options"), raw, issues),
    };

    Some(Parameter {
        value: value?,
        value_type: value_type?,
        description: description?,
        example_value,
        from_conversation: from_conversation?,
        value_options,
    })
}

fn parse_value(
    path: &str,
    raw: Option<&Value>,
    issues: &mut Vec<FieldIssue>,
) -> Option<ParameterValue> {
    match raw {
        None | Some(Value::Null) => {
            issues.push(FieldIssue::new(path, "field is required"));
            None
        }
        Some(Value::String(text)) => Some(ParameterValue::Text(text.clone())),
        Some(Value::Array(elements)) => {
            let mut strings = Vec::with_capacity(elements.len());
            for (index, element) in elements.iter().enumerate() {
                match element.as_str() {
                    Some(text) => strings.push(text.to_string()),
                    None => {
                        issues.push(FieldIssue::new(
                            path,
                            format!("element {index} is not a string"),
                        ));
                        return None;
                    }
                }
            }
            Some(ParameterValue::List(strings))
        }
        Some(other) => {
            issues.push(FieldIssue::new(
                path,
                format!(
                    "expected a string or a list of strings, got {}",
                    type_name(other)
                ),
            ));
            None
        }
    }
}

fn parse_string_list(path: &str, raw: &Value, issues: &mut Vec<FieldIssue>) -> Option<Vec<String>> {
    let Some(elements) = raw.as_array() else {
        issues.push(FieldIssue::new(
            path,
            format!("expected a list of strings, got {}", type_name(raw)),
        ));
        return None;
    };

    let mut strings = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        match element.as_str() {
            Some(text) => strings.push(text.to_string()),
            None => {
                issues.push(FieldIssue::new(
                    path,
                    format!("element {index} is not a string"),
                ));
                return None;
            }
        }
    }
    Some(strings)
}

fn require_string(path: &str, raw: Option<&Value>, issues: &mut Vec<FieldIssue>) -> Option<String> {
    match raw {
        None | Some(Value::Null) => {
            issues.push(FieldIssue::new(path, "field is required"));
            None
        }
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => {
            issues.push(FieldIssue::new(
                path,
                format!("expected a string, got {}", type_name(other)),
            ));
            None
        }
    }
}

fn require_bool(path: &str, raw: Option<&Value>, issues: &mut Vec<FieldIssue>) -> Option<bool> {
    match raw {
        None | Some(Value::Null) => {
            issues.push(FieldIssue::new(path, "field is required"));
            None
        }
        Some(Value::Bool(flag)) => Some(*flag),
        Some(other) => {
            issues.push(FieldIssue::new(
                path,
                format!("expected a boolean, got {}", type_name(other)),
            ));
            None
        }
    }
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
