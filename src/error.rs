use std::fmt;

use serde_json::Value;

#[derive(Debug)]
pub struct Error {
    pub parameter: String,
    pub message: String,
}

impl Error {
    pub fn empty_enum(parameter: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            message: "enum must declare at least one allowed value".to_string(),
        }
    }

    pub fn non_primitive_enum(parameter: impl Into<String>, value: &Value) -> Self {
        Self {
            parameter: parameter.into(),
            message: format!("enum values must be primitive, got {}", value),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parameter.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "parameter `{}`: {}", self.parameter, self.message)
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
