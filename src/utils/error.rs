use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Payload is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SchemaError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Input,
    Configuration,
}

impl SchemaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SchemaError::Validation(_) => ErrorCategory::Validation,
            SchemaError::Decode(_) | SchemaError::Io(_) => ErrorCategory::Input,
            SchemaError::Config { .. } | SchemaError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation => 1,
            ErrorCategory::Input => 2,
            ErrorCategory::Configuration => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SchemaError::Validation(e) => format!(
                "Request rejected: {} field(s) failed validation ({})",
                e.violations().len(),
                e.fields().join(", ")
            ),
            SchemaError::Decode(e) => format!("Could not decode the request payload: {}", e),
            SchemaError::Io(e) => format!("Could not read the request payload: {}", e),
            SchemaError::Config { message } => format!("Bad configuration: {}", message),
            SchemaError::InvalidConfigValue { field, reason, .. } => {
                format!("Bad configuration value for '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => {
                "Fix the listed fields; run with --example to see a valid request"
            }
            ErrorCategory::Input => "Check that the input exists and contains a single JSON object",
            ErrorCategory::Configuration => "Check the TOML configuration file and CLI flags",
        }
    }
}

/// What went wrong with a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationKind {
    Missing,
    InvalidType {
        expected: &'static str,
        found: &'static str,
    },
    OutOfRange {
        value: i128,
        min: i64,
        max: i64,
    },
    InvalidFormat {
        expected: &'static str,
    },
}

impl ViolationKind {
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::Missing => "missing",
            ViolationKind::InvalidType { .. } => "invalid_type",
            ViolationKind::OutOfRange { .. } => "out_of_range",
            ViolationKind::InvalidFormat { .. } => "invalid_format",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Missing => write!(f, "field required"),
            ViolationKind::InvalidType { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
            ViolationKind::OutOfRange { value, min, max } => {
                write!(f, "value {} must be between {} and {}", value, min, max)
            }
            ViolationKind::InvalidFormat { expected } => write!(f, "expected {}", expected),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub path: String,
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn new(path: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// Every violation found in one payload, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.path.as_str()).collect()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }

    pub fn find(&self, path: &str) -> Option<&FieldViolation> {
        self.violations.iter().find(|v| v.path == path)
    }

    /// Report body in the `{"detail": [...]}` shape returned to callers.
    pub fn report(&self) -> ValidationReport {
        ValidationReport {
            detail: self
                .violations
                .iter()
                .map(|v| ReportEntry {
                    loc: v.path.clone(),
                    kind: v.kind.code(),
                    message: v.kind.to_string(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "\n  {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub detail: Vec<ReportEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub loc: String,
    pub kind: &'static str,
    pub message: String,
}
