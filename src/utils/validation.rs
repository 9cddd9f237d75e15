use crate::utils::error::{FieldViolation, Result, SchemaError, ValidationError, ViolationKind};
use serde_json::{Map, Value};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accumulates field violations so a whole payload can be checked in one pass.
#[derive(Debug, Default)]
pub struct Violations {
    items: Vec<FieldViolation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<String>, kind: ViolationKind) {
        self.items.push(FieldViolation::new(path, kind));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn into_result<T>(self, value: T) -> std::result::Result<T, ValidationError> {
        if self.items.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError::new(self.items))
        }
    }

    pub fn into_error(self) -> ValidationError {
        ValidationError::new(self.items)
    }
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Integer carried by a JSON number or a numeric string. Floats count only
/// when they have no fractional part. Widened to i128 so values past the
/// 64-bit range can still be range-checked.
pub fn integral_value(value: &Value) -> Option<i128> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.into())
            } else if let Some(u) = n.as_u64() {
                Some(u.into())
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i128)
            }
        }
        Value::String(s) => s.trim().parse::<i128>().ok(),
        _ => None,
    }
}

fn push_invalid_type(
    path: &str,
    expected: &'static str,
    value: &Value,
    violations: &mut Violations,
) {
    violations.push(
        path,
        ViolationKind::InvalidType {
            expected,
            found: json_type_name(value),
        },
    );
}

pub fn expect_i64(path: &str, value: &Value, violations: &mut Violations) -> Option<i64> {
    let Some(n) = integral_value(value) else {
        push_invalid_type(path, "integer", value, violations);
        return None;
    };

    match i64::try_from(n) {
        Ok(n) => Some(n),
        Err(_) => {
            violations.push(
                path,
                ViolationKind::InvalidType {
                    expected: "integer",
                    found: "integer outside the 64-bit range",
                },
            );
            None
        }
    }
}

/// Like [`expect_i64`], but any integral input outside `[min, max]` is a
/// range violation, however large it is.
pub fn expect_bounded_i64(
    path: &str,
    value: &Value,
    min: i64,
    max: i64,
    violations: &mut Violations,
) -> Option<i64> {
    let Some(n) = integral_value(value) else {
        push_invalid_type(path, "integer", value, violations);
        return None;
    };

    if let Some(violation) = check_range(path, n, min, max) {
        violations.push(violation.path, violation.kind);
        return None;
    }
    i64::try_from(n).ok()
}

pub fn expect_f64(path: &str, value: &Value, violations: &mut Violations) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    };

    if parsed.is_none() {
        push_invalid_type(path, "number", value, violations);
    }
    parsed
}

pub fn expect_string(path: &str, value: &Value, violations: &mut Violations) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        other => {
            violations.push(
                path,
                ViolationKind::InvalidType {
                    expected: "string",
                    found: json_type_name(other),
                },
            );
            None
        }
    }
}

pub fn expect_object<'a>(
    path: &str,
    value: &'a Value,
    violations: &mut Violations,
) -> Option<&'a Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        other => {
            violations.push(
                path,
                ViolationKind::InvalidType {
                    expected: "object",
                    found: json_type_name(other),
                },
            );
            None
        }
    }
}

pub fn expect_array<'a>(
    path: &str,
    value: &'a Value,
    violations: &mut Violations,
) -> Option<&'a [Value]> {
    match value {
        Value::Array(items) => Some(items),
        other => {
            violations.push(
                path,
                ViolationKind::InvalidType {
                    expected: "array",
                    found: json_type_name(other),
                },
            );
            None
        }
    }
}

/// Typed field access on one JSON object. Every accessor records its own
/// violation and returns `None` on failure, so callers can keep going.
pub struct ObjectReader<'a> {
    object: &'a Map<String, Value>,
    prefix: &'a str,
}

impl<'a> ObjectReader<'a> {
    pub fn new(object: &'a Map<String, Value>, prefix: &'a str) -> Self {
        Self { object, prefix }
    }

    pub fn path(&self, field: &str) -> String {
        if self.prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", self.prefix, field)
        }
    }

    pub fn required(&self, field: &str, violations: &mut Violations) -> Option<&'a Value> {
        let value = self.object.get(field);
        if value.is_none() {
            violations.push(self.path(field), ViolationKind::Missing);
        }
        value
    }

    pub fn required_i64(&self, field: &str, violations: &mut Violations) -> Option<i64> {
        let value = self.required(field, violations)?;
        expect_i64(&self.path(field), value, violations)
    }

    pub fn required_string(&self, field: &str, violations: &mut Violations) -> Option<String> {
        let value = self.required(field, violations)?;
        expect_string(&self.path(field), value, violations)
    }

    pub fn i64_or(&self, field: &str, default: i64, violations: &mut Violations) -> Option<i64> {
        match self.object.get(field) {
            Some(value) => expect_i64(&self.path(field), value, violations),
            None => Some(default),
        }
    }

    pub fn bounded_i64_or(
        &self,
        field: &str,
        default: i64,
        min: i64,
        max: i64,
        violations: &mut Violations,
    ) -> Option<i64> {
        match self.object.get(field) {
            Some(value) => expect_bounded_i64(&self.path(field), value, min, max, violations),
            None => Some(default),
        }
    }

    pub fn f64_or(&self, field: &str, default: f64, violations: &mut Violations) -> Option<f64> {
        match self.object.get(field) {
            Some(value) => expect_f64(&self.path(field), value, violations),
            None => Some(default),
        }
    }

    pub fn string_or(
        &self,
        field: &str,
        default: &str,
        violations: &mut Violations,
    ) -> Option<String> {
        match self.object.get(field) {
            Some(value) => expect_string(&self.path(field), value, violations),
            None => Some(default.to_string()),
        }
    }

    /// Omitted and `null` both mean "absent".
    pub fn nullable_string(
        &self,
        field: &str,
        violations: &mut Violations,
    ) -> Option<Option<String>> {
        match self.object.get(field) {
            None | Some(Value::Null) => Some(None),
            Some(value) => expect_string(&self.path(field), value, violations).map(Some),
        }
    }
}

pub fn check_range(path: &str, value: i128, min: i64, max: i64) -> Option<FieldViolation> {
    if value < i128::from(min) || value > i128::from(max) {
        Some(FieldViolation::new(
            path,
            ViolationKind::OutOfRange { value, min, max },
        ))
    } else {
        None
    }
}

pub fn validate_range(field_name: &str, value: i64, min: i64, max: i64) -> Result<()> {
    match check_range(field_name, value.into(), min, max) {
        Some(violation) => Err(SchemaError::Validation(ValidationError::new(vec![
            violation,
        ]))),
        None => Ok(()),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SchemaError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(SchemaError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
