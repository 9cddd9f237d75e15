use crate::domain::model::{
    RecommendationRequest, Service, User, DEFAULT_ACTIVITY_LEVEL, DEFAULT_CATEGORY_IMPORTANCE,
    DEFAULT_TOP_N, DEFAULT_USAGE_COUNT, EXPIRY_DATE_FORMAT, MAX_TOP_N, MIN_TOP_N,
};
use crate::utils::error::{Result, ValidationError, ViolationKind};
use crate::utils::validation::{
    expect_array, expect_object, validate_range, ObjectReader, Validate, Violations,
};
use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Value};

pub const ROOT_PATH: &str = "$";

const EXPIRY_DATE_FORMAT_LEN: usize = "YYYY-MM-DD".len();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Require `expiry_date` to be `YYYY-MM-DD` and `last_login` to be RFC 3339.
    pub strict_dates: bool,
}

/// Turns untyped payloads into [`RecommendationRequest`] values, reporting
/// every violation found rather than the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator {
    options: ValidatorOptions,
}

impl SchemaValidator {
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ValidatorOptions {
        self.options
    }

    pub fn validate(
        &self,
        payload: &Value,
    ) -> std::result::Result<RecommendationRequest, ValidationError> {
        let mut violations = Violations::new();
        let request = self.read_request(payload, &mut violations);

        tracing::debug!(
            violations = violations.len(),
            "Validated recommendation request payload"
        );

        match request {
            Some(request) => violations.into_result(request),
            None => Err(violations.into_error()),
        }
    }

    pub fn validate_str(&self, payload: &str) -> Result<RecommendationRequest> {
        let value: Value = serde_json::from_str(payload)?;
        Ok(self.validate(&value)?)
    }

    pub fn validate_slice(&self, payload: &[u8]) -> Result<RecommendationRequest> {
        let value: Value = serde_json::from_slice(payload)?;
        Ok(self.validate(&value)?)
    }

    fn read_request(
        &self,
        payload: &Value,
        violations: &mut Violations,
    ) -> Option<RecommendationRequest> {
        let object = expect_object(ROOT_PATH, payload, violations)?;
        let reader = ObjectReader::new(object, "");

        let user = reader
            .required("user", violations)
            .and_then(|value| expect_object("user", value, violations))
            .and_then(|user| self.read_user(user, violations));

        let services = reader
            .required("services", violations)
            .and_then(|value| expect_array("services", value, violations))
            .and_then(|items| self.read_services(items, violations));

        let top_n =
            reader.bounded_i64_or("top_n", DEFAULT_TOP_N, MIN_TOP_N, MAX_TOP_N, violations);

        Some(RecommendationRequest {
            user: user?,
            services: services?,
            top_n: top_n?,
        })
    }

    fn read_services(&self, items: &[Value], violations: &mut Violations) -> Option<Vec<Service>> {
        let mut services = Vec::with_capacity(items.len());
        let mut complete = true;

        for (index, item) in items.iter().enumerate() {
            let path = format!("services[{}]", index);
            let service = expect_object(&path, item, violations)
                .and_then(|object| self.read_service(object, &path, violations));
            match service {
                Some(service) => services.push(service),
                None => complete = false,
            }
        }

        complete.then_some(services)
    }

    fn read_service(
        &self,
        object: &Map<String, Value>,
        path: &str,
        violations: &mut Violations,
    ) -> Option<Service> {
        let reader = ObjectReader::new(object, path);

        let service_id = reader.required_i64("service_id", violations);
        let name = reader.required_string("name", violations);
        let category = reader.required_string("category", violations);
        let expiry_date = reader.required_string("expiry_date", violations);
        let days_left = reader.required_i64("days_left", violations);
        let usage_count = reader.i64_or("usage_count", DEFAULT_USAGE_COUNT, violations);
        let category_importance =
            reader.f64_or("category_importance", DEFAULT_CATEGORY_IMPORTANCE, violations);
        let seasonality = reader.nullable_string("seasonality", violations);

        if self.options.strict_dates {
            if let Some(date) = &expiry_date {
                // chrono accepts unpadded fields such as 2026-1-5
                let padded = date.len() == EXPIRY_DATE_FORMAT_LEN;
                if !padded || NaiveDate::parse_from_str(date, EXPIRY_DATE_FORMAT).is_err() {
                    violations.push(
                        reader.path("expiry_date"),
                        ViolationKind::InvalidFormat {
                            expected: "date in YYYY-MM-DD format",
                        },
                    );
                    return None;
                }
            }
        }

        Some(Service {
            service_id: service_id?,
            name: name?,
            category: category?,
            expiry_date: expiry_date?,
            days_left: days_left?,
            usage_count: usage_count?,
            category_importance: category_importance?,
            seasonality: seasonality?,
        })
    }

    fn read_user(&self, object: &Map<String, Value>, violations: &mut Violations) -> Option<User> {
        let reader = ObjectReader::new(object, "user");

        let id = reader.required_i64("id", violations);
        let name = reader.required_string("name", violations);
        let national_id = reader.required_string("national_id", violations);
        let city = reader.required_string("city", violations);
        let activity_level = reader.string_or("activity_level", DEFAULT_ACTIVITY_LEVEL, violations);
        let phone = reader.required_string("phone", violations);
        let last_login = reader.required_string("last_login", violations);

        if self.options.strict_dates {
            if let Some(timestamp) = &last_login {
                if DateTime::parse_from_rfc3339(timestamp).is_err() {
                    violations.push(
                        reader.path("last_login"),
                        ViolationKind::InvalidFormat {
                            expected: "RFC 3339 timestamp",
                        },
                    );
                    return None;
                }
            }
        }

        Some(User {
            id: id?,
            name: name?,
            national_id: national_id?,
            city: city?,
            activity_level: activity_level?,
            phone: phone?,
            last_login: last_login?,
        })
    }
}

/// Decodes with default options; the only way to build a request from JSON.
impl TryFrom<&Value> for RecommendationRequest {
    type Error = ValidationError;

    fn try_from(payload: &Value) -> std::result::Result<Self, Self::Error> {
        SchemaValidator::default().validate(payload)
    }
}

impl Validate for RecommendationRequest {
    fn validate(&self) -> Result<()> {
        validate_range("top_n", self.top_n, MIN_TOP_N, MAX_TOP_N)
    }
}
