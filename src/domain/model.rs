use chrono::{DateTime, FixedOffset, NaiveDate};
use schemars::JsonSchema;
use serde::Serialize;

pub const DEFAULT_USAGE_COUNT: i64 = 0;
pub const DEFAULT_CATEGORY_IMPORTANCE: f64 = 0.5;
pub const DEFAULT_ACTIVITY_LEVEL: &str = "medium";
pub const DEFAULT_TOP_N: i64 = 5;
pub const MIN_TOP_N: i64 = 1;
pub const MAX_TOP_N: i64 = 10;

pub const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";

fn default_usage_count() -> i64 {
    DEFAULT_USAGE_COUNT
}

fn default_category_importance() -> f64 {
    DEFAULT_CATEGORY_IMPORTANCE
}

fn default_activity_level() -> String {
    DEFAULT_ACTIVITY_LEVEL.to_string()
}

fn default_top_n() -> i64 {
    DEFAULT_TOP_N
}

/// A service the user holds, with its expiry timeline and usage signal.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[schemars(example = "Service::example")]
pub struct Service {
    pub service_id: i64,
    pub name: String,
    pub category: String,
    pub expiry_date: String,
    pub days_left: i64,
    #[serde(default = "default_usage_count")]
    pub usage_count: i64,
    #[serde(default = "default_category_importance")]
    pub category_importance: f64,
    #[serde(default)]
    pub seasonality: Option<String>,
}

impl Service {
    pub fn example() -> Self {
        Self {
            service_id: 101,
            name: "Passport Renewal".to_string(),
            category: "travel".to_string(),
            expiry_date: "2026-01-25".to_string(),
            days_left: 28,
            usage_count: 4,
            category_importance: 0.8,
            seasonality: Some("in_season".to_string()),
        }
    }

    /// `expiry_date` as a calendar date, if it is written as `YYYY-MM-DD`.
    pub fn expiry_as_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.expiry_date, EXPIRY_DATE_FORMAT).ok()
    }
}

/// The account holder recommendations are requested for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[schemars(example = "User::example")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub national_id: String,
    pub city: String,
    #[serde(default = "default_activity_level")]
    pub activity_level: String,
    pub phone: String,
    pub last_login: String,
}

impl User {
    pub fn example() -> Self {
        Self {
            id: 1,
            name: "Ghadeer Sameer".to_string(),
            national_id: "2190065411".to_string(),
            city: "Riyadh".to_string(),
            activity_level: "high".to_string(),
            phone: "+966500000000".to_string(),
            last_login: "2025-01-18T09:32:00Z".to_string(),
        }
    }

    /// `last_login` as an RFC 3339 timestamp, if it is one.
    pub fn last_login_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.last_login).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[schemars(example = "RecommendationRequest::example")]
pub struct RecommendationRequest {
    pub user: User,
    pub services: Vec<Service>,
    /// Number of top recommendations to return
    #[serde(default = "default_top_n")]
    #[schemars(range(min = 1, max = 10))]
    pub top_n: i64,
}

impl RecommendationRequest {
    pub fn new(user: User, services: Vec<Service>) -> Self {
        Self {
            user,
            services,
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_top_n(mut self, top_n: i64) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn example() -> Self {
        Self::new(User::example(), vec![Service::example()])
    }
}
