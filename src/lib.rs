pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::{FilePayload, StdinPayload};
pub use config::toml_config::TomlConfig;

pub use core::intake::RequestIntake;
pub use core::schema::request_json_schema;
pub use core::validator::{SchemaValidator, ValidatorOptions};
pub use domain::model::{RecommendationRequest, Service, User};
pub use utils::error::{FieldViolation, Result, SchemaError, ValidationError, ViolationKind};
