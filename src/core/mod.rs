pub mod intake;
pub mod schema;
pub mod validator;

pub use crate::domain::model::{RecommendationRequest, Service, User};
pub use crate::domain::ports::{ConfigProvider, PayloadSource};
pub use crate::utils::error::Result;
