use crate::core::validator::SchemaValidator;
use crate::core::PayloadSource;
use crate::domain::model::RecommendationRequest;
use crate::utils::error::Result;

/// Reads one payload from a source and validates it.
pub struct RequestIntake<S: PayloadSource> {
    source: S,
    validator: SchemaValidator,
}

impl<S: PayloadSource> RequestIntake<S> {
    pub fn new(source: S, validator: SchemaValidator) -> Self {
        Self { source, validator }
    }

    pub async fn run(&self) -> Result<RecommendationRequest> {
        let origin = self.source.describe();
        tracing::info!(
            strict_dates = self.validator.options().strict_dates,
            "📥 Reading request payload from {}",
            origin
        );

        let raw = self.source.read_payload().await?;
        tracing::debug!("Read {} bytes", raw.len());

        match self.validator.validate_slice(&raw) {
            Ok(request) => {
                tracing::info!(
                    user_id = request.user.id,
                    services = request.services.len(),
                    top_n = request.top_n,
                    "✅ Request validated"
                );
                Ok(request)
            }
            Err(e) => {
                tracing::warn!("❌ Request from {} rejected: {}", origin, e);
                Err(e)
            }
        }
    }
}
