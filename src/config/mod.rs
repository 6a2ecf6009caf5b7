//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `ARTONTOK`
//! prefix and `__` as the nesting separator, e.g.
//! `ARTONTOK__PAYMENT__STORE_ID=...` -> `payment.store_id`.

mod ai;
mod error;
mod inquiry;
mod payment;
mod storage;

pub use ai::AiConfig;
pub use error::{ConfigError, ConfigValidationError};
pub use inquiry::InquiryConfig;
pub use payment::PaymentConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Blob store location.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Gemini keyword service.
    #[serde(default)]
    pub ai: AiConfig,

    /// Lead-capture form endpoint.
    #[serde(default)]
    pub inquiry: InquiryConfig,

    /// Membership payment constants.
    #[serde(default)]
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Load configuration from the environment (and `.env` in development).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ARTONTOK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation across all sections.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.inquiry.validate()?;
        self.payment.validate()?;
        Ok(())
    }
}
