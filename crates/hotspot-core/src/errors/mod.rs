mod concurrency_error;
mod config_error;
mod invariant_error;
mod state_error;
mod validation_error;

pub use concurrency_error::ConcurrencyError;
pub use config_error::ConfigError;
pub use invariant_error::InvariantViolation;
pub use state_error::StateError;
pub use validation_error::ValidationError;

/// Top-level error for every engine operation.
#[derive(Debug, thiserror::Error)]
pub enum HotspotError {
    #[error("validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("state error: {0}")]
    StateError(#[from] StateError),

    #[error("invariant violation: {0}")]
    InvariantViolation(#[from] InvariantViolation),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("concurrency error: {0}")]
    ConcurrencyError(#[from] ConcurrencyError),
}

impl HotspotError {
    /// Validation errors are reported to the submitter and never reach clustering.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Internal faults: the mutation was aborted and prior state kept.
    pub fn is_internal_fault(&self) -> bool {
        matches!(self, Self::InvariantViolation(_) | Self::ConcurrencyError(_))
    }
}

pub type HotspotResult<T> = Result<T, HotspotError>;
