use crate::config::ConfigError;
use crate::identity::IdentityError;
use crate::marketplace::MarketplaceError;
use crate::telemetry::TelemetryError;
use std::fmt;

/// Process-level error surfaced by command-line consumers.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Identity(IdentityError),
    Marketplace(MarketplaceError),
    /// Input refused by a consumer-side policy before it reached a store.
    InvalidInput(String),
    NotSignedIn,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Identity(err) => write!(f, "{}", err),
            AppError::Marketplace(err) => write!(f, "{}", err),
            AppError::InvalidInput(message) => write!(f, "invalid input: {}", message),
            AppError::NotSignedIn => write!(f, "no active session, log in first"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Identity(err) => Some(err),
            AppError::Marketplace(err) => Some(err),
            AppError::InvalidInput(_) | AppError::NotSignedIn => None,
        }
    }
}

impl AppError {
    /// True for conditions the user can resolve by retrying with different input.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Identity(IdentityError::Storage(_) | IdentityError::Credential(_))
            | AppError::Marketplace(MarketplaceError::Storage(_))
            | AppError::Config(_)
            | AppError::Telemetry(_) => false,
            AppError::Identity(_)
            | AppError::Marketplace(_)
            | AppError::InvalidInput(_)
            | AppError::NotSignedIn => true,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<IdentityError> for AppError {
    fn from(value: IdentityError) -> Self {
        Self::Identity(value)
    }
}

impl From<MarketplaceError> for AppError {
    fn from(value: MarketplaceError) -> Self {
        Self::Marketplace(value)
    }
}
