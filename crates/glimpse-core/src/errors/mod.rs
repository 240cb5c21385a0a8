//! Error handling for Glimpse.
//! One error enum per subsystem, `thiserror` only.
//!
//! None of these ever reach the host page: the tracker resolves them at the
//! call site and reports through [`crate::Diagnostics`].

pub mod config_error;
pub mod storage_error;
pub mod transport_error;

pub use config_error::ConfigError;
pub use storage_error::StorageError;
pub use transport_error::TransportError;

/// Aggregate error for all Glimpse subsystems.
#[derive(Debug, thiserror::Error)]
pub enum GlimpseError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type GlimpseResult<T> = Result<T, GlimpseError>;
