//! # Nightly Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Nightly Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │     Output      │  │        Domain           │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Io             │  │  Core (CoreError)       │ │
//! │  │  ConfigLoad...  │  │  Json           │  │                         │ │
//! │  │  TomlParse      │  │  TomlSerialize  │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use gilded_core::CoreError;
use thiserror::Error;

/// Result type alias for nightly driver operations.
pub type NightlyResult<T> = Result<T, NightlyError>;

#[derive(Debug, Error)]
pub enum NightlyError {
    /// Configuration parsed but makes no sense.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be found or read.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A cart or catalog rule rejected an operation.
    #[error(transparent)]
    Core(#[from] CoreError),
}
