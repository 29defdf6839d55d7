//! Engine error types
//!
//! Only the cold paths (asset installation, configuration I/O) surface
//! errors. The per-tick path never fails: missing data degrades to
//! holding the last good visual state, reported through
//! [`TrackingStatus`](crate::session::TrackingStatus) instead of an error.

use thiserror::Error;

/// Errors from the engine's loading and configuration seams
#[derive(Debug, Error)]
pub enum EngineError {
    /// The host reported that an asset could not be fetched or decoded
    #[error("failed to load asset from {url}: {reason}")]
    AssetLoad { url: String, reason: String },

    /// Configuration file could not be read or written
    #[error("configuration I/O failed")]
    ConfigIo(#[from] std::io::Error),

    /// Configuration file could not be serialized
    #[error("configuration serialization failed")]
    ConfigSerialize(#[from] toml::ser::Error),
}
