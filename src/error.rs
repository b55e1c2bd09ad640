//! Error types for the dashboard
//!
//! Anything that can go wrong while loading assets, decoding uploads or
//! reading settings ends up here. Errors that have to travel through iced
//! messages are flattened to `String` with `to_string()`, so the `Display`
//! text of each variant is what the user sees.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    /// A bundled asset (sample or home illustration) is missing or unreadable
    #[error("asset unavailable: {}", path.display())]
    AssetUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A bundled asset exists but is not a decodable image
    #[error("asset unavailable: {} could not be decoded", path.display())]
    AssetUnreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Upload with an extension or format we don't accept
    #[error("unsupported or corrupt file: {name} (expected jpg, jpeg or png)")]
    UnsupportedUpload { name: String },

    /// Upload that claims to be an image but fails to decode
    #[error("unsupported or corrupt file: {name}")]
    CorruptUpload {
        name: String,
        #[source]
        source: image::ImageError,
    },

    /// Upload that could not be read from disk
    #[error("unsupported or corrupt file: {name} (could not be read)")]
    UploadRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("settings error: {0}")]
    Config(#[from] ConfigError),
}
