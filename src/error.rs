//! Error types for panel detection and export.
//!
//! The segmentation core itself is total; every variant here originates at
//! the edges of the pipeline (decoding, surface setup, file I/O, parameter
//! validation) or from a cooperative cancellation request.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for panel_detector operations.
pub type Result<T> = std::result::Result<T, PanelError>;

#[derive(Error, Debug)]
pub enum PanelError {
    /// Image bytes could not be decoded into a pixel buffer.
    #[error("Failed to decode image: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<image::ImageError>,
    },

    /// A readable pixel surface could not be formed from the decoded data.
    #[error("Could not acquire pixel surface: {reason}")]
    SurfaceAcquisition { reason: String },

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A panel crop could not be encoded.
    #[error("Failed to encode panel {index}: {source}")]
    Encode {
        index: usize,
        #[source]
        source: image::ImageError,
    },

    /// A configuration file could not be parsed.
    #[error("Invalid configuration {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Segmentation was aborted through its cancellation flag.
    #[error("Segmentation cancelled after {rows_scanned} rows")]
    Cancelled { rows_scanned: usize },
}

impl PanelError {
    pub fn decode(message: impl Into<String>, source: image::ImageError) -> Self {
        Self::Decode {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn surface(reason: impl Into<String>) -> Self {
        Self::SurfaceAcquisition {
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Short description suitable for showing to an end user.
    pub fn user_message(&self) -> String {
        match self {
            PanelError::Decode { .. } => "Failed to load image for processing.".to_string(),
            PanelError::SurfaceAcquisition { .. } => {
                "Could not read pixel data from the image.".to_string()
            }
            PanelError::Cancelled { .. } => "Panel detection was cancelled.".to_string(),
            PanelError::Io { path, .. } => format!("Could not access {}.", path.display()),
            _ => "An unknown error occurred during frame segmentation.".to_string(),
        }
    }
}
