//! Error types for glyphgeo

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GlyphGeoError>;

/// Main error type for glyphgeo
///
/// Every failure is local and final: a conversion that errors hands back
/// no partial feature collection.
#[derive(Debug, Error)]
pub enum GlyphGeoError {
    #[error("Invalid font handle: {0}")]
    InvalidFontHandle(String),

    #[error("Text produced no geometry")]
    EmptyGeometry,

    #[error("Unsupported path command: {0}")]
    UnsupportedPathCommand(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Export failed: {0}")]
    ExportFailed(#[from] ExportError),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("Font not supported: {0}")]
    NotSupported(String),
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}
