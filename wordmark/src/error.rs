//! Error types for the OpenPilot wordmark crate.
//!
//! Rendering itself never fails: widths saturate and narrow terminals get a
//! smaller variant. Errors only come from configuration, from turning text
//! into brand letters, and from writing the result out.

use thiserror::Error;

use crate::config::ConfigError;
use crate::glyph::GlyphError;

/// Errors that can occur around the wordmark engine.
#[derive(Error, Debug)]
pub enum WordmarkError {
    /// Configuration-related error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Text contained a letter with no glyph.
    #[error("glyph error: {0}")]
    Glyph(#[from] GlyphError),

    /// Writing the rendered logo failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for wordmark operations.
pub type Result<T> = std::result::Result<T, WordmarkError>;
