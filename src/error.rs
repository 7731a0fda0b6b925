use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for icon rendering and export
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(icons::io))]
    Io { path: PathBuf, message: String },

    #[error("Failed to encode {path}: {message}")]
    #[diagnostic(code(icons::encode))]
    Encode { path: PathBuf, message: String },

    #[error("No usable font found (tried: {tried})")]
    #[diagnostic(
        code(icons::missing_font),
        help("Install DejaVu Sans Mono or pass a font file with --font")
    )]
    MissingFont { tried: String },

    #[error("Font has no outline for glyph '{glyph}'")]
    #[diagnostic(code(icons::missing_glyph))]
    MissingGlyph { glyph: char },

    #[error("Cannot render a {size}x{size} icon")]
    #[diagnostic(code(icons::size))]
    InvalidSize { size: u32 },

    #[error("Failed to serialize {what}: {message}")]
    #[diagnostic(code(icons::serialize))]
    Serialize { what: String, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(icons::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{failed} of {total} icons failed to export")]
    #[diagnostic(code(icons::export), help("See the error lines above for each failed icon"))]
    Export { failed: usize, total: usize },
}

impl IconError {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        IconError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;
