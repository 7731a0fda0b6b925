//! execscript-icons - brand icon generator
//!
//! Renders the ExecScript `#` glyph and stages it at every size the Android,
//! iOS, macOS, web and store packaging conventions ask for.

pub mod cli;
pub mod error;
pub mod export;
pub mod output;
pub mod render;
pub mod types;

pub use error::{IconError, Result};
pub use export::{ExportFailure, ExportLayout, ExportReport, Exporter, WrittenIcon};
pub use render::{
    write_png, CleanupWarning, FontGlyphs, GlyphOutline, GlyphSource, IconRenderer,
};
pub use types::{Colour, Destination, IconSpec, Platform, PlatformTarget, Style, Variant};
