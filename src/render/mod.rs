//! Rendering module.
//!
//! Turns the brand glyph into RGBA icons and writes them out as PNG.

mod glyph;
mod icon;
mod png;

pub use glyph::{FontGlyphs, GlyphOutline, GlyphSource, FONT_CANDIDATES};
pub use icon::{
    has_border, has_glow, has_scanlines, IconRenderer, BORDER_INSET, BORDER_MIN_SIZE,
    FOREGROUND_GLOW_MIN_SIZE, GLOW_RADIUS, SCANLINE_MIN_SIZE, SCANLINE_SPACING,
};
pub use png::{write_png, CleanupWarning};
