//! Shared helpers for integration tests and benches.

#![allow(dead_code)]

use execscript_icons::render::{GlyphOutline, GlyphSource};
use execscript_icons::{IconError, Result};
use resvg::tiny_skia::{PathBuilder, Rect};

/// A `#` made of four bars, so tests render without a system font.
pub struct BarGlyphs;

impl GlyphSource for BarGlyphs {
    fn outline(&self, _glyph: char, px: f32) -> Result<GlyphOutline> {
        let mut pb = PathBuilder::new();
        for (l, t, r, b) in [
            (0.20, 0.05, 0.35, 0.95),
            (0.65, 0.05, 0.80, 0.95),
            (0.05, 0.30, 0.95, 0.42),
            (0.05, 0.58, 0.95, 0.70),
        ] {
            if let Some(rect) = Rect::from_ltrb(l * px, t * px, r * px, b * px) {
                pb.push_rect(rect);
            }
        }
        let path = pb.finish().ok_or(IconError::MissingGlyph { glyph: '#' })?;
        let bounds = Rect::from_ltrb(0.05 * px, 0.05 * px, 0.95 * px, 0.95 * px)
            .ok_or(IconError::MissingGlyph { glyph: '#' })?;
        Ok(GlyphOutline { path, bounds })
    }

    fn name(&self) -> &str {
        "bars"
    }
}

/// Fails only at one size, to check that one bad icon does not stop the rest.
pub struct FailAtSize {
    pub size_px: f32,
}

impl GlyphSource for FailAtSize {
    fn outline(&self, glyph: char, px: f32) -> Result<GlyphOutline> {
        if px == self.size_px {
            Err(IconError::MissingGlyph { glyph })
        } else {
            BarGlyphs.outline(glyph, px)
        }
    }

    fn name(&self) -> &str {
        "fail-at-size"
    }
}
