//! Icon renderer - draws the brand glyph onto a square canvas.
//!
//! Layers, bottom to top:
//!
//! 1. Background fill (standard icons only)
//! 2. Glow: the glyph stamped at every offset within [`GLOW_RADIUS`]
//! 3. The glyph itself, centered on its measured bounds
//! 4. Scanlines every [`SCANLINE_SPACING`] rows (standard, from [`SCANLINE_MIN_SIZE`])
//! 5. A one pixel border inset by [`BORDER_INSET`] (standard, from [`BORDER_MIN_SIZE`])

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Color, FillRule, Paint, Pixmap, Rect, Transform};

use crate::error::{IconError, Result};
use crate::types::{Colour, IconSpec, Style, Variant};

use super::glyph::{GlyphOutline, GlyphSource};

/// Largest glow offset in pixels, in each direction.
pub const GLOW_RADIUS: i32 = 2;

/// Adaptive foregrounds only glow from this size up.
pub const FOREGROUND_GLOW_MIN_SIZE: u32 = 256;

pub const SCANLINE_MIN_SIZE: u32 = 192;
pub const SCANLINE_SPACING: u32 = 4;

pub const BORDER_MIN_SIZE: u32 = 96;
pub const BORDER_INSET: u32 = 2;

/// Renders the brand icon at any size.
///
/// Output depends only on the size, the variant, the [`Style`] and the glyph
/// source, so repeated renders are pixel-identical.
pub struct IconRenderer {
    style: Style,
    glyphs: Box<dyn GlyphSource>,
}

impl IconRenderer {
    pub fn new(style: Style, glyphs: impl GlyphSource + 'static) -> Self {
        Self {
            style,
            glyphs: Box::new(glyphs),
        }
    }

    /// Render the icon described by a table entry.
    pub fn render_spec(&self, spec: &IconSpec) -> Result<RgbaImage> {
        self.render(spec.size, spec.variant)
    }

    /// Render a `size`x`size` icon.
    pub fn render(&self, size: u32, variant: Variant) -> Result<RgbaImage> {
        let mut pixmap = Pixmap::new(size, size).ok_or(IconError::InvalidSize { size })?;
        let style = &self.style;
        let standard = variant == Variant::Standard;

        if standard {
            pixmap.fill(skia_colour(style.background));
        }

        let ratio = if standard {
            style.standard_scale
        } else {
            style.foreground_scale
        };
        let font_px = (size as f32 * ratio).floor();
        if font_px < 1.0 {
            return Err(IconError::InvalidSize { size });
        }

        let outline = self.glyphs.outline(style.glyph, font_px)?;
        let canvas = size as f32;
        let x = (canvas - outline.bounds.width()) / 2.0 - outline.bounds.left();
        let y = (canvas - outline.bounds.height()) / 2.0 - outline.bounds.top();

        if has_glow(size, variant) {
            for dx in -GLOW_RADIUS..=GLOW_RADIUS {
                for dy in -GLOW_RADIUS..=GLOW_RADIUS {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    fill_glyph(
                        &mut pixmap,
                        &outline,
                        style.glow,
                        x + dx as f32,
                        y + dy as f32,
                    );
                }
            }
        }

        fill_glyph(&mut pixmap, &outline, style.foreground, x, y);

        if has_scanlines(size, variant) {
            for row in (0..size).step_by(SCANLINE_SPACING as usize) {
                fill_pixels(&mut pixmap, style.scanline, 0, row, size, 1);
            }
        }

        if has_border(size, variant) {
            draw_border(&mut pixmap, style.border, size);
        }

        Ok(to_rgba_image(&pixmap))
    }
}

impl std::fmt::Debug for IconRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconRenderer")
            .field("style", &self.style)
            .field("glyphs", &self.glyphs.name())
            .finish()
    }
}

pub fn has_glow(size: u32, variant: Variant) -> bool {
    match variant {
        Variant::Standard => true,
        Variant::AdaptiveForeground => size >= FOREGROUND_GLOW_MIN_SIZE,
    }
}

pub fn has_scanlines(size: u32, variant: Variant) -> bool {
    variant == Variant::Standard && size >= SCANLINE_MIN_SIZE
}

pub fn has_border(size: u32, variant: Variant) -> bool {
    variant == Variant::Standard && size >= BORDER_MIN_SIZE
}

fn skia_colour(colour: Colour) -> Color {
    Color::from_rgba8(colour.r, colour.g, colour.b, colour.a)
}

fn paint(colour: Colour, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(colour.r, colour.g, colour.b, colour.a);
    paint.anti_alias = anti_alias;
    paint
}

fn fill_glyph(pixmap: &mut Pixmap, outline: &GlyphOutline, colour: Colour, x: f32, y: f32) {
    pixmap.fill_path(
        &outline.path,
        &paint(colour, true),
        FillRule::Winding,
        Transform::from_translate(x, y),
        None,
    );
}

/// Blend a pixel-aligned rectangle.
fn fill_pixels(pixmap: &mut Pixmap, colour: Colour, x: u32, y: u32, width: u32, height: u32) {
    if let Some(rect) = Rect::from_xywh(x as f32, y as f32, width as f32, height as f32) {
        pixmap.fill_rect(rect, &paint(colour, false), Transform::identity(), None);
    }
}

/// One pixel outline from (inset, inset) to (size-1-inset, size-1-inset).
///
/// Sides are split so corner pixels are blended once.
fn draw_border(pixmap: &mut Pixmap, colour: Colour, size: u32) {
    let near = BORDER_INSET;
    let far = size - 1 - BORDER_INSET;
    let span = far - near + 1;

    fill_pixels(pixmap, colour, near, near, span, 1);
    fill_pixels(pixmap, colour, near, far, span, 1);
    fill_pixels(pixmap, colour, near, near + 1, 1, span - 2);
    fill_pixels(pixmap, colour, far, near + 1, 1, span - 2);
}

/// tiny-skia stores premultiplied alpha; PNG wants straight alpha.
fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image
}
