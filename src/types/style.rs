//! Immutable render style for the brand glyph.

use super::Colour;

/// How far the glow sits below the foreground in HSL lightness.
///
/// Matches the brand pair #33FF33 / #1A8A1A.
const GLOW_DARKEN_PERCENT: f32 = -46.0;

/// Alpha of each glow stamp.
const GLOW_ALPHA: u8 = 60;

/// Colours, glyph and proportions used by the renderer.
///
/// The default is the ExecScript brand: a phosphor green `#` on deep
/// black-green. A `Style` is passed to the renderer by value, so alternate
/// palettes never touch global state.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Canvas fill for standard icons.
    pub background: Colour,
    /// Sharp glyph colour.
    pub foreground: Colour,
    /// Colour of each glow stamp drawn beneath the glyph.
    pub glow: Colour,
    /// Inset border stroke.
    pub border: Colour,
    /// Scanline overlay colour.
    pub scanline: Colour,
    /// The brand character.
    pub glyph: char,
    /// Font size as a fraction of the canvas for standard icons.
    pub standard_scale: f32,
    /// Font size as a fraction of the canvas for adaptive foregrounds.
    pub foreground_scale: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Colour::rgb(0x0A, 0x0F, 0x0A),
            foreground: Colour::rgb(0x33, 0xFF, 0x33),
            glow: Colour::new(0x1A, 0x8A, 0x1A, GLOW_ALPHA),
            border: Colour::new(0x1A, 0x3A, 0x1A, 180),
            scanline: Colour::BLACK.with_alpha(25),
            glyph: '#',
            standard_scale: 0.50,
            foreground_scale: 0.35,
        }
    }
}

impl Style {
    pub fn with_background(mut self, background: Colour) -> Self {
        self.background = background;
        self
    }

    /// Replace the foreground and derive a matching glow from it.
    pub fn with_foreground(mut self, foreground: Colour) -> Self {
        self.foreground = foreground;
        self.glow = foreground
            .adjust_lightness(GLOW_DARKEN_PERCENT)
            .with_alpha(GLOW_ALPHA);
        self
    }

    /// Replace the glow colour. A fully opaque colour gets the default glow alpha.
    pub fn with_glow(mut self, glow: Colour) -> Self {
        self.glow = if glow.is_opaque() {
            glow.with_alpha(GLOW_ALPHA)
        } else {
            glow
        };
        self
    }
}
