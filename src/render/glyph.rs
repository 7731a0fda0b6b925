//! Glyph outlines for the brand mark.
//!
//! The renderer only needs one character as a vector path plus its tight
//! bounding box. [`FontGlyphs`] pulls that out of a TrueType/OpenType font;
//! anything else implementing [`GlyphSource`] can stand in for it.

use std::fs;
use std::path::{Path, PathBuf};

use resvg::tiny_skia::{self, PathBuilder, Rect, Transform};

use crate::error::{IconError, Result};

/// Font files tried before asking the system font database.
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/ubuntu/UbuntuMono-B.ttf",
    "/usr/share/fonts/truetype/msttcorefonts/courbd.ttf",
];

/// A glyph as a fillable path in pixel space, y pointing down.
#[derive(Debug, Clone)]
pub struct GlyphOutline {
    pub path: tiny_skia::Path,
    /// Tight bounds of the outline in the same space as `path`.
    pub bounds: Rect,
}

/// Supplies glyph outlines at a given pixel size.
pub trait GlyphSource {
    /// Outline of `glyph` with a font size of `px_size` pixels per em.
    fn outline(&self, glyph: char, px_size: f32) -> Result<GlyphOutline>;

    /// Human-readable name for status output.
    fn name(&self) -> &str;
}

/// Glyphs read from a font file.
#[derive(Clone)]
pub struct FontGlyphs {
    data: Vec<u8>,
    index: u32,
    name: String,
}

impl std::fmt::Debug for FontGlyphs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontGlyphs")
            .field("name", &self.name)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl FontGlyphs {
    /// Load face `index` from in-memory font data.
    pub fn from_data(data: Vec<u8>, index: u32, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if let Err(e) = ttf_parser::Face::parse(&data, index) {
            return Err(IconError::MissingFont {
                tried: format!("{} ({})", name, e),
            });
        }
        Ok(Self { data, index, name })
    }

    /// Load the first face of a font file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|e| IconError::io(path, e))?;
        Self::from_data(data, 0, path.display().to_string())
    }

    /// Whether the font maps `glyph` to an outline glyph.
    pub fn has_glyph(&self, glyph: char) -> bool {
        ttf_parser::Face::parse(&self.data, self.index)
            .ok()
            .and_then(|face| face.glyph_index(glyph))
            .is_some()
    }

    /// Find a font that can draw `glyph`.
    ///
    /// An explicit `preferred` file must load and contain the glyph; its
    /// error is returned as is. Without one, [`FONT_CANDIDATES`] are tried,
    /// then a bold monospace face from the system font database.
    pub fn locate(preferred: Option<&Path>, glyph: char) -> Result<Self> {
        match preferred {
            Some(path) => {
                let font = Self::from_file(path)?;
                if !font.has_glyph(glyph) {
                    return Err(IconError::MissingGlyph { glyph });
                }
                Ok(font)
            }
            None => {
                let candidates: Vec<PathBuf> = FONT_CANDIDATES.iter().map(PathBuf::from).collect();
                Self::locate_in(&candidates, glyph, true)
            }
        }
    }

    /// Try `candidates` in order, optionally falling back to system fonts.
    pub fn locate_in(candidates: &[PathBuf], glyph: char, system_fonts: bool) -> Result<Self> {
        let mut tried = Vec::new();

        for path in candidates {
            if !path.is_file() {
                tried.push(path.display().to_string());
                continue;
            }
            match Self::from_file(path) {
                Ok(font) if font.has_glyph(glyph) => return Ok(font),
                Ok(_) => tried.push(format!("{} (no '{}' glyph)", path.display(), glyph)),
                Err(e) => tried.push(format!("{} ({})", path.display(), e)),
            }
        }

        if system_fonts {
            if let Some(font) = Self::from_system(glyph) {
                return Ok(font);
            }
            tried.push("system monospace fonts".to_string());
        }

        Err(IconError::MissingFont {
            tried: tried.join(", "),
        })
    }

    fn from_system(glyph: char) -> Option<Self> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();

        let query = fontdb::Query {
            families: &[fontdb::Family::Monospace],
            weight: fontdb::Weight::BOLD,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };

        // The generic monospace family may not be installed; any monospaced
        // face will do, bold preferred.
        let mut mono: Vec<_> = db.faces().filter(|face| face.monospaced).collect();
        mono.sort_by_key(|face| {
            (face.weight != fontdb::Weight::BOLD, face.post_script_name.clone())
        });
        let ids: Vec<fontdb::ID> = db
            .query(&query)
            .into_iter()
            .chain(mono.iter().map(|face| face.id))
            .collect();

        ids.into_iter().find_map(|id| {
            let name = db.face(id)?.post_script_name.clone();
            let (data, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;
            Self::from_data(data, index, name)
                .ok()
                .filter(|font| font.has_glyph(glyph))
        })
    }
}

impl GlyphSource for FontGlyphs {
    fn outline(&self, glyph: char, px_size: f32) -> Result<GlyphOutline> {
        let face = ttf_parser::Face::parse(&self.data, self.index).map_err(|e| {
            IconError::MissingFont {
                tried: format!("{} ({})", self.name, e),
            }
        })?;

        let missing = || IconError::MissingGlyph { glyph };
        let id = face.glyph_index(glyph).ok_or_else(missing)?;

        let mut builder = OutlineToPath(PathBuilder::new());
        let bbox = face.outline_glyph(id, &mut builder).ok_or_else(missing)?;
        let scale = px_size / face.units_per_em() as f32;

        let path = builder
            .0
            .finish()
            .and_then(|path| path.transform(Transform::from_scale(scale, scale)))
            .ok_or_else(missing)?;

        // Font units are y-up; the path was flipped while it was built.
        let bounds = Rect::from_ltrb(
            bbox.x_min as f32 * scale,
            -(bbox.y_max as f32) * scale,
            bbox.x_max as f32 * scale,
            -(bbox.y_min as f32) * scale,
        )
        .ok_or_else(missing)?;

        Ok(GlyphOutline { path, bounds })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Feeds ttf-parser outline callbacks into a tiny-skia path, flipping y.
struct OutlineToPath(PathBuilder);

impl ttf_parser::OutlineBuilder for OutlineToPath {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x, -y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(x, -y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.0.quad_to(x1, -y1, x, -y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.0.cubic_to(x1, -y1, x2, -y2, x, -y);
    }

    fn close(&mut self) {
        self.0.close();
    }
}
