//! Export command implementation.
//!
//! Resolves a font, builds the style and layout from the arguments, then
//! hands off to the [`Exporter`].

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::export::{stray_intermediates, ExportLayout, ExportReport, Exporter};
use crate::output::{display_path, Printer};
use crate::render::{FontGlyphs, GlyphSource, IconRenderer};
use crate::types::{Colour, Platform, Style};

/// Render icons and write them into the project tree
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Root of the app project checkout (contains android/, ios/, macos/, web/)
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,

    /// Directory for the master and store images
    #[arg(long, default_value = ".")]
    pub asset_dir: PathBuf,

    /// Only export these platforms (repeatable; default: all)
    #[arg(long = "platform", value_enum)]
    pub platforms: Vec<Platform>,

    /// Font file to draw the glyph with (default: DejaVu Sans Mono or a system monospace font)
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Background colour of standard icons
    #[arg(long)]
    pub background: Option<Colour>,

    /// Glyph colour; also sets a matching glow unless --glow is given
    #[arg(long)]
    pub foreground: Option<Colour>,

    /// Glow colour (opaque colours get the default glow alpha)
    #[arg(long)]
    pub glow: Option<Colour>,

    /// Only print warnings and errors
    #[arg(long, short)]
    pub quiet: bool,
}

impl ExportArgs {
    /// The brand style with any colour overrides applied.
    pub fn style(&self) -> Style {
        let mut style = Style::default();
        if let Some(background) = self.background {
            style = style.with_background(background);
        }
        if let Some(foreground) = self.foreground {
            style = style.with_foreground(foreground);
        }
        if let Some(glow) = self.glow {
            style = style.with_glow(glow);
        }
        style
    }

    pub fn layout(&self) -> ExportLayout {
        ExportLayout::new(&self.project_root, &self.asset_dir)
    }

    /// Requested platforms, or all of them.
    pub fn platforms(&self) -> Vec<Platform> {
        if self.platforms.is_empty() {
            Platform::ALL.to_vec()
        } else {
            self.platforms.clone()
        }
    }
}

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let printer = printer.clone().quiet(args.quiet);

    let style = args.style();

    // No font means every icon would fail; stop before touching any file.
    let font = FontGlyphs::locate(args.font.as_deref(), style.glyph)?;
    printer.info("Font", font.name());

    let renderer = IconRenderer::new(style, font);
    export_with(&args, &renderer, &printer).into_result()?;
    Ok(())
}

/// Run the export with an already constructed renderer.
pub fn export_with(
    args: &ExportArgs,
    renderer: &IconRenderer,
    printer: &Printer,
) -> ExportReport {
    let layout = args.layout();
    let platforms = args.platforms();

    for stray in stray_intermediates(&layout, &platforms) {
        printer.warning(
            "Warning",
            &format!("leftover intermediate file {}", display_path(&stray)),
        );
    }

    Exporter::new(renderer, layout, printer).run(&platforms)
}
