//! Export orchestration.
//!
//! Walks the platform tables in order, renders every icon and writes it to
//! its destination. A failing icon is reported and skipped; it never stops
//! the icons after it.

use std::path::{Path, PathBuf};

use crate::error::{IconError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{write_png, CleanupWarning, IconRenderer};
use crate::types::{IconSpec, Platform, PlatformTarget};

/// Where platform destinations resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLayout {
    /// Root of the app project checkout (holds `android/`, `ios/`, ...).
    pub project_root: PathBuf,
    /// Directory for the master and store images.
    pub asset_dir: PathBuf,
}

impl ExportLayout {
    pub fn new(project_root: impl Into<PathBuf>, asset_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            asset_dir: asset_dir.into(),
        }
    }

    pub fn target_dir(&self, target: &PlatformTarget) -> PathBuf {
        target
            .destination
            .resolve(&self.project_root, &self.asset_dir)
    }

    pub fn icon_path(&self, target: &PlatformTarget, icon: &IconSpec) -> PathBuf {
        self.target_dir(target).join(icon.filename)
    }
}

/// An icon that made it to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenIcon {
    pub platform: Platform,
    pub path: PathBuf,
    pub size: u32,
}

/// An icon that did not.
#[derive(Debug)]
pub struct ExportFailure {
    pub platform: Platform,
    pub filename: &'static str,
    pub error: IconError,
}

/// Outcome of an export run.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<WrittenIcon>,
    pub failures: Vec<ExportFailure>,
    pub warnings: Vec<CleanupWarning>,
}

impl ExportReport {
    /// Icons attempted.
    pub fn total(&self) -> usize {
        self.written.len() + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn any per-icon failures into a single run-level error.
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(IconError::Export {
                failed: self.failures.len(),
                total: self.total(),
            })
        }
    }
}

/// Renders and writes icons for a set of platforms.
pub struct Exporter<'a> {
    renderer: &'a IconRenderer,
    layout: ExportLayout,
    printer: &'a Printer,
}

impl<'a> Exporter<'a> {
    pub fn new(renderer: &'a IconRenderer, layout: ExportLayout, printer: &'a Printer) -> Self {
        Self {
            renderer,
            layout,
            printer,
        }
    }

    /// Export every icon of `platforms`.
    ///
    /// Platforms run in [`Platform`] order whatever order they are given in,
    /// and duplicates run once.
    pub fn run(&self, platforms: &[Platform]) -> ExportReport {
        let mut platforms = platforms.to_vec();
        platforms.sort();
        platforms.dedup();

        let mut report = ExportReport::default();

        for platform in platforms {
            let target = platform.target();
            self.printer.info(
                "Exporting",
                &format!(
                    "{} ({}) {} {}",
                    self.printer.bold(target.name),
                    plural(target.len(), "icon", "icons"),
                    self.printer.dim("->"),
                    display_path(&self.layout.target_dir(target)),
                ),
            );

            for icon in target.icons {
                match self.export_icon(target, icon, &mut report.warnings) {
                    Ok(path) => {
                        self.printer.status(
                            "Rendered",
                            &format!("{} ({}x{})", icon.filename, icon.size, icon.size),
                        );
                        report.written.push(WrittenIcon {
                            platform,
                            path,
                            size: icon.size,
                        });
                    }
                    Err(error) => {
                        self.printer.error(
                            "Failed",
                            &format!("{} {}: {}", target.name, icon.filename, error),
                        );
                        report.failures.push(ExportFailure {
                            platform,
                            filename: icon.filename,
                            error,
                        });
                    }
                }
            }
        }

        for warning in &report.warnings {
            self.printer.warning(
                "Warning",
                &format!(
                    "could not remove intermediate file {}: {}",
                    display_path(&warning.path),
                    warning.message
                ),
            );
        }

        if report.is_success() {
            self.printer.status(
                "Finished",
                &plural(report.written.len(), "icon", "icons"),
            );
        } else {
            self.printer.error(
                "Finished",
                &format!(
                    "{} written, {} failed",
                    plural(report.written.len(), "icon", "icons"),
                    report.failures.len()
                ),
            );
        }

        report
    }

    /// Render one icon and move it into place.
    fn export_icon(
        &self,
        target: &PlatformTarget,
        icon: &IconSpec,
        warnings: &mut Vec<CleanupWarning>,
    ) -> Result<PathBuf> {
        let image = self.renderer.render_spec(icon)?;
        let path = self.layout.icon_path(target, icon);
        write_png(&image, &path, warnings)?;
        Ok(path)
    }
}

/// Paths every icon of `platforms` would be written to, in export order.
pub fn planned_paths(layout: &ExportLayout, platforms: &[Platform]) -> Vec<PathBuf> {
    let mut platforms = platforms.to_vec();
    platforms.sort();
    platforms.dedup();

    platforms
        .into_iter()
        .flat_map(|platform| {
            let target = platform.target();
            target
                .icons
                .iter()
                .map(move |icon| layout.icon_path(target, icon))
        })
        .collect()
}

/// Intermediate files left in destination directories by an interrupted run.
pub fn stray_intermediates(layout: &ExportLayout, platforms: &[Platform]) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = planned_paths(layout, platforms)
        .into_iter()
        .filter_map(|path| path.parent().map(Path::to_path_buf))
        .collect();
    dirs.sort();
    dirs.dedup();

    dirs.iter()
        .filter_map(|dir| std::fs::read_dir(dir).ok())
        .flatten()
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_intermediate(path))
        .collect()
}

/// Whether `path` looks like one of our intermediate files.
pub fn is_intermediate(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with(".icon-") && n.ends_with(".png.part"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ANDROID, STORE, WEB};

    #[test]
    fn test_layout_paths() {
        let layout = ExportLayout::new("/app", "/app/assets/icon");
        assert_eq!(
            layout.icon_path(&ANDROID, &ANDROID.icons[0]),
            PathBuf::from("/app/android/app/src/main/res/mipmap-mdpi/ic_launcher.png")
        );
        assert_eq!(
            layout.icon_path(&WEB, &WEB.icons[0]),
            PathBuf::from("/app/web/favicon.png")
        );
        assert_eq!(
            layout.icon_path(&STORE, &STORE.icons[1]),
            PathBuf::from("/app/assets/icon/execscript_appstore_1024.png")
        );
    }

    #[test]
    fn test_planned_paths_ordered_and_deduplicated() {
        let layout = ExportLayout::new("p", "a");
        let paths = planned_paths(&layout, &[Platform::Store, Platform::Web, Platform::Store]);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("p/web/favicon.png"),
                PathBuf::from("a/execscript_playstore_512.png"),
                PathBuf::from("a/execscript_appstore_1024.png"),
            ]
        );
    }

    #[test]
    fn test_planned_paths_cover_all_icons() {
        let layout = ExportLayout::new("p", "a");
        assert_eq!(planned_paths(&layout, &Platform::ALL).len(), 32);
    }

    #[test]
    fn test_is_intermediate() {
        assert!(is_intermediate(Path::new("web/.icon-a1B2c3.png.part")));
        assert!(!is_intermediate(Path::new("web/favicon.png")));
        assert!(!is_intermediate(Path::new("web/.icon-notes.txt")));
    }

    #[test]
    fn test_stray_intermediates_found_in_destinations() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ExportLayout::new(dir.path().join("app"), dir.path().join("assets"));
        let web = dir.path().join("app/web");
        std::fs::create_dir_all(&web).unwrap();
        std::fs::write(web.join(".icon-XyZ123.png.part"), b"partial").unwrap();
        std::fs::write(web.join("favicon.png"), b"").unwrap();

        assert!(stray_intermediates(&layout, &[Platform::Ios]).is_empty());
        assert_eq!(
            stray_intermediates(&layout, &[Platform::Web]),
            vec![web.join(".icon-XyZ123.png.part")]
        );
    }

    #[test]
    fn test_report_into_result() {
        let mut report = ExportReport::default();
        report.written.push(WrittenIcon {
            platform: Platform::Web,
            path: PathBuf::from("web/favicon.png"),
            size: 32,
        });
        assert!(report.into_result().is_ok());

        let mut report = ExportReport::default();
        report.failures.push(ExportFailure {
            platform: Platform::Web,
            filename: "favicon.png",
            error: IconError::InvalidSize { size: 0 },
        });
        match report.into_result() {
            Err(IconError::Export { failed, total }) => assert_eq!((failed, total), (1, 1)),
            other => panic!("expected Export error, got {other:?}"),
        }
    }
}
