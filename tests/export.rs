mod common;

use std::fs;
use std::path::{Path, PathBuf};

use common::{BarGlyphs, FailAtSize};
use execscript_icons::export::{is_intermediate, planned_paths};
use execscript_icons::output::Printer;
use execscript_icons::{ExportLayout, Exporter, IconError, IconRenderer, Platform, Style};
use pretty_assertions::assert_eq;
use tempfile::tempdir;
use walkdir::WalkDir;

fn layout(root: &Path) -> ExportLayout {
    ExportLayout::new(root.join("execscript"), root.join("execscript/assets/icon"))
}

fn quiet() -> Printer {
    Printer::new().quiet(true)
}

fn files_under(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

#[test]
fn test_full_export_writes_every_icon() {
    let dir = tempdir().unwrap();
    let layout = layout(dir.path());
    let renderer = IconRenderer::new(Style::default(), BarGlyphs);
    let printer = quiet();

    let report = Exporter::new(&renderer, layout.clone(), &printer).run(&Platform::ALL);

    assert!(report.is_success(), "failures: {:?}", report.failures);
    assert!(report.warnings.is_empty());
    assert_eq!(report.written.len(), 32);

    let mut expected = planned_paths(&layout, &Platform::ALL);
    expected.sort();
    assert_eq!(files_under(dir.path()), expected);

    for written in &report.written {
        let image = image::open(&written.path).unwrap();
        assert_eq!(
            (image.width(), image.height()),
            (written.size, written.size),
            "{}",
            written.path.display()
        );
    }

    let per_platform = |p: Platform| report.written.iter().filter(|w| w.platform == p).count();
    assert_eq!(per_platform(Platform::Master), 1);
    assert_eq!(per_platform(Platform::Android), 5);
    assert_eq!(per_platform(Platform::AndroidAdaptiveForeground), 1);
    assert_eq!(per_platform(Platform::Ios), 15);
    assert_eq!(per_platform(Platform::Macos), 7);
    assert_eq!(per_platform(Platform::Web), 1);
    assert_eq!(per_platform(Platform::Store), 2);
}

#[test]
fn test_no_intermediate_files_remain() {
    let dir = tempdir().unwrap();
    let renderer = IconRenderer::new(Style::default(), BarGlyphs);
    let printer = quiet();

    Exporter::new(&renderer, layout(dir.path()), &printer).run(&Platform::ALL);

    let strays: Vec<PathBuf> = WalkDir::new(dir.path())
        .into_iter()
        .map(|e| e.unwrap().into_path())
        .filter(|p| is_intermediate(p))
        .collect();
    assert!(strays.is_empty(), "left behind: {strays:?}");
}

#[test]
fn test_adaptive_foreground_is_transparent_and_launcher_opaque() {
    let dir = tempdir().unwrap();
    let layout = layout(dir.path());
    let renderer = IconRenderer::new(Style::default(), BarGlyphs);
    let printer = quiet();

    Exporter::new(&renderer, layout.clone(), &printer)
        .run(&[Platform::Android, Platform::AndroidAdaptiveForeground]);

    let res = layout.project_root.join("android/app/src/main/res");
    let foreground = image::open(res.join("mipmap-xxxhdpi/ic_launcher_foreground.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(foreground.dimensions(), (432, 432));
    assert_eq!(foreground.get_pixel(0, 0)[3], 0);
    assert_eq!(foreground.get_pixel(431, 431)[3], 0);

    let launcher = image::open(res.join("mipmap-xxxhdpi/ic_launcher.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(launcher.dimensions(), (192, 192));
    assert!(launcher.pixels().all(|p| p[3] == 255));
}

#[test]
fn test_rerun_overwrites_with_identical_bytes() {
    let dir = tempdir().unwrap();
    let layout = layout(dir.path());
    let renderer = IconRenderer::new(Style::default(), BarGlyphs);
    let printer = quiet();
    let exporter = Exporter::new(&renderer, layout.clone(), &printer);

    exporter.run(&[Platform::Macos]);
    let first: Vec<Vec<u8>> = planned_paths(&layout, &[Platform::Macos])
        .iter()
        .map(|p| fs::read(p).unwrap())
        .collect();

    let iconset = layout.project_root.join("macos/Runner/Assets.xcassets/AppIcon.appiconset");
    fs::write(iconset.join("app_icon_16.png"), b"corrupted").unwrap();

    let report = exporter.run(&[Platform::Macos]);
    assert!(report.is_success());
    let second: Vec<Vec<u8>> = planned_paths(&layout, &[Platform::Macos])
        .iter()
        .map(|p| fs::read(p).unwrap())
        .collect();

    assert!(first == second);
    assert_eq!(files_under(dir.path()).len(), 7);
}

#[test]
fn test_failing_icon_does_not_stop_the_run() {
    let dir = tempdir().unwrap();
    let layout = layout(dir.path());
    // 120px standard icons draw a 60px glyph: iOS 40x40@3x and 60x60@2x.
    let renderer = IconRenderer::new(Style::default(), FailAtSize { size_px: 60.0 });
    let printer = quiet();

    let report = Exporter::new(&renderer, layout.clone(), &printer).run(&Platform::ALL);

    let failed: Vec<&str> = report.failures.iter().map(|f| f.filename).collect();
    assert_eq!(failed, vec!["Icon-App-40x40@3x.png", "Icon-App-60x60@2x.png"]);
    assert!(report
        .failures
        .iter()
        .all(|f| f.platform == Platform::Ios
            && matches!(f.error, IconError::MissingGlyph { glyph: '#' })));
    assert_eq!(report.written.len(), 30);

    let iconset = layout
        .project_root
        .join("ios/Runner/Assets.xcassets/AppIcon.appiconset");
    assert!(!iconset.join("Icon-App-40x40@3x.png").exists());
    assert!(iconset.join("Icon-App-40x40@2x.png").is_file());
    assert_eq!(files_under(dir.path()).len(), 30);

    match report.into_result() {
        Err(IconError::Export { failed, total }) => assert_eq!((failed, total), (2, 32)),
        other => panic!("expected export error, got {other:?}"),
    }
}

#[test]
fn test_unwritable_project_root_only_fails_project_targets() {
    let dir = tempdir().unwrap();
    let project_root = dir.path().join("not-a-directory");
    fs::write(&project_root, b"").unwrap();
    let layout = ExportLayout::new(&project_root, dir.path().join("assets"));
    let renderer = IconRenderer::new(Style::default(), BarGlyphs);
    let printer = quiet();

    let report = Exporter::new(&renderer, layout, &printer).run(&Platform::ALL);

    assert_eq!(report.failures.len(), 29);
    assert!(report
        .failures
        .iter()
        .all(|f| matches!(f.error, IconError::Io { .. })));

    let written: Vec<Platform> = report.written.iter().map(|w| w.platform).collect();
    assert_eq!(written, vec![Platform::Master, Platform::Store, Platform::Store]);
    assert!(dir.path().join("assets/execscript_icon.png").is_file());
    assert!(dir.path().join("assets/execscript_playstore_512.png").is_file());
    assert!(dir.path().join("assets/execscript_appstore_1024.png").is_file());
}
