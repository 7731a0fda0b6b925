//! Platform icon tables.
//!
//! Every platform's icon convention is a static table of [`IconSpec`] records.
//! The tables are plain data so they can be checked against each platform's
//! documented sizes without rendering anything.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;

/// Visual treatment of a rendered icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Opaque background with glow, scanlines and border.
    Standard,
    /// Transparent layer for Android adaptive icons, with a smaller glyph.
    AdaptiveForeground,
}

impl Variant {
    pub fn is_foreground(self) -> bool {
        matches!(self, Variant::AdaptiveForeground)
    }
}

/// One output file of a platform target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconSpec {
    /// Path relative to the target's destination directory.
    pub filename: &'static str,
    /// Width and height in pixels.
    pub size: u32,
    pub variant: Variant,
}

impl IconSpec {
    pub const fn standard(filename: &'static str, size: u32) -> Self {
        Self {
            filename,
            size,
            variant: Variant::Standard,
        }
    }

    pub const fn foreground(filename: &'static str, size: u32) -> Self {
        Self {
            filename,
            size,
            variant: Variant::AdaptiveForeground,
        }
    }
}

/// Platforms the exporter knows about, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    /// Master 1024px icon in the asset directory
    Master,
    /// Android launcher mipmaps
    Android,
    /// Android adaptive icon foreground layer
    AndroidAdaptiveForeground,
    /// iOS app icon set
    Ios,
    /// macOS app icon set
    Macos,
    /// Web favicon
    Web,
    /// Play Store and App Store listing images
    Store,
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::Master,
        Platform::Android,
        Platform::AndroidAdaptiveForeground,
        Platform::Ios,
        Platform::Macos,
        Platform::Web,
        Platform::Store,
    ];

    /// The static target table for this platform.
    pub fn target(self) -> &'static PlatformTarget {
        match self {
            Platform::Master => &MASTER,
            Platform::Android => &ANDROID,
            Platform::AndroidAdaptiveForeground => &ANDROID_ADAPTIVE_FOREGROUND,
            Platform::Ios => &IOS,
            Platform::Macos => &MACOS,
            Platform::Web => &WEB,
            Platform::Store => &STORE,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.target().name)
    }
}

/// Where a target's files are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "root", content = "path", rename_all = "kebab-case")]
pub enum Destination {
    /// A directory inside the app project checkout.
    Project(&'static str),
    /// The asset directory the tool works in.
    AssetDir,
}

impl Destination {
    /// Resolve against the given roots.
    pub fn resolve(self, project_root: &Path, asset_dir: &Path) -> PathBuf {
        match self {
            Destination::Project(rel) => project_root.join(rel),
            Destination::AssetDir => asset_dir.to_path_buf(),
        }
    }
}

/// A platform and the icons it requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformTarget {
    pub platform: Platform,
    pub name: &'static str,
    pub destination: Destination,
    pub icons: &'static [IconSpec],
}

impl PlatformTarget {
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

const ANDROID_RES: &str = "android/app/src/main/res";
const IOS_APPICONSET: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";
const MACOS_APPICONSET: &str = "macos/Runner/Assets.xcassets/AppIcon.appiconset";

pub static MASTER: PlatformTarget = PlatformTarget {
    platform: Platform::Master,
    name: "Master",
    destination: Destination::AssetDir,
    icons: &[IconSpec::standard("execscript_icon.png", 1024)],
};

pub static ANDROID: PlatformTarget = PlatformTarget {
    platform: Platform::Android,
    name: "Android",
    destination: Destination::Project(ANDROID_RES),
    icons: &[
        IconSpec::standard("mipmap-mdpi/ic_launcher.png", 48),
        IconSpec::standard("mipmap-hdpi/ic_launcher.png", 72),
        IconSpec::standard("mipmap-xhdpi/ic_launcher.png", 96),
        IconSpec::standard("mipmap-xxhdpi/ic_launcher.png", 144),
        IconSpec::standard("mipmap-xxxhdpi/ic_launcher.png", 192),
    ],
};

/// 108dp layer with a 72dp safe zone, exported once at xxxhdpi.
pub static ANDROID_ADAPTIVE_FOREGROUND: PlatformTarget = PlatformTarget {
    platform: Platform::AndroidAdaptiveForeground,
    name: "Android adaptive",
    destination: Destination::Project(ANDROID_RES),
    icons: &[IconSpec::foreground(
        "mipmap-xxxhdpi/ic_launcher_foreground.png",
        432,
    )],
};

pub static IOS: PlatformTarget = PlatformTarget {
    platform: Platform::Ios,
    name: "iOS",
    destination: Destination::Project(IOS_APPICONSET),
    icons: &[
        IconSpec::standard("Icon-App-20x20@1x.png", 20),
        IconSpec::standard("Icon-App-20x20@2x.png", 40),
        IconSpec::standard("Icon-App-20x20@3x.png", 60),
        IconSpec::standard("Icon-App-29x29@1x.png", 29),
        IconSpec::standard("Icon-App-29x29@2x.png", 58),
        IconSpec::standard("Icon-App-29x29@3x.png", 87),
        IconSpec::standard("Icon-App-40x40@1x.png", 40),
        IconSpec::standard("Icon-App-40x40@2x.png", 80),
        IconSpec::standard("Icon-App-40x40@3x.png", 120),
        IconSpec::standard("Icon-App-60x60@2x.png", 120),
        IconSpec::standard("Icon-App-60x60@3x.png", 180),
        IconSpec::standard("Icon-App-76x76@1x.png", 76),
        IconSpec::standard("Icon-App-76x76@2x.png", 152),
        IconSpec::standard("Icon-App-83.5x83.5@2x.png", 167),
        IconSpec::standard("Icon-App-1024x1024@1x.png", 1024),
    ],
};

pub static MACOS: PlatformTarget = PlatformTarget {
    platform: Platform::Macos,
    name: "macOS",
    destination: Destination::Project(MACOS_APPICONSET),
    icons: &[
        IconSpec::standard("app_icon_16.png", 16),
        IconSpec::standard("app_icon_32.png", 32),
        IconSpec::standard("app_icon_64.png", 64),
        IconSpec::standard("app_icon_128.png", 128),
        IconSpec::standard("app_icon_256.png", 256),
        IconSpec::standard("app_icon_512.png", 512),
        IconSpec::standard("app_icon_1024.png", 1024),
    ],
};

pub static WEB: PlatformTarget = PlatformTarget {
    platform: Platform::Web,
    name: "Web",
    destination: Destination::Project("web"),
    icons: &[IconSpec::standard("favicon.png", 32)],
};

pub static STORE: PlatformTarget = PlatformTarget {
    platform: Platform::Store,
    name: "Store",
    destination: Destination::AssetDir,
    icons: &[
        IconSpec::standard("execscript_playstore_512.png", 512),
        IconSpec::standard("execscript_appstore_1024.png", 1024),
    ],
};
