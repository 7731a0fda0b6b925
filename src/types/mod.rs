//! Core types: colours, the render style and the platform tables.

mod colour;
mod style;
mod target;

pub use colour::Colour;
pub use style::Style;
pub use target::{
    Destination, IconSpec, Platform, PlatformTarget, Variant, ANDROID,
    ANDROID_ADAPTIVE_FOREGROUND, IOS, MACOS, MASTER, STORE, WEB,
};
