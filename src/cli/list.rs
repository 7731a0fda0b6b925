//! List command implementation.
//!
//! Prints the platform icon tables without rendering anything.

use clap::Args;

use crate::error::{IconError, Result};
use crate::output::{plural, Printer};
use crate::types::{Destination, Platform, PlatformTarget, Variant};

/// Show the icon tables for each platform
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list these platforms (repeatable; default: all)
    #[arg(long = "platform", value_enum)]
    pub platforms: Vec<Platform>,

    /// Print the tables as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let targets = selected_targets(&args.platforms);

    if args.json {
        println!("{}", to_json(&targets)?);
        return Ok(());
    }

    for target in &targets {
        printer.info(
            target.name,
            &format!(
                "{} {} {}",
                plural(target.len(), "icon", "icons"),
                printer.dim("in"),
                destination_label(target.destination)
            ),
        );
        for icon in target.icons {
            let tag = match icon.variant {
                Variant::Standard => "",
                Variant::AdaptiveForeground => " (foreground)",
            };
            println!("{:>12} {:>4}  {}{}", "", icon.size, icon.filename, tag);
        }
    }

    Ok(())
}

fn selected_targets(platforms: &[Platform]) -> Vec<&'static PlatformTarget> {
    let mut platforms = if platforms.is_empty() {
        Platform::ALL.to_vec()
    } else {
        platforms.to_vec()
    };
    platforms.sort();
    platforms.dedup();
    platforms.into_iter().map(Platform::target).collect()
}

fn destination_label(destination: Destination) -> String {
    match destination {
        Destination::Project(rel) => format!("<project>/{}", rel),
        Destination::AssetDir => "<asset-dir>".to_string(),
    }
}

fn to_json(targets: &[&PlatformTarget]) -> Result<String> {
    serde_json::to_string_pretty(targets).map_err(serialize_error)
}

fn serialize_error(e: serde_json::Error) -> IconError {
    IconError::Serialize {
        what: "icon tables".to_string(),
        message: e.to_string(),
    }
}
