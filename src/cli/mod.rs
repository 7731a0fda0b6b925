pub mod completions;
pub mod export;
pub mod list;

use clap::{Parser, Subcommand};

/// execscript-icons - render the ExecScript icon for every app platform
///
/// With no subcommand, exports every platform's icons.
#[derive(Parser, Debug)]
#[command(name = "execscript-icons")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub export: export::ExportArgs,
}

impl Cli {
    /// The subcommand to run; bare invocation means `export`.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Export(self.export))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render icons and write them into the project tree
    Export(export::ExportArgs),

    /// Show the icon tables for each platform
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
