use clap::Parser;
use execscript_icons::cli::{Cli, Commands};
use execscript_icons::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.into_command() {
        Commands::Export(args) => execscript_icons::cli::export::run(args, &printer)?,
        Commands::List(args) => execscript_icons::cli::list::run(args, &printer)?,
        Commands::Completions(args) => execscript_icons::cli::completions::run(args)?,
    }

    Ok(())
}
