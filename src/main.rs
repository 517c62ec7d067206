use clap::Parser;
use imgrid::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => imgrid::cli::run::run(args)?,
        Commands::Apply(args) => imgrid::cli::apply::run(args)?,
    }

    Ok(())
}
