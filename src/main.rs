use clap::Parser;
use miette::Result;
use mdgrid::cli::{Cli, Commands};
use mdgrid::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => mdgrid::cli::build::run(args, &printer)?,
        Commands::Check(args) => mdgrid::cli::check::run(args, &printer)?,
        Commands::Init(args) => mdgrid::cli::init::run(args, &printer)?,
        Commands::List(args) => mdgrid::cli::list::run(args, &printer)?,
        Commands::Completions(args) => mdgrid::cli::completions::run(args)?,
    }

    Ok(())
}
