//! `cpz`: inspect, validate, show and build CPZ1 chess puzzle packs.

use clap::{Parser, Subcommand};

mod commands;

use commands::inspect::InspectOptions;
use commands::pack::PackOptions;
use commands::perft::PerftOptions;
use commands::show::ShowOptions;
use commands::starter::StarterOptions;
use commands::validate::ValidateOptions;

#[derive(Parser)]
#[command(name = "cpz")]
#[command(about = "Inspect, validate and build CPZ1 chess puzzle packs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the header and first record of a pack
    Inspect(InspectOptions),
    /// Replay every solution and report illegal moves
    Validate(ValidateOptions),
    /// Render one puzzle with its solution
    Show(ShowOptions),
    /// Write the built-in starter pack
    Starter(StarterOptions),
    /// Pack a Lichess puzzle CSV export
    Pack(PackOptions),
    /// Count leaf nodes of the legal move tree
    Perft(PerftOptions),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Inspect(options) => options.run(),
        Command::Validate(options) => options.run(),
        Command::Show(options) => options.run(),
        Command::Starter(options) => options.run(),
        Command::Pack(options) => options.run(),
        Command::Perft(options) => options.run(),
    }
}
