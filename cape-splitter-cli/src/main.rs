use anyhow::Result;
use cape_splitter_cli::commands::Commands;
use clap::Parser;

/// Sentence-aligned document splitting into balanced chunks
#[derive(Debug, Parser)]
#[command(name = "cape-split", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
