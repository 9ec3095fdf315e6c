use clap::{Parser, Subcommand};

use crate::commands::catalog::CatalogArgs;
use crate::commands::compile::CompileArgs;
use crate::commands::decompile::DecompileArgs;
use crate::commands::{catalog, compile, decompile};

#[derive(Parser)]
#[command(name = "fdo")]
#[command(about = "FDO stream compiler and decompiler", version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile an .fdo source file to the binary wire stream
    Compile(Box<CompileArgs>),

    /// Decompile a binary wire stream back to .fdo source
    Decompile(Box<DecompileArgs>),

    /// Inspect the loaded atom catalog
    Catalog(Box<CatalogArgs>),
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Compile(args) => compile::execute(*args),
        Commands::Decompile(args) => decompile::execute(*args),
        Commands::Catalog(args) => catalog::execute(*args),
    }
}
