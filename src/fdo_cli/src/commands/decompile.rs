use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use fdo_codec::DecodeOptions;
use fdo_syntax::{FormatOptions, Formatter};

use crate::commands::load_catalog;

#[derive(clap::Args)]
pub struct DecompileArgs {
    /// The input binary stream
    #[arg(short, long, required = true, value_name = "INPUT")]
    pub input: PathBuf,

    /// The output .fdo file (defaults to <input>.fdo)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Decode every frame as the_unknown, keeping the stream byte-exact
    /// under any catalog
    #[arg(long, default_value_t = false)]
    pub preserve_unknown: bool,

    /// Atom catalog table to use instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Write the syntax tree as JSON instead of .fdo text
    #[arg(long, default_value_t = false)]
    pub ast_json: bool,
}

pub fn execute(args: DecompileArgs) -> Result<()> {
    let bytes = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let catalog = load_catalog(args.catalog.as_deref())?;

    let tree = fdo_codec::decompile_with(
        &catalog,
        &bytes,
        &DecodeOptions {
            preserve_unknown: args.preserve_unknown,
        },
    )
    .with_context(|| format!("failed to decompile {}", args.input.display()))?;

    let rendered = if args.ast_json {
        serde_json::to_string_pretty(&tree).context("failed to serialize the syntax tree")?
    } else {
        Formatter::new(FormatOptions::default()).format(&tree, &catalog)
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("fdo"));
    fs::write(&output, rendered)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("decompiled {} atoms to {}", tree.len(), output.display());
    Ok(())
}
