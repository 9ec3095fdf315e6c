use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use log::info;

use fdo_codec::EncodeOptions;

use crate::commands::load_catalog;
use crate::errors::{emit_json_error, print_pretty_error};

#[derive(clap::Args)]
pub struct CompileArgs {
    /// The input .fdo source file
    #[arg(short, long, required = true, value_name = "INPUT")]
    pub input: PathBuf,

    /// The output binary file (defaults to <input>.bin)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Pack into transport frames of at most this many bytes (large atoms
    /// are carried by the uni continuation sequence)
    #[arg(long, value_name = "BYTES")]
    pub frame_size: Option<usize>,

    /// Choose the shortest frame style per atom instead of the canonical
    /// full form
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Atom catalog table to use instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Emit errors as JSON on stdout instead of pretty diagnostics
    #[arg(long, default_value_t = false)]
    pub errors_json: bool,
}

pub fn execute(args: CompileArgs) -> Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let catalog = load_catalog(args.catalog.as_deref())?;

    let tree = match fdo_parser::parse_source(&source) {
        Ok(tree) => tree,
        Err(failure) => {
            if args.errors_json {
                emit_json_error(&args.input, &failure);
            } else {
                print_pretty_error(&args.input, &source, &failure);
            }
            bail!("parse failed");
        }
    };

    let bytes = match args.frame_size {
        Some(frame_size) => {
            let mut out = Vec::new();
            let mut frames = 0usize;
            fdo_codec::compile_to_frames(&catalog, &tree, frame_size, |frame, _index, _last| {
                out.extend_from_slice(frame);
                frames += 1;
            })?;
            info!("packed {} transport frames of at most {frame_size} bytes", frames);
            out
        }
        None => fdo_codec::compile_with(
            &catalog,
            &tree,
            &EncodeOptions {
                compact: args.compact,
            },
        )?,
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("bin"));
    fs::write(&output, &bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(
        "compiled {} atoms to {} ({} bytes)",
        tree.len(),
        output.display(),
        bytes.len()
    );
    Ok(())
}
