//! `metadecl` command-line driver.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use metadecl::interchange::FormatKind;
use metadecl::project::{ExtractError, Extractor, ExtractorConfig, summarize, write_descriptors};

/// Extract annotation-macro metadata into per-module descriptors.
#[derive(Parser)]
#[command(
    name = "metadecl",
    version,
    about = "Extract DECLARE_* annotation metadata into module descriptors",
    long_about = r#"
Extract DECLARE_* annotation metadata into module descriptors.

Input files are processed strictly in the order given: a declaration can only
attach to types defined in the same file or in an earlier one.

Examples:
    metadecl -o gen/ src/math.c src/physics.c
    metadecl --dry-run src/*.c
    RUST_LOG=metadecl=trace metadecl -o gen/ src/math.c
"#
)]
struct Cli {
    /// Source files, in processing order
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Directory receiving the descriptors
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    out_dir: PathBuf,

    /// Descriptor format
    #[arg(long, value_enum, default_value_t = FormatKind::Json)]
    format: FormatKind,

    /// Output minified/compact JSON (default: pretty-printed)
    #[arg(long)]
    compact: bool,

    /// Replaces '/' of a module key in descriptor file names
    #[arg(long, default_value = ExtractorConfig::DEFAULT_DELIMITER)]
    delimiter: String,

    /// Resolve and list modules without writing descriptors
    #[arg(long)]
    dry_run: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut extractor = Extractor::new();
    for path in &cli.files {
        extractor.add_file(path)?;
    }

    // Warnings and unresolved references were already logged as they were found
    let table = match extractor.finish() {
        Ok(table) => table,
        Err(ExtractError::Unresolved(errors)) => {
            anyhow::bail!("{} unresolved type reference(s), no descriptors written", errors.len());
        }
        Err(err) => return Err(err.into()),
    };

    if cli.dry_run {
        for summary in summarize(&table) {
            println!("{summary}");
        }
        return Ok(());
    }

    let config = ExtractorConfig::new(&cli.out_dir)
        .with_format(cli.format)
        .with_pretty(!cli.compact)
        .with_delimiter(cli.delimiter);

    let written = write_descriptors(&table, &config)
        .with_context(|| format!("writing descriptors to {}", cli.out_dir.display()))?;
    tracing::info!("wrote {} descriptor(s)", written.len());
    Ok(())
}
