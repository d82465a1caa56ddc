// Main binary for the fontpack translation compiler
use clap::Parser;
use color_eyre::eyre::Result;
use std::io::stderr;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

mod generate;
mod version;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Compiles one language's translations and font tables into generated firmware source",
    long_about = None
)]
pub struct Cli {
    /// Language to generate, e.g. EN
    #[arg(value_name = "LANGUAGE_CODE")]
    pub language_code: String,

    /// Target file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Directory holding schema.json and the translation_<CODE>.json files
    #[arg(long, default_value = ".")]
    pub json_dir: PathBuf,

    /// Fallback bitmap font (BDF) for symbols outside the built-in table
    /// [default: <json-dir>/fonts/wenquanyi_9pt.bdf]
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// C header the BUILD_VERSION define is read from
    /// [default: <json-dir>/../source/version.h]
    #[arg(long)]
    pub version_file: Option<PathBuf>,

    /// Verbose output - shows more detailed logs
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let directives = format!(
        "fontpack={level},fontpack_corpus={level},fontpack_glyphs={level},fontpack_emit={level}"
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));
    registry().with(filter).with(fmt::layer().with_writer(stderr)).init();

    if let Err(e) = generate::run(&cli) {
        error!("generation failed: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}
