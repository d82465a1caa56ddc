//! Pipeline driver
//!
//! Runs the full collect → allocate → resolve → emit pass for one
//! language. The pass is a single deterministic batch with fail-fast
//! semantics; the output file is written once, only after every stage
//! has succeeded.

use anyhow::{Context, Result};
use chrono::Local;
use fontpack_corpus::{collect_corpus, BuildInfo, FrequencyTable, Schema, SymbolTable, Translation};
use fontpack_emit::{write_source, RenderedGlyph};
use fontpack_glyphs::{BdfGlyphSource, FontTables, GlyphResolver};
use std::fs;
use tracing::info;

use crate::version;
use crate::Cli;

pub fn run(cli: &Cli) -> Result<()> {
    let version_file = cli
        .version_file
        .clone()
        .unwrap_or_else(|| cli.json_dir.join("../source/version.h"));
    let build_version = version::build_version(&version_file)
        .context("could not get/extract build version")?;
    info!("Build version: {build_version}");
    info!("Making {} from {}", cli.language_code, cli.json_dir.display());

    let build = BuildInfo {
        version: build_version,
        date: Local::now().format("%d-%m-%y").to_string(),
    };

    let schema = Schema::load(&cli.json_dir.join("schema.json"))?;
    let lang = Translation::load(&cli.json_dir, &cli.language_code)?;

    let corpus = collect_corpus(&schema, &lang, &build)?;
    let freqs = FrequencyTable::tally(corpus.iter().map(String::as_str));
    let table = SymbolTable::allocate(&freqs)?;
    info!("Generating fonts for {} symbols", table.len());

    let font_path = cli
        .font
        .clone()
        .unwrap_or_else(|| cli.json_dir.join("fonts/wenquanyi_9pt.bdf"));
    let source = BdfGlyphSource::open(&font_path)
        .with_context(|| format!("failed to load fallback font {}", font_path.display()))?;
    let mut resolver = GlyphResolver::new(FontTables::builtin(), source);

    let mut glyphs = Vec::with_capacity(table.len());
    for (ch, code) in table.assignments() {
        let (large, small, _) = resolver
            .resolve(ch)
            .with_context(|| format!("resolving symbol \\x{code:02X}"))?;
        glyphs.push(RenderedGlyph {
            ch,
            code,
            large,
            small,
        });
    }

    let output = write_source(&schema, &lang, &build, &table, &glyphs)?;
    fs::write(&cli.output, output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    info!("Done");
    Ok(())
}
