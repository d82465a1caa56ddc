//! Generated-source writer
//!
//! Lays out the complete generated C source for one language. The
//! section order and formatting are a byte-exact contract with the
//! firmware build: font tables first, then every string category in the
//! same fixed order the corpus was collected in.

use crate::encode::encode_string;
use fontpack_corpus::{
    debug_menu, firmware_constants, BuildInfo, Result, Schema, SymbolTable, Translation,
};
use fontpack_glyphs::{LargeCell, SmallCell};
use std::fmt::Write;

/// One symbol's rendered artwork, paired with its allocated code.
///
/// The slice handed to [`write_source`] must be in glyph emission order:
/// the forced digit block first, then allocation order.
#[derive(Debug, Clone)]
pub struct RenderedGlyph {
    pub ch: char,
    pub code: u8,
    pub large: LargeCell,
    pub small: SmallCell,
}

/// Width of the id column inside `/* [NN] id */` comments.
const ID_COMMENT_WIDTH: usize = 25;

/// Render the complete output file for one language.
///
/// Pure: all inputs were validated upstream and the result is returned
/// as one string so the caller can make a single write-once file write.
pub fn write_source(
    schema: &Schema,
    lang: &Translation,
    build: &BuildInfo,
    table: &SymbolTable,
    glyphs: &[RenderedGlyph],
) -> Result<String> {
    let mut out = String::new();
    out.push_str(
        "// WARNING: THIS FILE WAS AUTO GENERATED BY fontpack. PLEASE DO NOT EDIT.\n\n",
    );
    out.push_str("#include \"Translation.h\"\n");

    write_font_tables(&mut out, glyphs);

    let _ = write!(out, "// ---- {} ----\n\n", lang.display_name());

    write_descriptions(&mut out, schema, lang, table)?;
    write_messages(&mut out, schema, lang, table);
    write_characters(&mut out, schema, lang, table)?;
    write_constants(&mut out, build, table);
    write_debug_menu(&mut out, build, table);
    write_short_names(&mut out, schema, lang, table)?;
    write_menu_groups(&mut out, schema, lang, table)?;

    let _ = write!(out, "const bool HasFahrenheit = {};\n", lang.temp_unit_fahrenheit);
    Ok(out)
}

fn write_font_tables(out: &mut String, glyphs: &[RenderedGlyph]) {
    out.push_str("const uint8_t USER_FONT_12[] = {\n");
    for g in glyphs {
        for b in g.large.bytes() {
            let _ = write!(out, "0x{b:02X},");
        }
        let _ = write!(out, "//\\x{:02X} -> {}\n", g.code, g.ch);
    }
    out.push_str("};\n");

    out.push_str("const uint8_t USER_FONT_6x8[] = {\n");
    for g in glyphs {
        for b in g.small.bytes() {
            let _ = write!(out, "0x{b:02X},");
        }
        let _ = write!(out, "//\\x{:02X} -> {}\n", g.code, g.ch);
    }
    out.push_str("};\n");
}

fn write_descriptions(
    out: &mut String,
    schema: &Schema,
    lang: &Translation,
    table: &SymbolTable,
) -> Result<()> {
    out.push_str("const char* SettingsDescriptions[] = {\n");
    for (index, def) in schema.menu_options.iter().enumerate() {
        let desc = &lang.menu_option(&def.id)?.desc;
        if let Some(feature) = &def.feature {
            let _ = write!(out, "#ifdef {feature}\n");
        }
        let _ = write!(
            out,
            "  /* [{index:02}] {} */ \"{}\",//{}\n",
            pad_id(&def.id),
            encode_string(table, desc),
            desc
        );
        if def.feature.is_some() {
            out.push_str("#endif\n");
        }
    }
    out.push_str("};\n\n");
    Ok(())
}

fn write_messages(out: &mut String, schema: &Schema, lang: &Translation, table: &SymbolTable) {
    for def in &schema.messages {
        let source = lang.message(&def.id).unwrap_or(&def.default);
        let _ = write!(
            out,
            "const char* {} = \"{}\";//{}\n",
            def.id,
            encode_string(table, source),
            source.replace('\n', "_")
        );
    }
    out.push('\n');
}

fn write_characters(
    out: &mut String,
    schema: &Schema,
    lang: &Translation,
    table: &SymbolTable,
) -> Result<()> {
    for def in &schema.characters {
        let source = lang.character(&def.id)?;
        let _ = write!(
            out,
            "const char* {} = \"{}\";//{}\n",
            def.id,
            encode_string(table, source),
            source
        );
    }
    out.push('\n');
    Ok(())
}

fn write_constants(out: &mut String, build: &BuildInfo, table: &SymbolTable) {
    for (name, value) in firmware_constants(build) {
        let _ = write!(
            out,
            "const char* {} = \"{}\";//{}\n",
            name,
            encode_string(table, &value),
            value
        );
    }
    out.push('\n');
}

fn write_debug_menu(out: &mut String, build: &BuildInfo, table: &SymbolTable) {
    out.push_str("const char* DebugMenu[] = {\n");
    for label in debug_menu(build) {
        let _ = write!(out, "\t \"{}\",//{}\n", encode_string(table, &label), label);
    }
    out.push_str("};\n\n");
}

fn write_short_names(
    out: &mut String,
    schema: &Schema,
    lang: &Translation,
    table: &SymbolTable,
) -> Result<()> {
    out.push_str("const char* SettingsShortNames[][2] = {\n");
    for (index, def) in schema.menu_options.iter().enumerate() {
        let text2 = &lang.menu_option(&def.id)?.text2;
        if let Some(feature) = &def.feature {
            let _ = write!(out, "#ifdef {feature}\n");
        }
        let _ = write!(
            out,
            "  /* [{index:02}] {} */ {{ \"{}\", \"{}\" }},//[{}, {}]\n",
            pad_id(&def.id),
            encode_string(table, &text2[0]),
            encode_string(table, &text2[1]),
            text2[0],
            text2[1]
        );
        if def.feature.is_some() {
            out.push_str("#endif\n");
        }
    }
    out.push_str("};\n\n");
    Ok(())
}

fn write_menu_groups(
    out: &mut String,
    schema: &Schema,
    lang: &Translation,
    table: &SymbolTable,
) -> Result<()> {
    let count = schema.menu_groups.len();

    let _ = write!(out, "const char* SettingsMenuEntries[{count}] = {{\n");
    for def in &schema.menu_groups {
        let text2 = &lang.menu_group(&def.id)?.text2;
        // the two short-name halves stack on the menu, joined by the
        // reserved newline code
        let joined = format!("{}\n{}", text2[0], text2[1]);
        let _ = write!(
            out,
            "  /* {} */ \"{}\",//[{}, {}]\n",
            pad_id(&def.id),
            encode_string(table, &joined),
            text2[0],
            text2[1]
        );
    }
    out.push_str("};\n\n");

    let _ = write!(out, "const char* SettingsMenuEntriesDescriptions[{count}] = {{\n");
    for def in &schema.menu_groups {
        let desc = &lang.menu_group(&def.id)?.desc;
        let _ = write!(
            out,
            "  /* {} */ \"{}\",//{}\n",
            pad_id(&def.id),
            encode_string(table, desc),
            desc
        );
    }
    out.push_str("};\n\n");
    Ok(())
}

/// Pad or truncate an id to the fixed comment column width.
fn pad_id(id: &str) -> String {
    let mut s: String = id.chars().take(ID_COMMENT_WIDTH).collect();
    while s.chars().count() < ID_COMMENT_WIDTH {
        s.push(' ');
    }
    s
}
