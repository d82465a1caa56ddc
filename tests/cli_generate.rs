use assert_cmd::prelude::*;
use color_eyre::Result;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const SCHEMA: &str = r#"{
    "menuOptions": [
        { "id": "PowerSource", "feature": "POW_DC" },
        { "id": "SleepTemp" }
    ],
    "messages": [
        { "id": "ResetOKMessage", "default": "Reset OK" },
        { "id": "SettingsResetMessage", "default": "Defaults loaded" }
    ],
    "characters": [ { "id": "SettingYesChar" } ],
    "menuGroups": [ { "id": "PowerMenu" } ]
}"#;

// One CJK ideograph so the run exercises the fallback font path.
const TRANSLATION_EN: &str = r#"{
    "languageCode": "EN",
    "languageLocalName": "English",
    "menuOptions": {
        "PowerSource": { "desc": "Power source 中", "text2": ["Power", "source"] },
        "SleepTemp": { "desc": "Sleep temperature", "text2": ["Sleep", "temp"] }
    },
    "messages": { "ResetOKMessage": "Reset done" },
    "characters": { "SettingYesChar": "Y" },
    "menuGroups": {
        "PowerMenu": { "desc": "Power settings", "text2": ["Power", "menu"] }
    }
}"#;

const FALLBACK_BDF: &str = "\
STARTFONT 2.1
FONT test-fallback
SIZE 9 75 75
FONTBOUNDINGBOX 12 12 0 -2
CHARS 1
STARTCHAR uni4E2D
ENCODING 20013
SWIDTH 1000 0
DWIDTH 12 0
BBX 8 8 2 1
BITMAP
FF
81
81
FF
81
81
81
FF
ENDCHAR
ENDFONT
";

fn fixture(translation_file: &str, translation_json: &str) -> Result<TempDir> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("schema.json"), SCHEMA)?;
    fs::write(dir.path().join(translation_file), translation_json)?;
    fs::create_dir(dir.path().join("fonts"))?;
    fs::write(dir.path().join("fonts/wenquanyi_9pt.bdf"), FALLBACK_BDF)?;
    fs::write(
        dir.path().join("version.h"),
        "#define BUILD_VERSION \"9.99\"\n",
    )?;
    Ok(dir)
}

fn fontpack(dir: &Path, lang: &str, output: &Path) -> Result<Command> {
    let mut cmd = Command::cargo_bin("fontpack")?;
    cmd.arg(lang)
        .arg("-o")
        .arg(output)
        .arg("--json-dir")
        .arg(dir)
        .arg("--version-file")
        .arg(dir.join("version.h"));
    Ok(cmd)
}

#[test]
fn test_generates_full_output() -> Result<()> {
    let dir = fixture("translation_EN.json", TRANSLATION_EN)?;
    let output = dir.path().join("Translation_EN.cpp");

    let status = fontpack(dir.path(), "EN", &output)?.status()?;
    assert!(status.success());

    let generated = fs::read_to_string(&output)?;
    assert!(generated.starts_with(
        "// WARNING: THIS FILE WAS AUTO GENERATED BY fontpack. PLEASE DO NOT EDIT."
    ));
    assert!(generated.contains("#include \"Translation.h\""));
    assert!(generated.contains("const uint8_t USER_FONT_12[] = {"));
    assert!(generated.contains("const uint8_t USER_FONT_6x8[] = {"));
    assert!(generated.contains("// ---- English ----"));
    // digits always hold the forced code block
    assert!(generated.contains("//\\x02 -> 0"));
    assert!(generated.contains("//\\x0B -> 9"));
    // the CJK symbol was resampled and annotated like any other glyph
    assert!(generated.contains("-> 中"));
    // the fallback small cell is the replacement raster
    assert!(generated.contains("0xFD,0xFE,0xAE,0xF6,0xF9,0xFF,//"));
    // feature guard survives into the output
    assert!(generated.contains("#ifdef POW_DC"));
    assert!(generated.contains("#endif"));
    // version string from the header flows into the constants
    assert!(generated.contains("//9.99"));
    assert!(generated.contains("const bool HasFahrenheit = true;"));
    Ok(())
}

#[test]
fn test_reruns_are_byte_identical() -> Result<()> {
    let dir = fixture("translation_EN.json", TRANSLATION_EN)?;
    let first = dir.path().join("first.cpp");
    let second = dir.path().join("second.cpp");

    assert!(fontpack(dir.path(), "EN", &first)?.status()?.success());
    assert!(fontpack(dir.path(), "EN", &second)?.status()?.success());

    assert_eq!(fs::read(&first)?, fs::read(&second)?);
    Ok(())
}

#[test]
fn test_missing_message_uses_schema_default() -> Result<()> {
    let dir = fixture("translation_EN.json", TRANSLATION_EN)?;
    let output = dir.path().join("out.cpp");

    assert!(fontpack(dir.path(), "EN", &output)?.status()?.success());

    let generated = fs::read_to_string(&output)?;
    // SettingsResetMessage has no EN override; the schema default wins
    assert!(generated.contains("\";//Defaults loaded"));
    // while the authored override also made it through
    assert!(generated.contains("\";//Reset done"));
    Ok(())
}

#[test]
fn test_language_code_mismatch_aborts() -> Result<()> {
    // file says DE, JSON says FR
    let mismatched = TRANSLATION_EN.replace("\"EN\"", "\"FR\"");
    let dir = fixture("translation_DE.json", &mismatched)?;
    let output = dir.path().join("out.cpp");

    let cmd_output = fontpack(dir.path(), "DE", &output)?.output()?;
    assert!(!cmd_output.status.success());
    let stderr = String::from_utf8_lossy(&cmd_output.stderr);
    assert!(
        stderr.contains("invalid languageCode FR"),
        "stderr was: {stderr}"
    );
    assert!(!output.exists(), "no partial output may be written");
    Ok(())
}

#[test]
fn test_missing_glyph_aborts() -> Result<()> {
    // a symbol outside both the built-in table and the fallback font
    let broken = TRANSLATION_EN.replace("Sleep temperature", "Sleep 外");
    let dir = fixture("translation_EN.json", &broken)?;
    let output = dir.path().join("out.cpp");

    let cmd_output = fontpack(dir.path(), "EN", &output)?.output()?;
    assert!(!cmd_output.status.success());
    let stderr = String::from_utf8_lossy(&cmd_output.stderr);
    assert!(
        stderr.contains("missing large font element"),
        "stderr was: {stderr}"
    );
    assert!(!output.exists(), "no partial output may be written");
    Ok(())
}
