//! Corpus collection
//!
//! Flattens one language's categories into the single ordered string
//! sequence the frequency counter runs over. The order is fixed: menu
//! option descriptions, messages, characters, menu option short names,
//! menu group short names, menu group descriptions, firmware constants,
//! debug menu labels. Same inputs always yield the same sequence.

use crate::error::Result;
use crate::translation::{Schema, Translation};
use tracing::debug;

/// Build metadata folded into the language-independent corpus entries.
///
/// Passed in explicitly so the collector stays deterministic under test;
/// the CLI computes both values once per invocation.
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Firmware version string, git suffix included
    pub version: String,
    /// Build date stamp, `%d-%m-%y`
    pub date: String,
}

/// Firmware constants shared by every language.
///
/// Name/value pairs emitted verbatim as `const char*` definitions; the
/// values also feed the frequency counter like any other corpus text.
pub fn firmware_constants(build: &BuildInfo) -> Vec<(&'static str, String)> {
    vec![
        ("SymbolPlus", "+".to_string()),
        ("SymbolMinus", "-".to_string()),
        ("SymbolSpace", " ".to_string()),
        ("SymbolDot", ".".to_string()),
        ("SymbolDegC", "C".to_string()),
        ("SymbolDegF", "F".to_string()),
        ("SymbolMinutes", "M".to_string()),
        ("SymbolSeconds", "S".to_string()),
        ("SymbolWatts", "W".to_string()),
        ("SymbolVolts", "V".to_string()),
        ("SymbolDC", "DC".to_string()),
        ("SymbolCellCount", "S".to_string()),
        ("SymbolVersionNumber", build.version.clone()),
    ]
}

/// Debug-menu labels, fixed except for the leading build date.
pub fn debug_menu(build: &BuildInfo) -> Vec<String> {
    let mut labels = vec![build.date.clone()];
    for label in [
        "HW G ", // High water marker for the GUI task
        "HW M ", // High water marker for the movement task
        "HW P ", // High water marker for the PID task
        "Time ", // Uptime
        "Move ", // Time of last significant movement
        "RTip ", // Raw tip reading in uV
        "CTip ", // Tip temperature in C
        "CHan ", // Handle temperature in C
        "Vin  ", // Input voltage
        "PCB  ", // PCB version
        "PWR  ", // Power negotiation state
        "Max  ", // Maximum temperature limit
    ] {
        labels.push(label.to_string());
    }
    labels
}

/// Flatten one language into the fixed category order.
///
/// Message ids absent from the language data fall back to the schema's
/// default text; a schema-named id missing from any other category is
/// malformed input and fails the build.
pub fn collect_corpus(
    schema: &Schema,
    lang: &Translation,
    build: &BuildInfo,
) -> Result<Vec<String>> {
    let mut corpus = Vec::new();

    for def in &schema.menu_options {
        corpus.push(lang.menu_option(&def.id)?.desc.clone());
    }
    for def in &schema.messages {
        let text = lang.message(&def.id).unwrap_or(&def.default);
        corpus.push(text.to_string());
    }
    for def in &schema.characters {
        corpus.push(lang.character(&def.id)?.to_string());
    }
    for def in &schema.menu_options {
        let text2 = &lang.menu_option(&def.id)?.text2;
        corpus.push(text2[0].clone());
        corpus.push(text2[1].clone());
    }
    for def in &schema.menu_groups {
        let text2 = &lang.menu_group(&def.id)?.text2;
        corpus.push(text2[0].clone());
        corpus.push(text2[1].clone());
    }
    for def in &schema.menu_groups {
        corpus.push(lang.menu_group(&def.id)?.desc.clone());
    }
    for (_, value) in firmware_constants(build) {
        corpus.push(value);
    }
    corpus.extend(debug_menu(build));

    debug!("collected {} corpus strings", corpus.len());
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CorpusError;

    fn build_info() -> BuildInfo {
        BuildInfo {
            version: "2.22.E45A9F1".to_string(),
            date: "28-08-26".to_string(),
        }
    }

    fn schema() -> Schema {
        serde_json::from_str(
            r#"{
                "menuOptions": [ { "id": "Opt1" }, { "id": "Opt2" } ],
                "messages": [ { "id": "Msg1", "default": "fallback text" } ],
                "characters": [ { "id": "Chr1" } ],
                "menuGroups": [ { "id": "Grp1" } ]
            }"#,
        )
        .unwrap()
    }

    fn lang() -> Translation {
        serde_json::from_str(
            r#"{
                "languageCode": "EN",
                "menuOptions": {
                    "Opt1": { "desc": "first option", "text2": ["one", "1st"] },
                    "Opt2": { "desc": "second option", "text2": ["two", "2nd"] }
                },
                "characters": { "Chr1": "label" },
                "menuGroups": { "Grp1": { "desc": "group one", "text2": ["grp", "one"] } }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_category_order() {
        let corpus = collect_corpus(&schema(), &lang(), &build_info()).unwrap();
        let head: Vec<&str> = corpus.iter().take(12).map(String::as_str).collect();
        assert_eq!(
            head,
            [
                "first option",
                "second option",
                "fallback text",
                "label",
                "one",
                "1st",
                "two",
                "2nd",
                "grp",
                "one",
                "group one",
                "+",
            ]
        );
    }

    #[test]
    fn test_message_falls_back_to_schema_default() {
        let corpus = collect_corpus(&schema(), &lang(), &build_info()).unwrap();
        assert!(corpus.contains(&"fallback text".to_string()));
    }

    #[test]
    fn test_version_and_date_included() {
        let corpus = collect_corpus(&schema(), &lang(), &build_info()).unwrap();
        assert!(corpus.contains(&"2.22.E45A9F1".to_string()));
        assert!(corpus.contains(&"28-08-26".to_string()));
    }

    #[test]
    fn test_missing_schema_id_is_fatal() {
        let schema: Schema = serde_json::from_str(
            r#"{
                "menuOptions": [ { "id": "NotThere" } ],
                "messages": [], "characters": [], "menuGroups": []
            }"#,
        )
        .unwrap();
        let err = collect_corpus(&schema, &lang(), &build_info()).unwrap_err();
        assert!(matches!(err, CorpusError::MissingEntry { .. }));
    }

    #[test]
    fn test_debug_menu_shape() {
        let labels = debug_menu(&build_info());
        assert_eq!(labels.len(), 13);
        assert_eq!(labels[0], "28-08-26");
        assert_eq!(labels[1], "HW G ");
        assert_eq!(labels[12], "Max  ");
    }
}
