//! Translation and schema data models
//!
//! Two JSON inputs drive a build: the per-language translation file and
//! the schema file that enumerates, in fixed order, every id each
//! category must provide. Traversal is always schema-driven so the
//! output layout never depends on per-language key ordering.

use crate::error::{CorpusError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// A full description plus its two-line short name, as authored for one
/// menu option or menu group.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuText {
    /// Description shown on the scrolling detail line
    pub desc: String,
    /// Two-element short-name pair shown on the menu itself
    pub text2: [String; 2],
}

/// One language's translation data (`translation_<CODE>.json`)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    /// Upper-case language code, cross-checked against the file name
    pub language_code: String,

    /// Native-script display name; the code doubles as the name when absent
    #[serde(default)]
    pub language_local_name: Option<String>,

    /// Whether the firmware should offer Fahrenheit for this language
    #[serde(default = "default_true")]
    pub temp_unit_fahrenheit: bool,

    #[serde(default)]
    pub menu_options: HashMap<String, MenuText>,

    #[serde(default)]
    pub messages: HashMap<String, String>,

    #[serde(default)]
    pub characters: HashMap<String, String>,

    #[serde(default)]
    pub menu_groups: HashMap<String, MenuText>,
}

fn default_true() -> bool {
    true
}

impl Translation {
    /// Load `translation_<CODE>.json` from `json_dir`.
    ///
    /// The language code declared inside the file must match the one
    /// embedded in the file name (compared upper-cased); a mismatch is
    /// fatal before any output is produced.
    pub fn load(json_dir: &Path, lang_code: &str) -> Result<Self> {
        let file_name = format!("translation_{lang_code}.json");
        let path = json_dir.join(&file_name);
        let raw = std::fs::read_to_string(&path).map_err(|source| CorpusError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let lang: Translation =
            serde_json::from_str(&raw).map_err(|e| CorpusError::Parse {
                path: file_name.clone(),
                message: e.to_string(),
            })?;
        if lang.language_code.to_uppercase() != lang_code.to_uppercase() {
            return Err(CorpusError::LanguageCodeMismatch {
                file: file_name,
                declared: lang.language_code,
            });
        }
        Ok(lang)
    }

    /// Display name used in the output banner.
    pub fn display_name(&self) -> &str {
        self.language_local_name
            .as_deref()
            .unwrap_or(&self.language_code)
    }

    /// Menu option text for a schema-named id.
    pub fn menu_option(&self, id: &str) -> Result<&MenuText> {
        self.menu_options.get(id).ok_or_else(|| CorpusError::MissingEntry {
            category: "menuOptions",
            id: id.to_string(),
        })
    }

    /// Message override for an id, when this language has one.
    pub fn message(&self, id: &str) -> Option<&str> {
        self.messages.get(id).map(String::as_str)
    }

    /// Character label for a schema-named id.
    pub fn character(&self, id: &str) -> Result<&str> {
        self.characters
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| CorpusError::MissingEntry {
                category: "characters",
                id: id.to_string(),
            })
    }

    /// Menu group text for a schema-named id.
    pub fn menu_group(&self, id: &str) -> Result<&MenuText> {
        self.menu_groups.get(id).ok_or_else(|| CorpusError::MissingEntry {
            category: "menuGroups",
            id: id.to_string(),
        })
    }
}

/// One expected menu option: id plus an optional compile-time feature gate
#[derive(Debug, Clone, Deserialize)]
pub struct MenuOptionDef {
    pub id: String,
    /// Preprocessor define the emitted entry is wrapped in, when present
    #[serde(default)]
    pub feature: Option<String>,
}

/// One expected message: id plus the default text used when a language
/// carries no override
#[derive(Debug, Clone, Deserialize)]
pub struct MessageDef {
    pub id: String,
    #[serde(default)]
    pub default: String,
}

/// An id-only schema entry (characters and menu groups)
#[derive(Debug, Clone, Deserialize)]
pub struct IdDef {
    pub id: String,
}

/// The schema file: the fixed traversal and emission order for every
/// category. Array order is load-bearing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub menu_options: Vec<MenuOptionDef>,
    pub messages: Vec<MessageDef>,
    pub characters: Vec<IdDef>,
    pub menu_groups: Vec<IdDef>,
}

impl Schema {
    /// Load the schema description from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| CorpusError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|e| CorpusError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_lang_json(code: &str) -> String {
        format!(
            r#"{{
                "languageCode": "{code}",
                "menuOptions": {{
                    "PowerSource": {{ "desc": "Power source", "text2": ["Power", "source"] }}
                }},
                "messages": {{ "SettingsResetMessage": "Defaults loaded" }},
                "characters": {{ "SettingsCalibrationWarning": "Calibrate?" }},
                "menuGroups": {{ "PowerMenu": {{ "desc": "Power settings", "text2": ["Power", "menu"] }} }}
            }}"#
        )
    }

    #[test]
    fn test_load_checks_language_code() {
        let dir = std::env::temp_dir().join("fontpack-corpus-langcode-test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("translation_DE.json"), minimal_lang_json("FR")).unwrap();

        let err = Translation::load(&dir, "DE").unwrap_err();
        assert!(matches!(
            err,
            CorpusError::LanguageCodeMismatch { ref declared, .. } if declared == "FR"
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_defaults() {
        let lang: Translation = serde_json::from_str(&minimal_lang_json("EN")).unwrap();
        assert!(lang.temp_unit_fahrenheit);
        assert_eq!(lang.display_name(), "EN");
    }

    #[test]
    fn test_local_name_preferred() {
        let lang: Translation = serde_json::from_str(
            r#"{ "languageCode": "DE", "languageLocalName": "Deutsch" }"#,
        )
        .unwrap();
        assert_eq!(lang.display_name(), "Deutsch");
    }

    #[test]
    fn test_missing_entry_is_fatal() {
        let lang: Translation = serde_json::from_str(&minimal_lang_json("EN")).unwrap();
        assert!(lang.menu_option("PowerSource").is_ok());
        assert!(matches!(
            lang.menu_option("NoSuchOption"),
            Err(CorpusError::MissingEntry { category: "menuOptions", .. })
        ));
        assert!(lang.message("NoSuchMessage").is_none());
    }

    #[test]
    fn test_schema_order_preserved() {
        let schema: Schema = serde_json::from_str(
            r#"{
                "menuOptions": [
                    { "id": "B", "feature": "ENABLE_B" },
                    { "id": "A" }
                ],
                "messages": [ { "id": "M1", "default": "hello" }, { "id": "M2" } ],
                "characters": [ { "id": "C1" } ],
                "menuGroups": [ { "id": "G1" } ]
            }"#,
        )
        .unwrap();
        let ids: Vec<&str> = schema.menu_options.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["B", "A"]);
        assert_eq!(schema.menu_options[0].feature.as_deref(), Some("ENABLE_B"));
        assert_eq!(schema.messages[0].default, "hello");
        assert_eq!(schema.messages[1].default, "");
    }
}
