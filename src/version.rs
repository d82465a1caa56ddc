//! Firmware version extraction
//!
//! Reads the BUILD_VERSION define out of the firmware's version header
//! and suffixes it with the current git hash when one is available.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

/// Extract the build version string from a C version header.
///
/// The header must carry `#define BUILD_VERSION "<text>"`. When
/// `git rev-parse` yields a commit, the version gains a
/// `.<7-char uppercase hash>` suffix; otherwise the literal ` git`
/// marker so the output still records that this was not a tagged build.
pub fn build_version(version_file: &Path) -> Result<String> {
    let header = std::fs::read_to_string(version_file)
        .with_context(|| format!("failed to read {}", version_file.display()))?;

    let mut version = None;
    for line in header.lines() {
        if line.contains("#define") && line.contains("BUILD_VERSION") {
            if let Some(v) = quoted(line) {
                version = Some(v.to_string());
            }
        }
    }
    let Some(version) = version else {
        bail!("no BUILD_VERSION define in {}", version_file.display());
    };

    Ok(format!("{version}{}", git_suffix()))
}

/// The first double-quoted payload on a line, if any.
fn quoted(line: &str) -> Option<&str> {
    let start = line.find('"')? + 1;
    let end = line[start..].find('"')? + start;
    Some(&line[start..end])
}

fn git_suffix() -> String {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output();
    match output {
        Ok(out) if out.status.success() => {
            let hash = String::from_utf8_lossy(&out.stdout).trim().to_uppercase();
            format!(".{hash}")
        }
        _ => " git".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extracts_quoted_define() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "#pragma once").unwrap();
        writeln!(file, "#define BUILD_VERSION \"2.22\"").unwrap();
        let version = build_version(file.path()).unwrap();
        assert!(version.starts_with("2.22"), "got {version:?}");
        // suffix is either a git hash or the marker
        let suffix = &version["2.22".len()..];
        assert!(suffix == " git" || suffix.starts_with('.'), "got {suffix:?}");
    }

    #[test]
    fn test_missing_define_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "#define OTHER_THING 1").unwrap();
        assert!(build_version(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        assert!(build_version(Path::new("/nonexistent/version.h")).is_err());
    }

    #[test]
    fn test_quoted() {
        assert_eq!(quoted(r#"#define BUILD_VERSION "2.22""#), Some("2.22"));
        assert_eq!(quoted("#define BUILD_VERSION 2"), None);
    }
}
