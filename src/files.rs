use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// Characters that are illegal (or just hostile) in common filesystems.
const ILLEGAL_CHARS: &[char] = &[
    ',', '<', '>', ':', '"', '/', '\\', '|', '?', '*', '\'', '`',
];

/// Turn an address string into a filesystem-safe token: whitespace runs
/// (including non-breaking spaces) become single underscores, then illegal
/// characters are stripped. Empty input yields an empty string.
pub fn sanitize_filename(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }

    let underscored = WHITESPACE_RE.replace_all(address, "_");
    underscored
        .trim_matches('_')
        .chars()
        .filter(|c| !ILLEGAL_CHARS.contains(c))
        .collect()
}

/// Recover the human-readable address from a capture filename:
/// drop the extension, underscores back to spaces.
pub fn address_from_filename(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|stem| stem.to_string_lossy().replace('_', " "))
        .unwrap_or_default()
}

/// A capture with an extension has already been renamed.
pub fn has_extension(path: &Path) -> bool {
    path.extension().is_some()
}

pub fn save_report(lines: &[String], path: &Path) -> Result<()> {
    let mut body = lines.join("\n");
    body.push('\n');
    fs::write(path, body).with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nbsp_and_commas() {
        assert_eq!(
            sanitize_filename("1186 Highway 554,\u{a0}El Rito, NM 87530"),
            "1186_Highway_554_El_Rito_NM_87530"
        );
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(sanitize_filename("309  Floresta \t St"), "309_Floresta_St");
    }

    #[test]
    fn leading_trailing_whitespace_trimmed() {
        assert_eq!(sanitize_filename("  12 Main St "), "12_Main_St");
    }

    #[test]
    fn illegal_chars_stripped() {
        assert_eq!(sanitize_filename(r#"a<b>c:d"e/f\g|h?i*j'k`l"#), "abcdefghijkl");
    }

    #[test]
    fn empty_input() {
        assert_eq!(sanitize_filename(""), "");
    }

    #[test]
    fn idempotent() {
        let once = sanitize_filename("1186 Highway 554,\u{a0}El Rito, NM 87530");
        assert_eq!(sanitize_filename(&once), once);
    }

    #[test]
    fn no_whitespace_in_output() {
        let out = sanitize_filename("some address with  tabs\tand spaces");
        assert!(!out.chars().any(char::is_whitespace));
    }

    #[test]
    fn address_round_trip() {
        assert_eq!(
            address_from_filename("1186_Highway_554_El_Rito_NM_87530.zlw"),
            "1186 Highway 554 El Rito NM 87530"
        );
    }

    #[test]
    fn extension_detection() {
        assert!(has_extension(Path::new("capture.zlw")));
        assert!(!has_extension(Path::new("raw_capture")));
    }
}
