//! Helpers for pulling identity out of Zillow listing URLs.

use std::sync::LazyLock;

use regex::Regex;

static ZPID_PATH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)_zpid").unwrap());
static ZPID_QUERY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"zpid=(\d+)").unwrap());
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"homedetails/(.*?)/.*_zpid").unwrap());
static NAME_FALLBACK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.com/(.*?)/.*_zpid").unwrap());

pub const UNKNOWN_PROPERTY: &str = "Unknown Property";

/// Extract the ZPID from a listing URL. Handles the `/12345_zpid/` path
/// form, older URLs with a bare numeric path segment, and the oldest
/// `?zpid=12345` query form.
pub fn property_id_from_url(url: &str) -> Option<String> {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    };

    if let Some(caps) = ZPID_PATH_RE.captures(path) {
        return Some(caps[1].to_string());
    }

    // e.g. /b/309-floresta-st-las-vegas-nm-123456/ with a trailing id segment
    if let Some(segment) = path
        .split('/')
        .rev()
        .find(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
    {
        return Some(segment.to_string());
    }

    ZPID_QUERY_RE.captures(query).map(|caps| caps[1].to_string())
}

/// Extract a human-readable property name from a listing URL.
pub fn property_name_from_url(url: &str) -> String {
    NAME_RE
        .captures(url)
        .or_else(|| NAME_FALLBACK_RE.captures(url))
        .map(|caps| caps[1].replace('-', " "))
        .unwrap_or_else(|| UNKNOWN_PROPERTY.to_string())
}

// ── Tests ──
