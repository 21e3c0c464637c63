// file: src/parser/disposition.rs
// description: save filename extraction from Content-Disposition headers
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Quoted values run to the closing quote, bare (or unterminated) values stop at `;`.
    static ref FILENAME_PARAM: Regex = Regex::new(
        r#"(?i)\bfilename\s*=\s*(?:"([^"]*)"|"?([^";]+))"#
    ).expect("FILENAME_PARAM regex is valid");
}

/// Filename suggested by a `Content-Disposition` header value, if any.
pub fn extract_filename(header: &str) -> Option<String> {
    FILENAME_PARAM
        .captures(header)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Resolves the save name for an export, falling back to `default` when the
/// header is absent or carries no usable filename.
pub fn resolve_filename(header: Option<&str>, default: &str) -> String {
    header
        .and_then(extract_filename)
        .unwrap_or_else(|| default.to_string())
}
