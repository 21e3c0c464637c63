// file: src/utils/validation.rs
// description: input validation and sanitizing helpers
// reference: input validation patterns

use crate::error::{QueryError, Result};

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(QueryError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_endpoint(path: &str) -> Result<()> {
        if !path.starts_with('/') {
            return Err(QueryError::Validation(format!(
                "Endpoint must start with '/': {}",
                path
            )));
        }
        Ok(())
    }

    /// Reduces a server-suggested filename to its last path component.
    /// Returns `None` when nothing usable is left.
    pub fn sanitize_filename(name: &str) -> Option<String> {
        let normalized = name.replace('\\', "/");
        let base = normalized.rsplit('/').next().unwrap_or("").trim();

        match base {
            "" | "." | ".." => None,
            other => Some(other.to_string()),
        }
    }

    pub fn truncate_text(text: &str, max_length: usize) -> String {
        if text.chars().count() <= max_length {
            text.to_string()
        } else {
            let head: String = text.chars().take(max_length).collect();
            format!("{}...", head)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://example.com").is_ok());
        assert!(Validator::validate_url("http://127.0.0.1:5000").is_ok());
        assert!(Validator::validate_url("example.com").is_err());
        assert!(Validator::validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_endpoint() {
        assert!(Validator::validate_endpoint("/query").is_ok());
        assert!(Validator::validate_endpoint("query").is_err());
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(
            Validator::sanitize_filename("report.csv"),
            Some("report.csv".to_string())
        );
        assert_eq!(
            Validator::sanitize_filename("../../etc/passwd"),
            Some("passwd".to_string())
        );
        assert_eq!(
            Validator::sanitize_filename("C:\\temp\\out.csv"),
            Some("out.csv".to_string())
        );
        assert_eq!(Validator::sanitize_filename(".."), None);
        assert_eq!(Validator::sanitize_filename("dir/"), None);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
        assert_eq!(Validator::truncate_text("ééééé", 2), "éé...");
    }
}
