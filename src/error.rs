use thiserror::Error;

/// Blocklist engine error types.
///
/// Lookups never fail; these are raised while building tries and entity
/// lists, or while loading list data and configuration.
#[derive(Error, Debug)]
pub enum BlockerError {
    #[error("Whitelist already set for host: {host}")]
    DuplicateWhitelist { host: String },

    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Invalid entity list: {0}")]
    InvalidEntityList(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BlockerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_whitelist_is_matchable() {
        let err = BlockerError::DuplicateWhitelist {
            host: "example.com".into(),
        };
        match &err {
            BlockerError::DuplicateWhitelist { host } => assert_eq!(host, "example.com"),
            _ => panic!("expected DuplicateWhitelist"),
        }
    }

    #[test]
    fn test_display_includes_line() {
        let err = BlockerError::ParseErrorAtLine {
            line: 12,
            message: "Invalid host".into(),
        };
        let display = format!("{}", err);
        assert!(display.contains("line 12"), "got: {}", display);
        assert!(display.contains("Invalid host"), "got: {}", display);
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: BlockerError = json_err.into();
        assert!(matches!(err, BlockerError::JsonError(_)));
    }
}
