//! Error types for menukit.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a menu.
///
/// Every variant is a construction-time failure: once a menu exists, its
/// queries degrade to `false`/`None` instead of erroring.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The font file could not be read.
    #[error("failed to load font '{}': {source}", path.display())]
    FontLoad {
        /// Path that was requested
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The font file was read but is not a usable font.
    #[error("failed to parse font '{}': {reason}", path.display())]
    FontParse {
        /// Path that was requested
        path: PathBuf,
        /// Parser diagnostic
        reason: String,
    },

    /// A style field is out of range.
    #[error("invalid value for '{field}': {message}")]
    InvalidStyle {
        /// Field name
        field: &'static str,
        /// Error message
        message: String,
    },

    /// A style document could not be deserialized.
    #[error("config error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_font_load_display_and_source() {
        let err = MenuError::FontLoad {
            path: PathBuf::from("fonts/missing.ttf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("fonts/missing.ttf"));
        assert!(msg.contains("no such file"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_font_parse_display() {
        let err = MenuError::FontParse {
            path: PathBuf::from("broken.ttf"),
            reason: "unknown magic".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse font 'broken.ttf': unknown magic"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_invalid_style_display() {
        let err = MenuError::InvalidStyle {
            field: "border",
            message: "must be >= 0".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value for 'border': must be >= 0");
    }

    #[test]
    fn test_config_display() {
        let err = MenuError::Config("missing field `width`".to_string());
        assert!(err.to_string().starts_with("config error:"));
    }
}
