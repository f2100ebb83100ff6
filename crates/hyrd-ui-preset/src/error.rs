//! Error types for the preset crate.
//!
//! Resolving utility tokens never fails: a token no rule understands is
//! reported as `None`. Errors only come from building custom rules and from
//! loading preset options.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when configuring a preset.
#[derive(Debug, Error)]
pub enum PresetError {
    /// A custom rule pattern failed to compile.
    #[error("invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Options could not be parsed.
    #[error("failed to parse preset options{}: {message}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    /// An options file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A theme role holds something other than an `H S% L%` triple.
    #[error("invalid color '{value}' for '{role}' in {variant} variant")]
    InvalidColor {
        variant: &'static str,
        role: String,
        value: String,
    },

    /// The radius is negative or not finite.
    #[error("invalid radius {0}: must be a finite, non-negative number")]
    InvalidRadius(f64),
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Result type for preset operations.
pub type Result<T> = std::result::Result<T, PresetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_with_path() {
        let err = PresetError::Parse {
            path: Some(PathBuf::from("theme.yaml")),
            message: "bad indent".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("theme.yaml"));
        assert!(msg.contains("bad indent"));
    }

    #[test]
    fn test_parse_error_display_without_path() {
        let err = PresetError::Parse {
            path: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse preset options: bad indent");
    }

    #[test]
    fn test_invalid_color_display() {
        let err = PresetError::InvalidColor {
            variant: "dark",
            role: "ring".to_string(),
            value: "teal".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid color 'teal' for 'ring' in dark variant"
        );
    }

    #[test]
    fn test_from_regex_error() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let err: PresetError = regex_err.into();
        assert!(matches!(err, PresetError::InvalidPattern(_)));
    }
}
