//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: scheme error (unknown generator, invalid recipe)
//! - 11: I/O error (reading schemes, writing output or previews)
//! - 12: input error (bad hex, style, tier, vision type, JSON file contents)
//! - 13: serialization error
//! - 14: not found (unknown source palette)

use oledscheme_core::SchemeError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A scheme-level error (unknown generator, invalid recipe).
    Scheme(SchemeError),
    /// An I/O error (file read or write, preview rendering).
    Io(String),
    /// A user input error (bad hex, unknown style, malformed JSON file).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
    /// A requested source palette does not exist.
    NotFound(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Scheme(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
            CliError::NotFound(_) => 14,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Scheme(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
            CliError::NotFound(id) => write!(f, "palette not found: {id}"),
        }
    }
}

impl From<SchemeError> for CliError {
    fn from(e: SchemeError) -> Self {
        match e {
            SchemeError::Io(msg) => CliError::Io(msg),
            SchemeError::PaletteNotFound(id) => CliError::NotFound(id),
            SchemeError::InvalidColor(_)
            | SchemeError::UnknownStyle(_)
            | SchemeError::UnknownRiskTier(_)
            | SchemeError::UnknownVisionType(_)
            | SchemeError::UnknownContext(_) => CliError::Input(e.to_string()),
            other => CliError::Scheme(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_error_exit_code_is_10() {
        let err = CliError::Scheme(SchemeError::UnknownGenerator("foo".into()));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("write failed".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("bad hex".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn not_found_exit_code_is_14() {
        let err = CliError::from(SchemeError::PaletteNotFound("unknown-id".into()));
        assert_eq!(err.exit_code(), 14);
        assert!(err.to_string().contains("unknown-id"));
    }

    #[test]
    fn from_scheme_error_io_routes_to_cli_io() {
        let cli_err = CliError::from(SchemeError::Io("disk full".into()));
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
    }

    #[test]
    fn from_scheme_error_parse_failures_route_to_input() {
        let cli_err = CliError::from(SchemeError::UnknownVisionType("x-ray".into()));
        assert_eq!(cli_err.exit_code(), 12);
        assert!(cli_err.to_string().contains("x-ray"));
    }

    #[test]
    fn from_scheme_error_other_routes_to_cli_scheme() {
        let cli_err = CliError::from(SchemeError::InvalidRecipe("empty name".into()));
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("empty name"));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
