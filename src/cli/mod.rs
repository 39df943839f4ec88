//! CLI support for sorrel
//!
//! Provides programmatic access to the sorrel CLI functionality for
//! embedding in other tools.

mod convert;
mod eval;

pub use convert::{json_to_value, value_to_json};
pub use eval::{execute_eval, CoerceType, EvalOptions};

use std::io;

use crate::ExprError;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Expression failed to tokenize, parse, or evaluate
    Expr(ExprError),
    /// Variable document is not valid JSON
    Json(serde_json::Error),
    /// Variable document is valid JSON but not an object
    VarsNotObject,
    /// IO error
    Io(io::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Expr(e) => write!(f, "{}", e),
            CliError::Json(e) => write!(f, "Invalid JSON: {}", e),
            CliError::VarsNotObject => {
                write!(f, "Variables must be a JSON object of name/value pairs.")
            }
            CliError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Expr(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ExprError> for CliError {
    fn from(e: ExprError) -> Self {
        CliError::Expr(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
