//! Command implementations for the scopetone binary.

pub mod animate;
pub mod export;
pub mod validate;

use colored::Colorize;
use scopetone_spec::ValidationResult;
use serde::Serialize;

/// A validation diagnostic in machine-readable form.
#[derive(Debug, Serialize)]
pub struct JsonDiagnostic {
    /// Stable code (e.g., "E005" or "W001").
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Document path of the offending field, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

pub(crate) fn errors_to_json(result: &ValidationResult) -> Vec<JsonDiagnostic> {
    result
        .errors
        .iter()
        .map(|e| JsonDiagnostic {
            code: e.code.code().to_string(),
            message: e.message.clone(),
            path: e.path.clone(),
        })
        .collect()
}

pub(crate) fn warnings_to_json(result: &ValidationResult) -> Vec<JsonDiagnostic> {
    result
        .warnings
        .iter()
        .map(|w| JsonDiagnostic {
            code: w.code.code().to_string(),
            message: w.message.clone(),
            path: w.path.clone(),
        })
        .collect()
}

/// Prints validation errors and warnings in the human-readable format shared
/// by every command.
pub(crate) fn print_validation(result: &ValidationResult) {
    for error in &result.errors {
        println!("  {} {}", "x".red(), error);
    }
    for warning in &result.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
}
