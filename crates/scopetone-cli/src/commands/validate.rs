//! Validate command implementation
//!
//! Validates a project file without rendering anything.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use scopetone_spec::validate_project;
use serde::Serialize;

use super::{errors_to_json, print_validation, warnings_to_json, JsonDiagnostic};
use crate::input::load_project;

#[derive(Debug, Serialize)]
struct ValidateOutput {
    ok: bool,
    project: String,
    grid_size: Option<usize>,
    frame_count: Option<usize>,
    errors: Vec<JsonDiagnostic>,
    warnings: Vec<JsonDiagnostic>,
}

/// Run the validate command
///
/// # Arguments
/// * `project_path` - Path to the project JSON file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(project_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(project_path)
    } else {
        run_human(project_path)
    }
}

fn run_human(project_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), project_path);

    let project = load_project(Path::new(project_path))?;
    let result = validate_project(&project);

    print_validation(&result);

    if result.is_ok() {
        println!(
            "{} {}x{} grid, {} frame(s)",
            "Project OK:".green().bold(),
            project.grid_size,
            project.grid_size,
            project.frame_count()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} {} error(s)",
            "Validation failed:".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(project_path: &str) -> Result<ExitCode> {
    let output = match load_project(Path::new(project_path)) {
        Ok(project) => {
            let result = validate_project(&project);
            ValidateOutput {
                ok: result.is_ok(),
                project: project_path.to_string(),
                grid_size: Some(project.grid_size),
                frame_count: Some(project.frame_count()),
                errors: errors_to_json(&result),
                warnings: warnings_to_json(&result),
            }
        }
        Err(e) => ValidateOutput {
            ok: false,
            project: project_path.to_string(),
            grid_size: None,
            frame_count: None,
            errors: vec![JsonDiagnostic {
                code: "LOAD".to_string(),
                message: format!("{:#}", e),
                path: None,
            }],
            warnings: Vec::new(),
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(if output.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
