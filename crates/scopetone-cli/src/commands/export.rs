//! Export command implementation
//!
//! Renders one frame of a project looped to a total duration and writes a
//! stereo WAV file.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use scopetone_spec::{validate_project, Project};
use scopetone_synth::rng::random_seed;
use scopetone_synth::{render_static, RenderConfig, WavResult};
use serde::Serialize;

use super::{errors_to_json, print_validation, warnings_to_json, JsonDiagnostic};
use crate::input::load_project;

#[derive(Debug, Serialize)]
struct ExportOutput {
    ok: bool,
    /// True when a blank pattern was skipped without writing a file.
    skipped: bool,
    out: Option<String>,
    samples: Option<usize>,
    duration_seconds: Option<f64>,
    seed: Option<u32>,
    pcm_hash: Option<String>,
    errors: Vec<JsonDiagnostic>,
    warnings: Vec<JsonDiagnostic>,
}

/// Run the export command (static mode)
///
/// # Arguments
/// * `project_path` - Path to the project JSON file
/// * `out_path` - Output WAV path
/// * `duration` - Total duration in seconds
/// * `frame` - Frame index to export (default 0)
/// * `seed` - RNG seed; a random seed is drawn when omitted
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success (including a skipped blank pattern), 1 project
/// error, 2 render error
pub fn run(
    project_path: &str,
    out_path: &str,
    duration: f64,
    frame: Option<usize>,
    seed: Option<u32>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(project_path, out_path, duration, frame, seed)
    } else {
        run_human(project_path, out_path, duration, frame, seed)
    }
}

fn select_frame(project: &Project, frame: Option<usize>) -> Result<usize> {
    let index = frame.unwrap_or(0);
    if index >= project.frame_count() {
        bail!(
            "frame index {} out of range (project has {} frame(s))",
            index,
            project.frame_count()
        );
    }
    Ok(index)
}

fn run_human(
    project_path: &str,
    out_path: &str,
    duration: f64,
    frame: Option<usize>,
    seed: Option<u32>,
) -> Result<ExitCode> {
    println!("{} {}", "Exporting from:".cyan().bold(), project_path);
    println!("{} {}", "Output:".cyan().bold(), out_path);

    let project = load_project(Path::new(project_path))?;
    let result = validate_project(&project);
    print_validation(&result);
    if !result.is_ok() {
        println!(
            "{} {} error(s)",
            "Validation failed:".red().bold(),
            result.errors.len()
        );
        return Ok(ExitCode::from(1));
    }

    let index = select_frame(&project, frame)?;
    let seed = seed.unwrap_or_else(random_seed);
    let config = RenderConfig::with_grid_size(project.grid_size);

    println!("{} {}", "Seed:".dimmed(), seed);

    let buffer = match render_static(&project.frames[index], &config, duration, seed) {
        Ok(buffer) => buffer,
        Err(e) if e.is_warning() => {
            println!(
                "{} frame {} has no active cells; nothing exported",
                "!".yellow(),
                index
            );
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            eprintln!("{} [{}] {}", "error:".red(), e.code(), e);
            return Ok(ExitCode::from(2));
        }
    };

    let wav = WavResult::from_buffer(&buffer, config.sample_rate);
    fs::write(out_path, &wav.wav_data)
        .with_context(|| format!("failed to write WAV file: {}", out_path))?;

    println!(
        "{} {} ({} samples, {:.3} s, pcm {})",
        "Wrote".green().bold(),
        out_path,
        wav.num_samples,
        wav.duration_seconds(),
        &wav.pcm_hash[..16]
    );
    Ok(ExitCode::SUCCESS)
}

fn run_json(
    project_path: &str,
    out_path: &str,
    duration: f64,
    frame: Option<usize>,
    seed: Option<u32>,
) -> Result<ExitCode> {
    let project = load_project(Path::new(project_path))?;
    let result = validate_project(&project);
    if !result.is_ok() {
        let output = ExportOutput {
            ok: false,
            skipped: false,
            out: None,
            samples: None,
            duration_seconds: None,
            seed: None,
            pcm_hash: None,
            errors: errors_to_json(&result),
            warnings: warnings_to_json(&result),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::from(1));
    }

    let index = select_frame(&project, frame)?;
    let seed = seed.unwrap_or_else(random_seed);
    let config = RenderConfig::with_grid_size(project.grid_size);

    let output = match render_static(&project.frames[index], &config, duration, seed) {
        Ok(buffer) => {
            let wav = WavResult::from_buffer(&buffer, config.sample_rate);
            fs::write(out_path, &wav.wav_data)
                .with_context(|| format!("failed to write WAV file: {}", out_path))?;
            ExportOutput {
                ok: true,
                skipped: false,
                out: Some(out_path.to_string()),
                samples: Some(wav.num_samples),
                duration_seconds: Some(wav.duration_seconds()),
                seed: Some(seed),
                pcm_hash: Some(wav.pcm_hash),
                errors: Vec::new(),
                warnings: warnings_to_json(&result),
            }
        }
        Err(e) if e.is_warning() => ExportOutput {
            ok: false,
            skipped: true,
            out: None,
            samples: None,
            duration_seconds: None,
            seed: Some(seed),
            pcm_hash: None,
            errors: Vec::new(),
            warnings: vec![JsonDiagnostic {
                code: e.code().to_string(),
                message: e.to_string(),
                path: None,
            }],
        },
        Err(e) => {
            let output = ExportOutput {
                ok: false,
                skipped: false,
                out: None,
                samples: None,
                duration_seconds: None,
                seed: Some(seed),
                pcm_hash: None,
                errors: vec![JsonDiagnostic {
                    code: e.code().to_string(),
                    message: e.to_string(),
                    path: None,
                }],
                warnings: Vec::new(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(2));
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::SUCCESS)
}
