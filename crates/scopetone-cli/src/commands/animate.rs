//! Animate command implementation
//!
//! Renders every frame of a project in order, each fitted to a fixed
//! per-frame duration, and writes the concatenated stereo WAV file.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use scopetone_spec::validate_project;
use scopetone_synth::rng::random_seed;
use scopetone_synth::{render_sequence, RenderConfig, WavResult};
use serde::Serialize;

use super::{errors_to_json, print_validation, warnings_to_json, JsonDiagnostic};
use crate::input::load_project;

#[derive(Debug, Serialize)]
struct AnimateOutput {
    ok: bool,
    out: Option<String>,
    frames: Option<usize>,
    samples: Option<usize>,
    duration_seconds: Option<f64>,
    seed: Option<u32>,
    pcm_hash: Option<String>,
    errors: Vec<JsonDiagnostic>,
    warnings: Vec<JsonDiagnostic>,
}

/// Run the animate command (animated mode)
///
/// # Arguments
/// * `project_path` - Path to the project JSON file
/// * `out_path` - Output WAV path
/// * `frame_duration` - Per-frame duration in seconds
/// * `seed` - RNG seed; a random seed is drawn when omitted
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 project error, 2 render error
pub fn run(
    project_path: &str,
    out_path: &str,
    frame_duration: f64,
    seed: Option<u32>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(project_path, out_path, frame_duration, seed)
    } else {
        run_human(project_path, out_path, frame_duration, seed)
    }
}

fn run_human(
    project_path: &str,
    out_path: &str,
    frame_duration: f64,
    seed: Option<u32>,
) -> Result<ExitCode> {
    println!("{} {}", "Animating from:".cyan().bold(), project_path);
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

    let seed = seed.unwrap_or_else(random_seed);
    let config = RenderConfig::with_grid_size(project.grid_size);

    println!(
        "{} {} frame(s) at {:.3} s each",
        "Frames:".dimmed(),
        project.frame_count(),
        frame_duration
    );
    println!("{} {}", "Seed:".dimmed(), seed);

    let buffer = match render_sequence(&project.frames, &config, frame_duration, seed) {
        Ok(buffer) => buffer,
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
    frame_duration: f64,
    seed: Option<u32>,
) -> Result<ExitCode> {
    let project = load_project(Path::new(project_path))?;
    let result = validate_project(&project);
    if !result.is_ok() {
        let output = AnimateOutput {
            ok: false,
            out: None,
            frames: None,
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

    let seed = seed.unwrap_or_else(random_seed);
    let config = RenderConfig::with_grid_size(project.grid_size);

    let output = match render_sequence(&project.frames, &config, frame_duration, seed) {
        Ok(buffer) => {
            let wav = WavResult::from_buffer(&buffer, config.sample_rate);
            fs::write(out_path, &wav.wav_data)
                .with_context(|| format!("failed to write WAV file: {}", out_path))?;
            AnimateOutput {
                ok: true,
                out: Some(out_path.to_string()),
                frames: Some(project.frame_count()),
                samples: Some(wav.num_samples),
                duration_seconds: Some(wav.duration_seconds()),
                seed: Some(seed),
                pcm_hash: Some(wav.pcm_hash),
                errors: Vec::new(),
                warnings: warnings_to_json(&result),
            }
        }
        Err(e) => {
            let output = AnimateOutput {
                ok: false,
                out: None,
                frames: Some(project.frame_count()),
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
