//! Scopetone CLI - render pattern projects into vectorscope WAV files
//!
//! This binary provides commands for validating project documents and
//! exporting them as static or animated stereo waveforms.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use scopetone_cli::commands;
use scopetone_synth::{DEFAULT_FRAME_DURATION, DEFAULT_STATIC_DURATION};

/// Scopetone - Pattern-to-Waveform Renderer for Oscilloscope Visualizers
#[derive(Parser)]
#[command(name = "scopetone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a project file without rendering
    Validate {
        /// Path to the project JSON file
        #[arg(short, long)]
        project: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Export one frame looped to a total duration (static mode)
    Export {
        /// Path to the project JSON file
        #[arg(short, long)]
        project: String,

        /// Output WAV path
        #[arg(short, long, default_value = "scopetone.wav")]
        out: String,

        /// Total duration in seconds
        #[arg(long, default_value_t = DEFAULT_STATIC_DURATION)]
        duration: f64,

        /// Frame index to export (default: first frame)
        #[arg(long)]
        frame: Option<usize>,

        /// RNG seed for reproducible output (default: random)
        #[arg(long)]
        seed: Option<u32>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Export every frame in order at a fixed per-frame duration (animated mode)
    Animate {
        /// Path to the project JSON file
        #[arg(short, long)]
        project: String,

        /// Output WAV path
        #[arg(short, long, default_value = "scopetone_video.wav")]
        out: String,

        /// Per-frame duration in seconds
        #[arg(long, default_value_t = DEFAULT_FRAME_DURATION)]
        frame_duration: f64,

        /// RNG seed for reproducible output (default: random)
        #[arg(long)]
        seed: Option<u32>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { project, json } => commands::validate::run(&project, json),
        Commands::Export {
            project,
            out,
            duration,
            frame,
            seed,
            json,
        } => commands::export::run(&project, &out, duration, frame, seed, json),
        Commands::Animate {
            project,
            out,
            frame_duration,
            seed,
            json,
        } => commands::animate::run(&project, &out, frame_duration, seed, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_validate() {
        let cli = Cli::try_parse_from(["scopetone", "validate", "--project", "p.json"]).unwrap();
        match cli.command {
            Commands::Validate { project, json } => {
                assert_eq!(project, "p.json");
                assert!(!json);
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_cli_parses_export_defaults() {
        let cli = Cli::try_parse_from(["scopetone", "export", "--project", "p.json"]).unwrap();
        match cli.command {
            Commands::Export {
                project,
                out,
                duration,
                frame,
                seed,
                json,
            } => {
                assert_eq!(project, "p.json");
                assert_eq!(out, "scopetone.wav");
                assert!((duration - 30.0).abs() < 1e-12);
                assert!(frame.is_none());
                assert!(seed.is_none());
                assert!(!json);
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_cli_parses_export_with_options() {
        let cli = Cli::try_parse_from([
            "scopetone", "export", "--project", "p.json", "--out", "dot.wav", "--duration", "5.0",
            "--frame", "2", "--seed", "42", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Export {
                project,
                out,
                duration,
                frame,
                seed,
                json,
            } => {
                assert_eq!(project, "p.json");
                assert_eq!(out, "dot.wav");
                assert!((duration - 5.0).abs() < 1e-12);
                assert_eq!(frame, Some(2));
                assert_eq!(seed, Some(42));
                assert!(json);
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_cli_parses_animate_defaults() {
        let cli = Cli::try_parse_from(["scopetone", "animate", "--project", "p.json"]).unwrap();
        match cli.command {
            Commands::Animate {
                project,
                out,
                frame_duration,
                seed,
                json,
            } => {
                assert_eq!(project, "p.json");
                assert_eq!(out, "scopetone_video.wav");
                assert!((frame_duration - 0.125).abs() < 1e-12);
                assert!(seed.is_none());
                assert!(!json);
            }
            _ => panic!("expected animate command"),
        }
    }

    #[test]
    fn test_cli_requires_project() {
        let err = Cli::try_parse_from(["scopetone", "export"]).err().unwrap();
        assert!(err.to_string().contains("--project"));

        let err = Cli::try_parse_from(["scopetone", "validate"]).err().unwrap();
        assert!(err.to_string().contains("--project"));
    }
}
