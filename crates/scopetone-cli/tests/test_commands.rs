//! Integration tests driving the command implementations end to end.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use scopetone_cli::commands;
use scopetone_synth::wav::{compute_pcm_hash, extract_pcm_data};

fn write_project(dir: &Path, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, json).unwrap();
    path
}

fn dot_project() -> &'static str {
    // 4x4 grid with one active cell at (0, 0).
    r#"{
        "format_version": 1,
        "grid_size": 4,
        "frames": [
            [[1, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
        ]
    }"#
}

fn three_frame_project() -> &'static str {
    r#"{
        "format_version": 1,
        "grid_size": 2,
        "frames": [
            [[1, 0], [0, 0]],
            [[0, 0], [0, 0]],
            [[0, 0], [0, 1]]
        ]
    }"#
}

#[test]
fn test_export_writes_wav() {
    let dir = tempfile::tempdir().unwrap();
    let project = write_project(dir.path(), "dot.json", dot_project());
    let out = dir.path().join("dot.wav");

    commands::export::run(
        project.to_str().unwrap(),
        out.to_str().unwrap(),
        1.0,
        None,
        Some(42),
        false,
    )
    .unwrap();

    let wav = fs::read(&out).unwrap();
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(&wav[8..12], b"WAVE");

    // 1 s at 44100 Hz, stereo 16-bit: 44100 * 4 bytes of PCM.
    let pcm = extract_pcm_data(&wav).unwrap();
    assert_eq!(pcm.len(), 44100 * 4);
}

#[test]
fn test_export_is_deterministic_for_fixed_seed() {
    let dir = tempfile::tempdir().unwrap();
    let project = write_project(dir.path(), "dot.json", dot_project());
    let out_a = dir.path().join("a.wav");
    let out_b = dir.path().join("b.wav");

    for out in [&out_a, &out_b] {
        commands::export::run(
            project.to_str().unwrap(),
            out.to_str().unwrap(),
            0.5,
            None,
            Some(7),
            true,
        )
        .unwrap();
    }

    let a = fs::read(&out_a).unwrap();
    let b = fs::read(&out_b).unwrap();
    assert_eq!(a, b);
    assert_eq!(compute_pcm_hash(&a), compute_pcm_hash(&b));
}

#[test]
fn test_export_blank_pattern_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let blank = r#"{
        "format_version": 1,
        "grid_size": 2,
        "frames": [[[0, 0], [0, 0]]]
    }"#;
    let project = write_project(dir.path(), "blank.json", blank);
    let out = dir.path().join("blank.wav");

    commands::export::run(
        project.to_str().unwrap(),
        out.to_str().unwrap(),
        1.0,
        None,
        Some(1),
        false,
    )
    .unwrap();

    assert!(!out.exists(), "blank pattern must not produce a file");
}

#[test]
fn test_export_rejects_out_of_range_frame() {
    let dir = tempfile::tempdir().unwrap();
    let project = write_project(dir.path(), "dot.json", dot_project());
    let out = dir.path().join("dot.wav");

    let err = commands::export::run(
        project.to_str().unwrap(),
        out.to_str().unwrap(),
        1.0,
        Some(5),
        Some(1),
        false,
    )
    .unwrap_err();

    assert!(err.to_string().contains("out of range"));
    assert!(!out.exists());
}

#[test]
fn test_animate_writes_concatenated_frames() {
    let dir = tempfile::tempdir().unwrap();
    let project = write_project(dir.path(), "anim.json", three_frame_project());
    let out = dir.path().join("anim.wav");

    commands::animate::run(
        project.to_str().unwrap(),
        out.to_str().unwrap(),
        0.125,
        Some(9),
        false,
    )
    .unwrap();

    let wav = fs::read(&out).unwrap();
    let pcm = extract_pcm_data(&wav).unwrap();

    // 3 frames of round(0.125 * 44100) = 5513 samples, 4 bytes each.
    assert_eq!(pcm.len(), 3 * 5513 * 4);

    // Middle frame is silence: every PCM byte in its span is zero.
    let frame_bytes = 5513 * 4;
    assert!(pcm[frame_bytes..2 * frame_bytes].iter().all(|&b| b == 0));
}

#[test]
fn test_invalid_project_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let bad = r#"{
        "format_version": 1,
        "grid_size": 4,
        "frames": [
            [[1, 0], [0, 0]]
        ]
    }"#;
    let project = write_project(dir.path(), "bad.json", bad);
    let out = dir.path().join("bad.wav");

    commands::animate::run(
        project.to_str().unwrap(),
        out.to_str().unwrap(),
        0.125,
        Some(1),
        true,
    )
    .unwrap();

    assert!(!out.exists(), "invalid project must not produce a file");
}

#[test]
fn test_validate_runs_on_good_and_bad_projects() {
    let dir = tempfile::tempdir().unwrap();

    let good = write_project(dir.path(), "good.json", dot_project());
    commands::validate::run(good.to_str().unwrap(), true).unwrap();

    let bad = write_project(
        dir.path(),
        "bad.json",
        r#"{"format_version": 9, "grid_size": 1, "frames": []}"#,
    );
    commands::validate::run(bad.to_str().unwrap(), true).unwrap();
}
