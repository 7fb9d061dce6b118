//! Static and animated rendering built on base-block synthesis and
//! duration fitting.

use scopetone_spec::Pattern;

use crate::block::synthesize_base_block;
use crate::buffer::StereoBuffer;
use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};
use crate::fit::fit_to_length;
use crate::rng::{create_frame_rng, create_rng};

/// Renders a single pattern looped to a total duration.
///
/// The base block is tiled and truncated to
/// `round(duration_seconds * sample_rate)` samples. A pattern with no active
/// cells yields [`RenderError::EmptyPattern`]; callers treat that as a
/// warning and produce no output.
pub fn render_static(
    pattern: &Pattern,
    config: &RenderConfig,
    duration_seconds: f64,
    seed: u32,
) -> RenderResult<StereoBuffer> {
    config.validate()?;
    validate_duration(duration_seconds)?;
    validate_pattern(pattern, config)?;

    let mut rng = create_rng(seed);
    let block =
        synthesize_base_block(pattern, config, &mut rng).ok_or(RenderError::EmptyPattern)?;

    Ok(fit_to_length(&block, config.target_samples(duration_seconds)))
}

/// Renders an ordered frame sequence, each frame fitted to
/// `round(frame_duration_seconds * sample_rate)` samples, concatenated in
/// order.
///
/// Blank frames render as silence; an empty sequence is
/// [`RenderError::EmptySequence`]. Each frame draws from its own derived
/// random stream, so output length is exactly
/// `frames.len() * round(frame_duration_seconds * sample_rate)` and a
/// frame's samples do not depend on its neighbors.
pub fn render_sequence(
    frames: &[Pattern],
    config: &RenderConfig,
    frame_duration_seconds: f64,
    seed: u32,
) -> RenderResult<StereoBuffer> {
    config.validate()?;
    validate_duration(frame_duration_seconds)?;
    if frames.is_empty() {
        return Err(RenderError::EmptySequence);
    }
    for frame in frames {
        validate_pattern(frame, config)?;
    }

    let frame_target = config.target_samples(frame_duration_seconds);
    let mut output = StereoBuffer::with_capacity(frames.len() * frame_target);

    for (index, frame) in frames.iter().enumerate() {
        let mut rng = create_frame_rng(seed, index as u32);
        let segment = match synthesize_base_block(frame, config, &mut rng) {
            Some(block) => fit_to_length(&block, frame_target),
            None => StereoBuffer::silence(frame_target),
        };
        output.extend_from(&segment);
    }

    Ok(output)
}

/// Fail-fast shape and value checks for a single pattern.
///
/// The persisted-document layer accumulates these as validation diagnostics;
/// here they guard direct callers of the core so synthesis never runs over a
/// malformed grid.
fn validate_pattern(pattern: &Pattern, config: &RenderConfig) -> RenderResult<()> {
    if !pattern.is_square_of(config.grid_size) {
        return Err(RenderError::invalid_grid(format!(
            "pattern must be {0}x{0}",
            config.grid_size
        )));
    }
    for (row, cells) in pattern.rows().iter().enumerate() {
        for (col, &value) in cells.iter().enumerate() {
            if value > 1 {
                return Err(RenderError::InvalidCellValue { row, col, value });
            }
        }
    }
    Ok(())
}

fn validate_duration(seconds: f64) -> RenderResult<()> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(RenderError::InvalidDuration { seconds });
    }
    Ok(())
}
