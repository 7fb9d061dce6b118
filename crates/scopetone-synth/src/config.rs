//! Render configuration.

use crate::error::{RenderError, RenderResult};

/// Reference grid dimension.
pub const DEFAULT_GRID_SIZE: usize = 16;

/// Reference number of samples emitted per active cell in a base block.
pub const DEFAULT_SAMPLES_PER_CELL: usize = 40;

/// Reference Gaussian noise standard deviation around each target amplitude.
pub const DEFAULT_NOISE_SIGMA: f64 = 0.01;

/// Reference output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Reference output bit depth.
pub const DEFAULT_BIT_DEPTH: u16 = 16;

/// Reference total duration of a static export, in seconds.
pub const DEFAULT_STATIC_DURATION: f64 = 30.0;

/// Reference per-frame duration of an animated export, in seconds.
pub const DEFAULT_FRAME_DURATION: f64 = 0.125;

/// Immutable render configuration passed into every core entry point.
///
/// Fixed for the lifetime of a render call; the synthesis stages never
/// mutate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Grid dimension N; every frame must be NxN. Must be at least 2.
    pub grid_size: usize,
    /// Samples emitted per active cell (K). Must be nonzero.
    pub samples_per_cell: usize,
    /// Gaussian noise standard deviation around each target amplitude.
    /// Small relative to the [-1, 1] amplitude range so clamping rarely
    /// triggers except near the boundary.
    pub noise_sigma: f64,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Output bit depth. Only 16-bit PCM is supported.
    pub bit_depth: u16,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            samples_per_cell: DEFAULT_SAMPLES_PER_CELL,
            noise_sigma: DEFAULT_NOISE_SIGMA,
            sample_rate: DEFAULT_SAMPLE_RATE,
            bit_depth: DEFAULT_BIT_DEPTH,
        }
    }
}

impl RenderConfig {
    /// Creates a configuration with the reference constants but a custom
    /// grid dimension.
    pub fn with_grid_size(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Self::default()
        }
    }

    /// Checks every field against its contract.
    pub fn validate(&self) -> RenderResult<()> {
        if self.grid_size < 2 {
            return Err(RenderError::invalid_grid(format!(
                "grid_size must be at least 2, got {}",
                self.grid_size
            )));
        }
        if self.samples_per_cell == 0 {
            return Err(RenderError::invalid_param(
                "samples_per_cell",
                "must be nonzero",
            ));
        }
        if !self.noise_sigma.is_finite() || self.noise_sigma < 0.0 {
            return Err(RenderError::invalid_param(
                "noise_sigma",
                format!("must be finite and non-negative, got {}", self.noise_sigma),
            ));
        }
        if self.sample_rate == 0 {
            return Err(RenderError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if self.bit_depth != 16 {
            return Err(RenderError::invalid_param(
                "bit_depth",
                format!("only 16-bit PCM output is supported, got {}", self.bit_depth),
            ));
        }
        Ok(())
    }

    /// Converts a duration in seconds to a target sample count.
    ///
    /// The rounding rule is round-half-away-from-zero (`f64::round`), so
    /// 0.125 s at 44100 Hz is 5512.5 -> 5513 samples. This is the single
    /// rounding rule used everywhere a duration becomes a sample count.
    pub fn target_samples(&self, seconds: f64) -> usize {
        (seconds * self.sample_rate as f64).round() as usize
    }
}
