//! Scopetone Synthesis Core
//!
//! This crate renders binary pixel patterns into stereo waveforms that draw
//! the pattern on an oscilloscope-style audio visualizer (X = right - left,
//! Y = right + left).
//!
//! # Pipeline
//!
//! 1. [`geometry`] - grid cells to normalized image points, image points to
//!    target channel amplitudes
//! 2. [`block`] - one noisy, clamped base block per pattern
//! 3. [`fit`] - tiling/truncation to an exact sample count
//! 4. [`render`] - static (single looped pattern) and animated (frame
//!    sequence) assembly
//! 5. [`wav`] - deterministic 16-bit PCM encoding of the finished buffer
//!
//! # Determinism
//!
//! All synthesis is seedable. Given the same pattern, configuration, and
//! seed, the output is byte-identical across runs: randomness flows through
//! PCG32 generators created in [`rng`], with per-frame seeds derived via
//! BLAKE3 so each frame owns an independent stream. Production exports draw
//! a random base seed.
//!
//! # Example
//!
//! ```
//! use scopetone_spec::Pattern;
//! use scopetone_synth::{render_static, RenderConfig, WavResult};
//!
//! let mut pattern = Pattern::blank(16);
//! pattern.set_cell(0, 0, true);
//!
//! let config = RenderConfig::default();
//! let buffer = render_static(&pattern, &config, 30.0, 42)?;
//! let wav = WavResult::from_buffer(&buffer, config.sample_rate);
//!
//! assert_eq!(wav.num_samples, 1_323_000);
//! # Ok::<(), scopetone_synth::RenderError>(())
//! ```

pub mod block;
pub mod buffer;
pub mod config;
pub mod error;
pub mod fit;
pub mod geometry;
pub mod render;
pub mod rng;
pub mod wav;

// Re-export main types at the crate root
pub use buffer::StereoBuffer;
pub use config::{
    RenderConfig, DEFAULT_BIT_DEPTH, DEFAULT_FRAME_DURATION, DEFAULT_GRID_SIZE,
    DEFAULT_NOISE_SIGMA, DEFAULT_SAMPLES_PER_CELL, DEFAULT_SAMPLE_RATE, DEFAULT_STATIC_DURATION,
};
pub use error::{RenderError, RenderResult};
pub use render::{render_sequence, render_static};
pub use wav::{WavFormat, WavResult};
