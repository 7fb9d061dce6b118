//! Base-block synthesis: one rasterized pass over a pattern.

use rand_distr::{Distribution, Normal};
use rand_pcg::Pcg32;
use scopetone_spec::Pattern;

use crate::buffer::StereoBuffer;
use crate::config::RenderConfig;
use crate::geometry::{cell_to_image, image_to_stereo, StereoTarget};

/// Maps a pattern's active cells to stereo targets in row-major order.
pub fn pattern_targets(pattern: &Pattern, grid_size: usize) -> Vec<StereoTarget> {
    pattern
        .active_cells()
        .map(|(row, col)| image_to_stereo(cell_to_image(row, col, grid_size)))
        .collect()
}

/// Synthesizes the base block for one pattern, or `None` if the pattern has
/// no active cells.
///
/// For each target, each channel gets `samples_per_cell` independent draws
/// from a Gaussian centered on that channel's target amplitude, clamped to
/// [-1, +1] after generation. The noise spreads consecutive sweeps of the
/// same point apart so low-update-rate scope renderers don't flicker, while
/// the mean stays locked on the intended position. Block length is
/// `active_count * samples_per_cell` per channel.
///
/// The caller owns seeding: a fixed-seed RNG makes the block
/// bit-reproducible.
pub fn synthesize_base_block(
    pattern: &Pattern,
    config: &RenderConfig,
    rng: &mut Pcg32,
) -> Option<StereoBuffer> {
    let targets = pattern_targets(pattern, config.grid_size);
    if targets.is_empty() {
        return None;
    }

    let k = config.samples_per_cell;
    let mut block = StereoBuffer::with_capacity(targets.len() * k);

    for target in &targets {
        // Config validation guarantees sigma is finite and non-negative.
        let left = Normal::new(target.left, config.noise_sigma)
            .expect("noise_sigma is validated before synthesis");
        let right = Normal::new(target.right, config.noise_sigma)
            .expect("noise_sigma is validated before synthesis");

        for _ in 0..k {
            block.left.push(left.sample(rng).clamp(-1.0, 1.0));
        }
        for _ in 0..k {
            block.right.push(right.sample(rng).clamp(-1.0, 1.0));
        }
    }

    Some(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    fn single_cell_pattern(n: usize, row: usize, col: usize) -> Pattern {
        let mut p = Pattern::blank(n);
        p.set_cell(row, col, true);
        p
    }

    #[test]
    fn test_blank_pattern_yields_none() {
        let config = RenderConfig::default();
        let mut rng = create_rng(1);
        assert!(synthesize_base_block(&Pattern::blank(16), &config, &mut rng).is_none());
    }

    #[test]
    fn test_block_length_is_active_count_times_k() {
        let config = RenderConfig::default();
        let mut pattern = Pattern::blank(16);
        pattern.set_cell(0, 0, true);
        pattern.set_cell(7, 7, true);
        pattern.set_cell(15, 15, true);

        let mut rng = create_rng(1);
        let block = synthesize_base_block(&pattern, &config, &mut rng).unwrap();
        assert_eq!(block.len(), 3 * config.samples_per_cell);
        assert_eq!(block.left.len(), block.right.len());
    }

    #[test]
    fn test_samples_stay_in_range() {
        // A corner cell has a target at the amplitude boundary, so the noise
        // pushes past it roughly half the time; clamping must hold the line.
        let config = RenderConfig {
            noise_sigma: 0.5,
            ..RenderConfig::default()
        };
        let pattern = single_cell_pattern(16, 0, 0);

        let mut rng = create_rng(7);
        let block = synthesize_base_block(&pattern, &config, &mut rng).unwrap();
        for s in block.left.iter().chain(block.right.iter()) {
            assert!((-1.0..=1.0).contains(s), "sample {} out of range", s);
        }
    }

    #[test]
    fn test_noise_centers_on_target() {
        // Top-left cell: left target 1.0, right target 0.0.
        let config = RenderConfig {
            samples_per_cell: 4000,
            ..RenderConfig::default()
        };
        let pattern = single_cell_pattern(16, 0, 0);

        let mut rng = create_rng(99);
        let block = synthesize_base_block(&pattern, &config, &mut rng).unwrap();

        let mean_left: f64 = block.left.iter().sum::<f64>() / block.left.len() as f64;
        let mean_right: f64 = block.right.iter().sum::<f64>() / block.right.len() as f64;

        // Clamping shaves the upper tail at +1, so the left mean sits just
        // below the target.
        assert!((mean_left - 1.0).abs() < 0.01, "left mean {}", mean_left);
        assert!(mean_right.abs() < 0.01, "right mean {}", mean_right);
    }

    #[test]
    fn test_row_major_emission_order() {
        // Two cells on one row: the first k samples belong to the leftmost.
        let config = RenderConfig {
            noise_sigma: 0.0,
            ..RenderConfig::default()
        };
        let mut pattern = Pattern::blank(16);
        pattern.set_cell(0, 0, true); // left 1.0, right 0.0
        pattern.set_cell(0, 15, true); // left 0.0, right 1.0

        let mut rng = create_rng(1);
        let block = synthesize_base_block(&pattern, &config, &mut rng).unwrap();
        let k = config.samples_per_cell;

        assert_eq!(block.left[0], 1.0);
        assert_eq!(block.right[0], 0.0);
        assert_eq!(block.left[k], 0.0);
        assert_eq!(block.right[k], 1.0);
    }

    #[test]
    fn test_seeded_reproducibility() {
        let config = RenderConfig::default();
        let pattern = single_cell_pattern(16, 3, 9);

        let block1 = synthesize_base_block(&pattern, &config, &mut create_rng(42)).unwrap();
        let block2 = synthesize_base_block(&pattern, &config, &mut create_rng(42)).unwrap();
        assert_eq!(block1, block2);

        let block3 = synthesize_base_block(&pattern, &config, &mut create_rng(43)).unwrap();
        assert_ne!(block1, block3);
    }
}
