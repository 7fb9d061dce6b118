//! Duration fitting: tiling a base block to an exact sample count.

use crate::buffer::StereoBuffer;

/// Tiles `block` end-to-end and truncates to exactly `target` samples per
/// channel.
///
/// An empty block fits to `target` samples of silence (the animated path for
/// blank frames). Runs in O(target) using whole-slice copies; it never reads
/// past its input and never yields more or fewer than `target` samples.
pub fn fit_to_length(block: &StereoBuffer, target: usize) -> StereoBuffer {
    if block.is_empty() {
        return StereoBuffer::silence(target);
    }

    let len = block.len();
    let full_reps = target / len;
    let remainder = target % len;

    let mut fitted = StereoBuffer::with_capacity(target);
    for _ in 0..full_reps {
        fitted.extend_from(block);
    }
    fitted.left.extend_from_slice(&block.left[..remainder]);
    fitted.right.extend_from_slice(&block.right[..remainder]);

    fitted
}
