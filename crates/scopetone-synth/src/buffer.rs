//! Two-channel sample buffers.

/// A stereo audio buffer: two equal-length columns of f64 samples in
/// [-1, +1].
///
/// Owned by the call that produced it and moved by value through the
/// pipeline; the sample rate is carried separately by the render
/// configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoBuffer {
    /// Left channel samples.
    pub left: Vec<f64>,
    /// Right channel samples.
    pub right: Vec<f64>,
}

impl StereoBuffer {
    /// Creates an empty buffer with capacity for `num_samples` per channel.
    pub fn with_capacity(num_samples: usize) -> Self {
        Self {
            left: Vec::with_capacity(num_samples),
            right: Vec::with_capacity(num_samples),
        }
    }

    /// Creates a buffer of `num_samples` of silence on both channels.
    pub fn silence(num_samples: usize) -> Self {
        Self {
            left: vec![0.0; num_samples],
            right: vec![0.0; num_samples],
        }
    }

    /// Number of samples per channel.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Appends another buffer's samples to this one.
    pub fn extend_from(&mut self, other: &StereoBuffer) {
        self.left.extend_from_slice(&other.left);
        self.right.extend_from_slice(&other.right);
    }

    /// Creates interleaved (L, R, L, R, ...) samples.
    pub fn interleave(&self) -> Vec<f64> {
        let mut output = Vec::with_capacity(self.left.len() * 2);
        for (l, r) in self.left.iter().zip(self.right.iter()) {
            output.push(*l);
            output.push(*r);
        }
        output
    }
}
