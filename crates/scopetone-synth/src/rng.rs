//! Deterministic RNG using PCG32 with BLAKE3 frame-seed derivation.
//!
//! All randomness in the synthesis core flows through this module. A fixed
//! base seed makes the rendered output bit-identical across runs; production
//! callers draw a random base seed per export.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a specific frame from the base seed.
///
/// Uses BLAKE3 to hash the base seed concatenated with the frame index,
/// producing an independent random stream per frame. Frames therefore do not
/// depend on how many samples earlier frames consumed, so a frame's audio is
/// stable under edits elsewhere in the sequence.
pub fn derive_frame_seed(base_seed: u32, frame_index: u32) -> u32 {
    let mut input = Vec::with_capacity(8);
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(&frame_index.to_le_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().expect("hash has 32 bytes");
    u32::from_le_bytes(bytes)
}

/// Creates an RNG for a specific frame.
pub fn create_frame_rng(base_seed: u32, frame_index: u32) -> Pcg32 {
    create_rng(derive_frame_seed(base_seed, frame_index))
}

/// Draws a non-deterministic base seed for production exports.
pub fn random_seed() -> u32 {
    rand::random()
}
