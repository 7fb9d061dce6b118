//! Deterministic WAV encoding.
//!
//! Writes stereo 16-bit PCM WAV files with no timestamps or variable
//! metadata, so the same rendered buffer always produces byte-identical
//! output. The BLAKE3 hash of the PCM payload backs determinism assertions.
//! The synthesis core never calls this module; it consumes the core's
//! output buffer.

use std::io::{self, Write};

use crate::buffer::StereoBuffer;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Number of channels. Always 2 for scopetone output.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a stereo 16-bit format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Writes a complete WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Converts a stereo buffer to interleaved 16-bit PCM bytes.
///
/// Samples are expected in [-1.0, 1.0]; values outside are clipped. The
/// shorter channel bounds the output if lengths ever disagree.
pub fn stereo_to_pcm16(buffer: &StereoBuffer) -> Vec<u8> {
    let len = buffer.left.len().min(buffer.right.len());
    let mut pcm = Vec::with_capacity(len * 4); // 2 channels * 2 bytes per sample

    for i in 0..len {
        let left = (buffer.left[i].clamp(-1.0, 1.0) * 32767.0).round() as i16;
        pcm.extend_from_slice(&left.to_le_bytes());

        let right = (buffer.right[i].clamp(-1.0, 1.0) * 32767.0).round() as i16;
        pcm.extend_from_slice(&right.to_le_bytes());
    }

    pcm
}

/// Result of WAV encoding.
#[derive(Debug)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples per channel.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes a rendered stereo buffer.
    pub fn from_buffer(buffer: &StereoBuffer, sample_rate: u32) -> Self {
        let pcm = stereo_to_pcm16(buffer);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::stereo(sample_rate);
        let wav_data = write_wav_to_vec(&format, &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: buffer.len(),
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

/// Extracts the PCM payload from a WAV file buffer.
///
/// Used for comparing files by audio content only.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 {
        return None;
    }

    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    // Find data chunk
    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start + chunk_size;
            if data_end <= wav_data.len() {
                return Some(&wav_data[data_start..data_end]);
            }
        }

        pos += 8 + chunk_size;
        // Align to word boundary
        if chunk_size % 2 != 0 {
            pos += 1;
        }
    }

    None
}

/// Computes the PCM hash of a WAV file.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_buffer(len: usize) -> StereoBuffer {
        StereoBuffer {
            left: (0..len).map(|i| (i as f64 / len as f64) - 0.5).collect(),
            right: (0..len).map(|i| 0.5 - (i as f64 / len as f64)).collect(),
        }
    }

    #[test]
    fn test_wav_format() {
        let format = WavFormat::stereo(44100);
        assert_eq!(format.channels, 2);
        assert_eq!(format.byte_rate(), 176400);
        assert_eq!(format.block_align(), 4);
    }

    #[test]
    fn test_stereo_to_pcm16() {
        let buffer = StereoBuffer {
            left: vec![0.0, 1.0, -1.0],
            right: vec![0.5, -0.5, 0.0],
        };
        let pcm = stereo_to_pcm16(&buffer);

        assert_eq!(pcm.len(), 12); // 3 samples * 2 channels * 2 bytes
        assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 0);
        assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), 32767);
        assert_eq!(i16::from_le_bytes([pcm[8], pcm[9]]), -32767);
    }

    #[test]
    fn test_clipping() {
        let buffer = StereoBuffer {
            left: vec![2.0],
            right: vec![-2.0],
        };
        let pcm = stereo_to_pcm16(&buffer);

        assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 32767);
        assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), -32767);
    }

    #[test]
    fn test_header_layout() {
        let result = WavResult::from_buffer(&test_buffer(100), 44100);
        let wav = &result.wav_data;

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");

        let channels = u16::from_le_bytes([wav[22], wav[23]]);
        assert_eq!(channels, 2);

        // 100 samples * 2 channels * 2 bytes
        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        assert_eq!(data_size, 400);
    }

    #[test]
    fn test_wav_result_metadata() {
        let result = WavResult::from_buffer(&test_buffer(22050), 44100);
        assert_eq!(result.num_samples, 22050);
        assert_eq!(result.sample_rate, 44100);
        assert!((result.duration_seconds() - 0.5).abs() < 1e-9);
        assert_eq!(result.pcm_hash.len(), 64);
    }

    #[test]
    fn test_hash_is_stable() {
        let buffer = test_buffer(500);
        let a = WavResult::from_buffer(&buffer, 44100);
        let b = WavResult::from_buffer(&buffer, 44100);
        assert_eq!(a.pcm_hash, b.pcm_hash);
        assert_eq!(a.wav_data, b.wav_data);
    }

    #[test]
    fn test_extract_pcm_round_trip() {
        let buffer = test_buffer(64);
        let result = WavResult::from_buffer(&buffer, 44100);

        let pcm = extract_pcm_data(&result.wav_data).expect("should extract PCM");
        assert_eq!(pcm, &stereo_to_pcm16(&buffer)[..]);
        assert_eq!(
            compute_pcm_hash(&result.wav_data).as_deref(),
            Some(result.pcm_hash.as_str())
        );
    }

    #[test]
    fn test_extract_rejects_garbage() {
        assert!(extract_pcm_data(b"not a wav").is_none());
        assert!(extract_pcm_data(&[0u8; 100]).is_none());
    }
}
