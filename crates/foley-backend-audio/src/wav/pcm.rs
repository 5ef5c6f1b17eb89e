//! Quantization to 16-bit PCM and PCM-level hashing.

use crate::mixer::StereoPair;

/// `round(clamp(x, -1, 1) · 32767)`.
#[inline]
pub fn quantize(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16
}

/// Little-endian 16-bit PCM for one channel.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&quantize(sample).to_le_bytes());
    }
    pcm
}

/// Interleaved little-endian 16-bit PCM for a stereo pair.
pub fn stereo_to_pcm16(pair: &StereoPair) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(pair.len() * 4);
    for (l, r) in pair.left.iter().zip(&pair.right) {
        pcm.extend_from_slice(&quantize(*l).to_le_bytes());
        pcm.extend_from_slice(&quantize(*r).to_le_bytes());
    }
    pcm
}

/// BLAKE3 hex digest of raw PCM bytes.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Finds the `data` chunk of a RIFF/WAVE buffer.
///
/// Returns `None` when the buffer is not a WAVE file or has no complete data
/// chunk.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 12 || &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let size_bytes: [u8; 4] = wav_data[pos + 4..pos + 8].try_into().ok()?;
        let chunk_size = u32::from_le_bytes(size_bytes) as usize;
        let body = pos + 8;

        if chunk_id == b"data" {
            return wav_data.get(body..body.checked_add(chunk_size)?);
        }
        // Chunks are word aligned.
        pos = body + chunk_size + chunk_size % 2;
    }
    None
}

/// Hash of the PCM data inside a WAV buffer.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(pcm_hash)
}
