//! 16-bit PCM WAV encoding and decoding.
//!
//! Encoding writes a bare RIFF header with no timestamps or metadata chunks,
//! so equal samples always give equal bytes. The BLAKE3 hash of the PCM data
//! identifies a render independently of the container.

mod decode;
mod file;
mod format;
mod pcm;
mod result;
mod writer;


pub use decode::{decode_wav, DecodedAudio};
pub use file::write_wav_file;
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data, pcm_hash, quantize, samples_to_pcm16, stereo_to_pcm16};
pub use result::WavResult;
pub use writer::{write_wav, write_wav_to_vec};
