//! Atomic WAV file output.

use std::io::Write;
use std::path::Path;

use crate::error::AudioResult;

/// Writes `bytes` to `path` through a temporary file in the same directory,
/// renamed into place once fully written. A failed write leaves no file
/// behind.
pub fn write_wav_file(path: &Path, bytes: &[u8]) -> AudioResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
