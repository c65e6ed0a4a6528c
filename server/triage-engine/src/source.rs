//! Input boundary: turn raw bytes / files into decoded lines for the engine.

use std::path::Path;

use crate::error::EngineError;
use crate::types::ErrorOutput;

/// Decode bytes as UTF-8, falling back to Latin-1 (every byte maps to U+0000..U+00FF).
pub fn decode(bytes: &[u8]) -> String {
  match std::str::from_utf8(bytes) {
    Ok(s) => s.to_string(),
    Err(_) => {
      tracing::warn!(len = bytes.len(), "input is not valid UTF-8, decoding as Latin-1");
      bytes.iter().map(|&b| b as char).collect()
    }
  }
}

/// Split decoded text into lines; `\r\n` and `\n` both end a line, no trailing empty line.
pub fn split_lines(text: &str) -> Vec<String> {
  text.lines().map(str::to_string).collect()
}

pub fn lines_from_bytes(bytes: &[u8]) -> Vec<String> {
  split_lines(&decode(bytes))
}

/// Read one source file into lines.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<String>, EngineError> {
  let path = path.as_ref();
  let bytes = std::fs::read(path).map_err(|e| EngineError::io(path, e))?;
  let lines = lines_from_bytes(&bytes);
  tracing::debug!(path = %path.display(), lines = lines.len(), "source read");
  Ok(lines)
}

/// Lines of every requested file, one source per path, plus one error per unreadable file.
#[derive(Debug, Default)]
pub struct SourceBatch {
  pub sources: Vec<Vec<String>>,
  pub errors: Vec<ErrorOutput>,
}

/// Read each path as one source. Unreadable files are reported and count as empty.
pub fn read_files<P: AsRef<Path>>(paths: &[P]) -> SourceBatch {
  let mut batch = SourceBatch::default();
  for path in paths {
    let path = path.as_ref();
    match read_file(path) {
      Ok(lines) => batch.sources.push(lines),
      Err(e) => {
        tracing::warn!("skipping unreadable source {}: {}", path.display(), e);
        batch
          .errors
          .push(ErrorOutput::new(e.to_string()).with_field(path.display().to_string()));
        batch.sources.push(Vec::new());
      }
    }
  }
  batch
}
