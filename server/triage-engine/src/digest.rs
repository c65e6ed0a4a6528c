//! Stable digest of a merged classification, for deduplicating reports.

use crate::types::{Category, Triage};

/// Hash every classified line as `category|line`, bucket by bucket, in report order.
///
/// Uses blake3 for a fast, deterministic hash; the generation timestamp is not an input.
pub fn compute(triage: &Triage) -> String {
  let mut hasher = blake3::Hasher::new();
  for category in Category::ALL {
    let bucket = triage.get(category);
    hasher.update(category.as_str().as_bytes());
    hasher.update(b":");
    hasher.update(&(bucket.len() as u64).to_le_bytes());
    for line in bucket {
      hasher.update(b"|");
      hasher.update(&(line.original.len() as u64).to_le_bytes());
      hasher.update(line.original.as_bytes());
    }
  }

  let hash = hasher.finalize();
  // First 16 bytes (32 hex chars) is plenty for a report id.
  let hex = hash.to_hex();
  hex[..32].to_string()
}
