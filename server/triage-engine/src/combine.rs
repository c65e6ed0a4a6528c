//! Merge per-source classification results.
//!
//! Merging is per-category concatenation in the order sources are supplied, so
//! each source's internal order survives and `combine` is associative.

use crate::types::{Category, Triage};

/// Append every bucket of `other` onto `into`.
pub fn append(into: &mut Triage, mut other: Triage) {
  for category in Category::ALL {
    into.get_mut(category).append(other.get_mut(category));
  }
}

/// Concatenate sources in the order given.
pub fn combine<I>(results: I) -> Triage
where
  I: IntoIterator<Item = Triage>,
{
  let mut merged = Triage::default();
  for result in results {
    append(&mut merged, result);
  }
  merged
}
