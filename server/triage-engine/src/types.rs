//! Core types for the triage engine (classification models + JSON output contract).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Category enum
// ---------------------------------------------------------------------------

/// Severity category assigned to every log line. Each line maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
  Error,
  Warning,
  Critical,
  Other,
}

impl Category {
  /// All categories, in report order.
  pub const ALL: [Category; 4] = [
    Category::Error,
    Category::Warning,
    Category::Critical,
    Category::Other,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Error => "ERROR",
      Self::Warning => "WARNING",
      Self::Critical => "CRITICAL",
      Self::Other => "OTHER",
    }
  }
}

// ---------------------------------------------------------------------------
// Per-line classification
// ---------------------------------------------------------------------------

/// One input line with its category and explanation. Never mutated after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedLine {
  pub original: String,
  pub category: Category,
  pub explanation: String,
}

/// One value per category. Used for buckets, counts, rankings and histograms alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PerCategory<T> {
  pub error: T,
  pub warning: T,
  pub critical: T,
  pub other: T,
}

impl<T> PerCategory<T> {
  pub fn get(&self, category: Category) -> &T {
    match category {
      Category::Error => &self.error,
      Category::Warning => &self.warning,
      Category::Critical => &self.critical,
      Category::Other => &self.other,
    }
  }

  pub fn get_mut(&mut self, category: Category) -> &mut T {
    match category {
      Category::Error => &mut self.error,
      Category::Warning => &mut self.warning,
      Category::Critical => &mut self.critical,
      Category::Other => &mut self.other,
    }
  }

  /// Build a value for every category, in `Category::ALL` order.
  pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
    Self {
      error: f(Category::Error),
      warning: f(Category::Warning),
      critical: f(Category::Critical),
      other: f(Category::Other),
    }
  }

  pub fn map<U>(&self, mut f: impl FnMut(Category, &T) -> U) -> PerCategory<U> {
    PerCategory::from_fn(|c| f(c, self.get(c)))
  }
}

/// Classified lines of one source (or of several merged sources), bucketed by category.
///
/// Bucket order is input order; across merged sources, source-append order.
pub type Triage = PerCategory<Vec<ClassifiedLine>>;

impl Triage {
  pub fn push(&mut self, line: ClassifiedLine) {
    self.get_mut(line.category).push(line);
  }

  /// Total number of classified lines across all buckets.
  pub fn total(&self) -> usize {
    Category::ALL.iter().map(|&c| self.get(c).len()).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.total() == 0
  }
}

// ---------------------------------------------------------------------------
// Aggregation outputs
// ---------------------------------------------------------------------------

/// One entry of a frequency ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedDescription {
  pub description: String,
  pub count: u64,
}

/// Top-N descriptions, count descending, first-seen tie-break.
pub type FrequencyRanking = Vec<RankedDescription>;

/// Hour label ("00".."23" or the unknown sentinel) -> count. Ordered for stable output.
pub type HourHistogram = BTreeMap<String, u64>;

// ---------------------------------------------------------------------------
// Output types (JSON contract: what we hand to the renderer)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
  /// Always equals the sum of `counts`.
  pub total: u64,
  pub counts: PerCategory<u64>,
  pub top_descriptions: PerCategory<FrequencyRanking>,
  pub hourly: PerCategory<HourHistogram>,
  /// One-sentence audit objective derived from the counts.
  pub objective: String,
  pub findings: Vec<String>,
  /// Stable digest of the merged classification (timestamp-independent).
  pub digest: String,
  pub generated_at: String,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for sources the binary could not read.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
