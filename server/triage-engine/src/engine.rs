//! Core engine: classify sources, merge them, build the Summary.

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::classify::LineClassifier;
use crate::combine;
use crate::config::Config;
use crate::error::EngineError;
use crate::summary::SummaryBuilder;
use crate::types::{Summary, Triage};

/// The triage engine. Holds only immutable configuration; every run starts fresh.
#[derive(Debug, Clone)]
pub struct Engine {
  config: Config,
}

impl Engine {
  /// Build an engine from a config. Invalid configs are rejected by `try_new`.
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn try_new(config: Config) -> Result<Self, EngineError> {
    config.validate()?;
    Ok(Self::new(config))
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn classifier(&self) -> LineClassifier<'_> {
    LineClassifier::new(&self.config.severity_rules, &self.config.catalog)
  }

  /// Classify one source's lines into per-category buckets.
  pub fn classify_source<S: AsRef<str>>(&self, lines: &[S]) -> Triage {
    let triage = self.classifier().classify_all(lines);
    tracing::debug!(lines = lines.len(), "source classified");
    triage
  }

  /// Classify every source independently (in parallel), keeping supplied order.
  pub fn classify_sources<S>(&self, sources: &[Vec<S>]) -> Vec<Triage>
  where
    S: AsRef<str> + Sync,
  {
    sources
      .par_iter()
      .map(|lines| self.classify_source(lines))
      .collect()
  }

  /// Classify and merge all sources; the detail view a renderer lists line by line.
  pub fn triage<S>(&self, sources: &[Vec<S>]) -> Triage
  where
    S: AsRef<str> + Sync,
  {
    combine::combine(self.classify_sources(sources))
  }

  /// Full pass: classify, combine, aggregate, stamp with the current time.
  pub fn run<S>(&self, sources: &[Vec<S>]) -> Summary
  where
    S: AsRef<str> + Sync,
  {
    self.summarize(&self.triage(sources))
  }

  /// Same as `run` with an injected generation time.
  pub fn run_at<S>(&self, sources: &[Vec<S>], at: DateTime<Utc>) -> Summary
  where
    S: AsRef<str> + Sync,
  {
    SummaryBuilder::new(&self.config).build_at(&self.triage(sources), at)
  }

  pub fn summarize(&self, merged: &Triage) -> Summary {
    SummaryBuilder::new(&self.config).build(merged)
  }
}

impl Default for Engine {
  fn default() -> Self {
    Self::with_defaults()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Category;
  use chrono::TimeZone;

  fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, 10, 12, 0, 0).unwrap()
  }

  fn sources() -> Vec<Vec<&'static str>> {
    vec![
      vec![
        "2024-08-10 10:01:00 ERROR Database connection failed",
        "2024-08-10 10:05:00 INFO Service started",
      ],
      vec![],
      vec![
        "2024-08-10 11:00:00 WARNING Disk space low",
        "2024-08-10 11:30:00 ERROR Database connection failed",
      ],
    ]
  }

  #[test]
  fn parallel_classification_keeps_source_order() {
    let engine = Engine::with_defaults();
    let merged = engine.triage(&sources());
    assert_eq!(merged.error.len(), 2);
    assert!(merged.error[0].original.contains("10:01:00"));
    assert!(merged.error[1].original.contains("11:30:00"));
  }

  #[test]
  fn classify_sources_returns_one_result_per_source() {
    let engine = Engine::with_defaults();
    let per_source = engine.classify_sources(&sources());
    assert_eq!(per_source.len(), 3);
    assert!(per_source[1].is_empty());
    assert_eq!(per_source[2].get(Category::Warning).len(), 1);
  }

  #[test]
  fn run_counts_every_line_once() {
    let engine = Engine::with_defaults();
    let summary = engine.run_at(&sources(), at());
    assert_eq!(summary.total, 4);
    assert_eq!(summary.counts.error, 2);
    assert_eq!(summary.counts.warning, 1);
    assert_eq!(summary.counts.other, 1);
    assert_eq!(summary.top_descriptions.error[0].count, 2);
    assert_eq!(summary.hourly.error.get("10"), Some(&1));
    assert_eq!(summary.hourly.error.get("11"), Some(&1));
  }

  #[test]
  fn try_new_rejects_invalid_config() {
    let config = Config {
      top_n: 0,
      ..Config::default()
    };
    assert!(Engine::try_new(config).is_err());
  }
}
