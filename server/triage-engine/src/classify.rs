//! Per-line classification: ordered severity rules + catalog explanation.

use crate::catalog::ExplanationCatalog;
use crate::config::SeverityRule;
use crate::types::{Category, ClassifiedLine, Triage};

/// Assigns exactly one category and one explanation to each line.
///
/// Rules are evaluated in order and the first marker found anywhere in the line
/// decides the category; a line matching no rule is `Other`. With the default
/// rules a line carrying both `ERROR` and `CRITICAL` is therefore an `Error`.
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier<'a> {
  rules: &'a [SeverityRule],
  catalog: &'a ExplanationCatalog,
}

impl<'a> LineClassifier<'a> {
  pub fn new(rules: &'a [SeverityRule], catalog: &'a ExplanationCatalog) -> Self {
    Self { rules, catalog }
  }

  pub fn category_of(&self, line: &str) -> Category {
    self
      .rules
      .iter()
      .find(|rule| line.contains(rule.marker.as_str()))
      .map(|rule| rule.category)
      .unwrap_or(Category::Other)
  }

  pub fn classify(&self, line: &str) -> ClassifiedLine {
    ClassifiedLine {
      original: line.to_string(),
      category: self.category_of(line),
      explanation: self.catalog.lookup(line).to_string(),
    }
  }

  /// Classify one source, bucketing lines by category in input order.
  pub fn classify_all<I, S>(&self, lines: I) -> Triage
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut triage = Triage::default();
    for line in lines {
      triage.push(self.classify(line.as_ref()));
    }
    triage
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Config;

  fn classify(line: &str) -> ClassifiedLine {
    let config = Config::default();
    LineClassifier::new(&config.severity_rules, &config.catalog).classify(line)
  }

  #[test]
  fn markers_map_to_categories() {
    assert_eq!(classify("x ERROR y").category, Category::Error);
    assert_eq!(classify("x WARNING y").category, Category::Warning);
    assert_eq!(classify("x CRITICAL y").category, Category::Critical);
    assert_eq!(classify("x INFO y").category, Category::Other);
  }

  #[test]
  fn marker_may_appear_anywhere() {
    assert_eq!(classify("ERRORS everywhere").category, Category::Error);
    assert_eq!(classify("tail...CRITICAL").category, Category::Critical);
  }

  #[test]
  fn default_precedence_is_error_warning_critical() {
    assert_eq!(classify("CRITICAL then ERROR").category, Category::Error);
    assert_eq!(classify("CRITICAL then WARNING").category, Category::Warning);
    assert_eq!(classify("WARNING then ERROR").category, Category::Error);
  }

  #[test]
  fn custom_precedence_is_honoured() {
    let config = Config::default();
    let rules = vec![
      SeverityRule::new("CRITICAL", Category::Critical),
      SeverityRule::new("ERROR", Category::Error),
    ];
    let classifier = LineClassifier::new(&rules, &config.catalog);
    assert_eq!(classifier.category_of("CRITICAL then ERROR"), Category::Critical);
    assert_eq!(classifier.category_of("only WARNING"), Category::Other);
  }

  #[test]
  fn markers_are_case_sensitive() {
    assert_eq!(classify("an error occurred").category, Category::Other);
  }

  #[test]
  fn malformed_lines_still_classify() {
    let config = Config::default();
    for raw in ["", "justoneword", "   ", "\u{fffd}\u{fffd}"] {
      let line = classify(raw);
      assert_eq!(line.category, Category::Other);
      assert_eq!(line.explanation, config.catalog.default);
      assert_eq!(line.original, raw);
    }
  }

  #[test]
  fn classify_all_preserves_order_per_bucket() {
    let config = Config::default();
    let classifier = LineClassifier::new(&config.severity_rules, &config.catalog);
    let triage = classifier.classify_all(["a ERROR 1", "b INFO", "c ERROR 2", "d WARNING"]);
    assert_eq!(triage.total(), 4);
    let errors: Vec<_> = triage.error.iter().map(|l| l.original.as_str()).collect();
    assert_eq!(errors, vec!["a ERROR 1", "c ERROR 2"]);
    assert_eq!(triage.warning.len(), 1);
    assert_eq!(triage.other.len(), 1);
  }
}
