//! Per-category aggregation: description frequency ranking + hour-of-day histogram.

use std::collections::HashMap;

use crate::config::Config;
use crate::extract;
use crate::types::{ClassifiedLine, FrequencyRanking, HourHistogram, RankedDescription};

/// Computes rankings and histograms for one category bucket.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyAggregator<'a> {
  config: &'a Config,
}

impl<'a> FrequencyAggregator<'a> {
  pub fn new(config: &'a Config) -> Self {
    Self { config }
  }

  /// Description used for ranking; the unknown sentinel for short lines.
  pub fn description_of(&self, line: &str) -> String {
    extract::description(line, self.config.description_offset)
      .unwrap_or_else(|| self.config.unknown_label.clone())
  }

  /// Hour label used for the histogram; the unknown sentinel for malformed lines.
  pub fn hour_of(&self, line: &str) -> String {
    extract::hour(line, self.config.hour_token_index)
      .unwrap_or_else(|| self.config.unknown_label.clone())
  }

  pub fn aggregate(&self, bucket: &[ClassifiedLine]) -> (FrequencyRanking, HourHistogram) {
    let ranking = rank(
      bucket.iter().map(|l| self.description_of(&l.original)),
      self.config.top_n,
    );
    let histogram = histogram(bucket.iter().map(|l| self.hour_of(&l.original)));
    (ranking, histogram)
  }
}

/// Top `top_n` labels by count, descending. Ties keep first-seen order.
pub fn rank<I>(labels: I, top_n: usize) -> FrequencyRanking
where
  I: IntoIterator<Item = String>,
{
  // Vec keeps first-seen order; the map only indexes into it.
  let mut entries: Vec<RankedDescription> = Vec::new();
  let mut index: HashMap<String, usize> = HashMap::new();

  for label in labels {
    match index.get(&label) {
      Some(&i) => entries[i].count += 1,
      None => {
        index.insert(label.clone(), entries.len());
        entries.push(RankedDescription {
          description: label,
          count: 1,
        });
      }
    }
  }

  // Stable sort: equal counts stay in first-seen order.
  entries.sort_by(|a, b| b.count.cmp(&a.count));
  entries.truncate(top_n);
  entries
}

/// Count occurrences per label.
pub fn histogram<I>(labels: I) -> HourHistogram
where
  I: IntoIterator<Item = String>,
{
  let mut out = HourHistogram::new();
  for label in labels {
    *out.entry(label).or_insert(0) += 1;
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Category;

  fn bucket(lines: &[&str]) -> Vec<ClassifiedLine> {
    lines
      .iter()
      .map(|l| ClassifiedLine {
        original: l.to_string(),
        category: Category::Error,
        explanation: String::new(),
      })
      .collect()
  }

  fn labels(counts: &[(&str, usize)]) -> Vec<String> {
    counts
      .iter()
      .flat_map(|(label, n)| std::iter::repeat(label.to_string()).take(*n))
      .collect()
  }

  #[test]
  fn ranking_keeps_top_five_with_first_seen_tie_break() {
    let input = labels(&[("d1", 5), ("d2", 5), ("d3", 4), ("d4", 3), ("d5", 2), ("d6", 1)]);
    let ranking = rank(input, 5);
    let names: Vec<_> = ranking.iter().map(|r| r.description.as_str()).collect();
    assert_eq!(names, vec!["d1", "d2", "d3", "d4", "d5"]);
    assert_eq!(ranking[0].count, 5);
    assert_eq!(ranking[1].count, 5);
    assert!(!names.contains(&"d6"));
  }

  #[test]
  fn tie_break_uses_first_occurrence_not_last() {
    // b is seen first, a reaches the same count later.
    let input: Vec<String> = ["b", "a", "a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let ranking = rank(input, 5);
    let names: Vec<_> = ranking.iter().map(|r| r.description.as_str()).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
  }

  #[test]
  fn higher_count_beats_earlier_first_seen() {
    let input: Vec<String> = ["x", "y", "y"].iter().map(|s| s.to_string()).collect();
    let ranking = rank(input, 5);
    assert_eq!(ranking[0].description, "y");
    assert_eq!(ranking[0].count, 2);
  }

  #[test]
  fn ranking_of_empty_input_is_empty() {
    assert!(rank(Vec::<String>::new(), 5).is_empty());
    assert!(histogram(Vec::<String>::new()).is_empty());
  }

  #[test]
  fn aggregate_groups_by_description_and_hour() {
    let config = Config::default();
    let lines = bucket(&[
      "2024-08-10 10:01:00 ERROR Database connection failed",
      "2024-08-10 10:45:00 ERROR Database connection failed",
      "2024-08-10 11:02:00 ERROR Application crash",
    ]);
    let (ranking, hours) = FrequencyAggregator::new(&config).aggregate(&lines);

    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].description, "Database connection failed");
    assert_eq!(ranking[0].count, 2);
    assert_eq!(ranking[1].description, "Application crash");
    assert_eq!(hours.get("10"), Some(&2));
    assert_eq!(hours.get("11"), Some(&1));
  }

  #[test]
  fn malformed_lines_land_in_unknown() {
    let config = Config::default();
    let lines = bucket(&["justoneword ERROR", "2024-08-10 09:00:00 ERROR Disk space low"]);
    let (ranking, hours) = FrequencyAggregator::new(&config).aggregate(&lines);

    assert_eq!(ranking[0].description, "unknown");
    assert_eq!(hours.get("unknown"), Some(&1));
    assert_eq!(hours.get("09"), Some(&1));
  }

  #[test]
  fn custom_top_n_limits_ranking() {
    let config = Config {
      top_n: 2,
      ..Config::default()
    };
    let lines = bucket(&[
      "d t ERROR a",
      "d t ERROR b",
      "d t ERROR c",
    ]);
    let (ranking, _) = FrequencyAggregator::new(&config).aggregate(&lines);
    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].description, "a");
  }
}
