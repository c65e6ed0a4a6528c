//! Assemble the report-ready Summary from a merged classification.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::aggregate::FrequencyAggregator;
use crate::config::Config;
use crate::digest;
use crate::types::{PerCategory, Summary, Triage};

#[derive(Debug, Clone, Copy)]
pub struct SummaryBuilder<'a> {
  config: &'a Config,
}

impl<'a> SummaryBuilder<'a> {
  pub fn new(config: &'a Config) -> Self {
    Self { config }
  }

  /// Build a Summary stamped with the current time.
  pub fn build(&self, merged: &Triage) -> Summary {
    self.build_at(merged, Utc::now())
  }

  /// Build a Summary stamped with `at`. Same input and instant give an identical Summary.
  pub fn build_at(&self, merged: &Triage, at: DateTime<Utc>) -> Summary {
    let aggregator = FrequencyAggregator::new(self.config);

    let counts = merged.map(|_, bucket| bucket.len() as u64);
    let aggregates = merged.map(|_, bucket| aggregator.aggregate(bucket));
    let top_descriptions = aggregates.map(|_, (ranking, _)| ranking.clone());
    let hourly = aggregates.map(|_, (_, hours)| hours.clone());

    let total = counts.error + counts.warning + counts.critical + counts.other;

    tracing::debug!(
      total,
      error = counts.error,
      warning = counts.warning,
      critical = counts.critical,
      other = counts.other,
      "summary built"
    );

    Summary {
      total,
      objective: objective(&counts),
      findings: findings(&counts),
      digest: digest::compute(merged),
      counts,
      top_descriptions,
      hourly,
      generated_at: at.to_rfc3339_opts(SecondsFormat::Secs, true),
    }
  }
}

/// One-sentence audit goal. Critical events take priority, then errors, then warnings.
pub fn objective(counts: &PerCategory<u64>) -> String {
  if counts.critical > 0 {
    format!(
      "Investigate {} critical events that could compromise system stability.",
      counts.critical
    )
  } else if counts.error > 0 {
    format!(
      "Analyze the {} recorded errors to improve system reliability.",
      counts.error
    )
  } else if counts.warning > 0 {
    format!(
      "Review the {} warnings to prevent future errors.",
      counts.warning
    )
  } else {
    "Confirm that no critical problems affect system performance.".to_string()
  }
}

/// Conclusion statements, most severe first.
pub fn findings(counts: &PerCategory<u64>) -> Vec<String> {
  let mut out = Vec::new();
  if counts.critical > 0 {
    out.push(format!(
      "{} critical events require immediate attention to keep the system stable.",
      counts.critical
    ));
  }
  if counts.error > 0 {
    out.push(format!(
      "{} errors were recorded; addressing them will improve reliability.",
      counts.error
    ));
  }
  if counts.warning > 0 {
    out.push(format!(
      "{} warnings were found; review them to prevent future problems.",
      counts.warning
    ));
  }
  if out.is_empty() {
    out.push("No significant problems were found in the analyzed logs.".to_string());
  }
  out
}
