//! Ordered keyword -> explanation lookup with a default fallback.
//!
//! Rules are scanned in order and the first keyword found as a substring of the
//! line wins. Keyword sets can overlap (a line may mention both "Server overload"
//! and "High memory usage detected"), so rule order is part of the configuration.

use serde::{Deserialize, Serialize};

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationRule {
  pub keyword: String,
  pub explanation: String,
}

impl ExplanationRule {
  pub fn new(keyword: impl Into<String>, explanation: impl Into<String>) -> Self {
    Self {
      keyword: keyword.into(),
      explanation: explanation.into(),
    }
  }
}

/// Keys missing from a config file keep their built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplanationCatalog {
  pub rules: Vec<ExplanationRule>,
  pub default: String,
}

fn default_explanation() -> String {
  "This logged event requires a detailed review to fully understand its impact.".to_string()
}

impl ExplanationCatalog {
  pub fn new(rules: Vec<ExplanationRule>, default: impl Into<String>) -> Self {
    Self {
      rules,
      default: default.into(),
    }
  }

  /// Explanation of the first rule whose keyword occurs in `line`, else the default.
  pub fn lookup(&self, line: &str) -> &str {
    self
      .rules
      .iter()
      .find(|rule| line.contains(rule.keyword.as_str()))
      .map(|rule| rule.explanation.as_str())
      .unwrap_or(self.default.as_str())
  }
}

impl Default for ExplanationCatalog {
  fn default() -> Self {
    let rules = [
      (
        "Database connection failed",
        "The system could not establish a connection to the database. Check credentials, network reachability and the state of the database service.",
      ),
      (
        "Unable to reach API endpoint",
        "The system could not communicate with the API endpoint. The API server may be down or the network unavailable.",
      ),
      (
        "Failed to back up database",
        "The database backup did not complete. This is usually caused by insufficient disk space or missing permissions.",
      ),
      (
        "High memory usage detected",
        "Memory usage is unusually high, which can lead to slow responses or a system crash. Review running processes.",
      ),
      (
        "Disk space low",
        "Disk space is close to its limit and may prevent the system from performing writes. Free space or grow the volume.",
      ),
      (
        "Slow response time",
        "Responses are slower than expected, possibly due to excessive load or processing bottlenecks.",
      ),
      (
        "System outage detected",
        "A system outage was detected, possibly caused by hardware failures or network problems. Requires immediate attention.",
      ),
      (
        "Security breach detected",
        "A possible security breach was detected, which may indicate unauthorized access or intrusion attempts.",
      ),
      (
        "Application crash",
        "An application stopped unexpectedly, possibly due to code defects or resource conflicts. Review its own logs.",
      ),
      (
        "User session timeout",
        "A user session expired, either after prolonged inactivity or because of a misconfigured timeout.",
      ),
      (
        "Unauthorized access attempt",
        "An unauthorized access attempt was detected. Review security logs and harden access controls.",
      ),
      (
        "Server overload",
        "The server is overloaded. Distribute the workload or increase server capacity.",
      ),
    ];

    Self {
      rules: rules
        .into_iter()
        .map(|(keyword, explanation)| ExplanationRule::new(keyword, explanation))
        .collect(),
      default: default_explanation(),
    }
  }
}
