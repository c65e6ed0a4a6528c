//! Engine configuration with sane defaults.
//!
//! Priority: environment variables > TOML file > defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::ExplanationCatalog;
use crate::error::EngineError;
use crate::types::Category;

/// Env var naming an optional TOML config file.
pub const CONFIG_FILE_ENV: &str = "TRIAGE_CONFIG_FILE";
/// Env var overriding `top_n`.
pub const TOP_N_ENV: &str = "TRIAGE_TOP_N";

/// A line containing `marker` anywhere is assigned `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityRule {
  pub marker: String,
  pub category: Category,
}

impl SeverityRule {
  pub fn new(marker: impl Into<String>, category: Category) -> Self {
    Self {
      marker: marker.into(),
      category,
    }
  }
}

/// Tunable classification and aggregation settings. Immutable once handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Max entries kept per frequency ranking.
  pub top_n: usize,
  /// Tokens skipped before the description (date, time, marker).
  pub description_offset: usize,
  /// Whitespace token holding the `HH:MM:SS` time.
  pub hour_token_index: usize,
  /// Sentinel used when description or hour cannot be extracted.
  pub unknown_label: String,
  /// Checked in order; first marker present wins. No match means OTHER.
  pub severity_rules: Vec<SeverityRule>,
  pub catalog: ExplanationCatalog,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      top_n: 5,
      description_offset: 3,
      hour_token_index: 1,
      unknown_label: "unknown".to_string(),
      severity_rules: vec![
        SeverityRule::new("ERROR", Category::Error),
        SeverityRule::new("WARNING", Category::Warning),
        SeverityRule::new("CRITICAL", Category::Critical),
      ],
      catalog: ExplanationCatalog::default(),
    }
  }
}

impl Config {
  /// Load from `TRIAGE_CONFIG_FILE` when it points at an existing file, then apply env overrides.
  pub fn load() -> Result<Self, EngineError> {
    Self::load_with(|key| std::env::var(key).ok())
  }

  /// `load` with an injected variable lookup.
  pub fn load_with(get: impl Fn(&str) -> Option<String>) -> Result<Self, EngineError> {
    let mut config = match get(CONFIG_FILE_ENV) {
      Some(path) if Path::new(&path).exists() => {
        tracing::debug!("Loading configuration from: {}", path);
        Self::from_file(&path)?
      }
      Some(path) => {
        tracing::debug!("Config file not found at {}, using defaults", path);
        Self::default()
      }
      None => Self::default(),
    };

    if let Some(raw) = get(TOP_N_ENV) {
      config.top_n = raw
        .trim()
        .parse()
        .map_err(|_| EngineError::validation("top_n", &format!("{} is not a number: {:?}", TOP_N_ENV, raw)))?;
    }

    config.validate()?;
    Ok(config)
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
    Self::from_toml_str(&contents)
  }

  /// Parse a TOML document. Missing keys keep their defaults.
  pub fn from_toml_str(s: &str) -> Result<Self, EngineError> {
    let config: Config = toml::from_str(s)?;
    config.validate()?;
    Ok(config)
  }

  /// Reject settings that would make classification or ranking meaningless.
  pub fn validate(&self) -> Result<(), EngineError> {
    if self.top_n == 0 {
      return Err(EngineError::validation("top_n", "must be at least 1"));
    }
    if self.unknown_label.is_empty() {
      return Err(EngineError::validation("unknown_label", "must not be empty"));
    }
    // An empty marker or keyword matches every line.
    if let Some(i) = self.severity_rules.iter().position(|r| r.marker.is_empty()) {
      return Err(EngineError::validation(
        &format!("severity_rules[{}].marker", i),
        "must not be empty",
      ));
    }
    if let Some(i) = self.catalog.rules.iter().position(|r| r.keyword.is_empty()) {
      return Err(EngineError::validation(
        &format!("catalog.rules[{}].keyword", i),
        "must not be empty",
      ));
    }
    Ok(())
  }
}
