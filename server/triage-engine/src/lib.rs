//! Log Triage Engine: deterministic, rule-based classification and aggregation.
//!
//! Classifies raw log lines into ERROR / WARNING / CRITICAL / OTHER, attaches a
//! catalog explanation to each, merges sources in order, and summarizes counts,
//! most-frequent descriptions and hourly distribution for a report renderer.
//!
//! No DB, no network; pure computation over one in-memory batch.

pub mod aggregate;
pub mod catalog;
pub mod classify;
pub mod combine;
pub mod config;
pub mod digest;
pub mod engine;
pub mod error;
pub mod extract;
pub mod source;
pub mod summary;
pub mod types;

pub use catalog::{ExplanationCatalog, ExplanationRule};
pub use classify::LineClassifier;
pub use config::{Config, SeverityRule};
pub use engine::Engine;
pub use error::EngineError;
pub use types::{Category, ClassifiedLine, Summary, Triage};
