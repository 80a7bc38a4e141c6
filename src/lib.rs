//! Entrain - online feedback layer for guard-mode selection
//!
//! A small online-learning engine:
//! - Keeps a beta table of mode <-> token association weights
//! - Scores modes with `score(m) = sum_t beta[m][t] * w(t)`
//! - Selects the top mode with a deterministic declaration-order tie-break
//! - Tunes the table from scalar reward feedback, hard-clamped
//!
//! Plus thin collaborators: JSON run configuration, a clap CLI, and the
//! keyword drift detectors that produce token weights for the guard.
//!
//! # Example
//!
//! ```
//! use entrain::{EngineParams, FeedbackEngine};
//! use std::collections::HashMap;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut engine = FeedbackEngine::new(
//!     vec!["soft".to_string(), "direct".to_string()],
//!     vec!["panic".to_string()],
//!     EngineParams::default(),
//! )?;
//!
//! let active = HashMap::from([("panic".to_string(), 1.0)]);
//! let chosen = engine.select(&active);
//! engine.apply(&chosen, &active, 1.0);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod guard;

// Re-export commonly used types for convenience
pub use config::{ParamsConfig, RunConfig};
pub use engine::{AssociationTable, Diagnostic, EngineParams, FeedbackEngine, Materialization};
pub use guard::{GuardReport, GuardVerdict};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get the library info
pub fn info() -> String {
    format!("{NAME} v{VERSION} - feedback-tuned guard mode selection")
}
