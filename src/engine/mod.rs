//! Online mode-selection engine
//!
//! Scores a fixed set of modes against turn-specific token weights using a
//! learned association table, selects the top mode deterministically, and
//! adjusts the associations from scalar reward feedback:
//!
//! - `score(m) = sum_t beta[m][t] * w(t)` over the supplied tokens
//! - feedback: `beta[m][t] += learning_rate * reward * w(t)`, hard-clamped
//!
//! Fully synchronous and in-memory; each engine instance owns its table
//! exclusively. Hosts sharing one instance across callers must serialize
//! access themselves.

pub mod diagnostics;
pub mod feedback;
pub mod score;
pub mod seed;
pub mod table;

pub use diagnostics::Diagnostic;
pub use table::{AssociationTable, Materialization};

use std::fmt::{Debug, Display};
use std::hash::Hash;

use anyhow::{bail, Result};
use tracing::warn;

/// Identifier usable as a mode or token key. Blanket-implemented; strings,
/// enums, and integers all qualify.
pub trait Ident: Clone + Eq + Hash + Debug + Display {}
impl<I: Clone + Eq + Hash + Debug + Display> Ident for I {}

/// Tunable parameters for the feedback engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineParams {
    /// Step size for feedback updates.
    pub learning_rate: f64,
    /// Lower saturation bound for association weights.
    pub clamp_min: f64,
    /// Upper saturation bound for association weights.
    pub clamp_max: f64,
    /// Mirror diagnostics to `tracing::warn!` as they are emitted.
    pub verbose: bool,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            clamp_min: -2.0,
            clamp_max: 2.0,
            verbose: false,
        }
    }
}

/// Feedback-tuned mode selector.
///
/// Owns an [`AssociationTable`] and the update parameters. Selection reads
/// the table; [`FeedbackEngine::apply`] is the only mutator after
/// construction and seeding.
#[derive(Debug, Clone)]
pub struct FeedbackEngine<M: Ident = String, T: Ident = String> {
    table: AssociationTable<M, T>,
    params: EngineParams,
}

impl<M: Ident, T: Ident> FeedbackEngine<M, T> {
    /// Create an engine with the default open materialization policy.
    ///
    /// `tokens` may be empty; unseen tokens will materialize on first
    /// write. Fails when `modes` is empty or the clamp range is inverted.
    pub fn new(modes: Vec<M>, tokens: Vec<T>, params: EngineParams) -> Result<Self> {
        Self::with_policy(modes, tokens, params, Materialization::Open)
    }

    /// Create an engine with an explicit materialization policy.
    pub fn with_policy(
        modes: Vec<M>,
        tokens: Vec<T>,
        params: EngineParams,
        policy: Materialization,
    ) -> Result<Self> {
        if modes.is_empty() {
            bail!("at least one mode is required");
        }
        if params.clamp_min > params.clamp_max {
            bail!(
                "clamp_min {} exceeds clamp_max {}",
                params.clamp_min,
                params.clamp_max
            );
        }
        Ok(Self {
            table: AssociationTable::new(modes, tokens, policy),
            params,
        })
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    pub fn table(&self) -> &AssociationTable<M, T> {
        &self.table
    }

    /// Declared modes in declaration (tie-break) order.
    pub fn modes(&self) -> &[M] {
        self.table.modes()
    }

    /// Record a diagnostic, mirroring it to the log in verbose mode.
    pub(crate) fn note(&self, diags: &mut Vec<Diagnostic>, diag: Diagnostic) {
        if self.params.verbose {
            warn!("{diag}");
        }
        diags.push(diag);
    }
}
