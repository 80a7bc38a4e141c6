//! Reward feedback - the sole mutator of the association table after
//! construction and seeding.

use std::collections::HashMap;

use super::{FeedbackEngine, Ident};
use crate::engine::Diagnostic;

impl<M: Ident, T: Ident> FeedbackEngine<M, T> {
    /// Fold a scalar reward into the associations engraved this turn.
    ///
    /// A reward of exactly `0.0` leaves the table untouched. Otherwise
    /// each `(token, weight)` pair moves `beta[mode][token]` by
    /// `learning_rate * reward * weight`, saturating at the clamp bounds.
    /// Pairs rejected by the table policy are skipped with a diagnostic;
    /// the rest still apply.
    pub fn apply(&mut self, mode: &M, engraved: &HashMap<T, f64>, reward: f64) -> Vec<Diagnostic> {
        let mut diags = Vec::new();
        if reward == 0.0 {
            return diags;
        }

        let lr = self.params.learning_rate;
        let (lo, hi) = (self.params.clamp_min, self.params.clamp_max);

        for (token, &weight) in engraved {
            let delta = lr * reward * weight;
            let next = (self.table.get(mode, token) + delta).clamp(lo, hi);
            if let Some(diag) = self.table.set(mode, token, next) {
                self.note(&mut diags, diag);
            }
        }
        diags
    }
}
