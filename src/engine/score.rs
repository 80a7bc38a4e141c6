//! Scoring and selection.
//!
//! Scoring is a total function over the supplied weights; it cannot fail
//! and never mutates the table. Selection is a deterministic argmax with
//! declaration-order tie-break.

use std::collections::HashMap;

use super::diagnostics::Diagnostic;
use super::{FeedbackEngine, Ident};

impl<M: Ident, T: Ident> FeedbackEngine<M, T> {
    /// Score every declared mode against this turn's active token weights.
    ///
    /// Returns `(mode, score)` pairs in declaration order, alongside any
    /// diagnostics: tokens with weight `<= 0` contribute nothing, and
    /// tokens with no association anywhere in the table are flagged but
    /// never change the numeric result.
    pub fn score(&self, active: &HashMap<T, f64>) -> (Vec<(M, f64)>, Vec<Diagnostic>) {
        let mut diags = Vec::new();
        let mut scores: Vec<(M, f64)> = self
            .table()
            .modes()
            .iter()
            .cloned()
            .map(|m| (m, 0.0))
            .collect();

        for (token, &weight) in active {
            if weight <= 0.0 {
                self.note(
                    &mut diags,
                    Diagnostic::InactiveToken {
                        token: token.to_string(),
                    },
                );
                continue;
            }
            if !self.table().knows_token(token) {
                self.note(
                    &mut diags,
                    Diagnostic::UnassociatedToken {
                        token: token.to_string(),
                    },
                );
                continue;
            }
            for (mode, score) in scores.iter_mut() {
                *score += self.table().get(mode, token) * weight;
            }
        }

        (scores, diags)
    }

    /// Pick the highest-scoring mode.
    ///
    /// Ties go to the earliest declared mode, so an empty or all-zero
    /// `active` map always yields the first mode.
    pub fn select(&self, active: &HashMap<T, f64>) -> M {
        let (scores, _diags) = self.score(active);
        // modes are non-empty by construction
        let (mut best_mode, mut best_score) = scores[0].clone();
        for (mode, score) in scores.into_iter().skip(1) {
            if score > best_score {
                best_mode = mode;
                best_score = score;
            }
        }
        best_mode
    }
}
