//! Seed / snapshot boundary.
//!
//! Bulk-loads initial association weights from external key-value pairs
//! and exposes a read-only copy of the table for inspection. Seeding
//! writes literal values: neither the learning rate nor the clamp range
//! applies at seed time, so out-of-range seeds stand until the next
//! `apply` call clamps the post-delta value for that pair.

use std::collections::HashMap;

use super::{FeedbackEngine, Ident};
use crate::engine::Diagnostic;

impl<M: Ident, T: Ident> FeedbackEngine<M, T> {
    /// Bulk-load weights from already-split (mode, token) pairs.
    ///
    /// Pairs rejected by the table policy are skipped with a diagnostic.
    pub fn seed_pairs<I>(&mut self, pairs: I) -> Vec<Diagnostic>
    where
        I: IntoIterator<Item = ((M, T), f64)>,
    {
        let mut diags = Vec::new();
        for ((mode, token), value) in pairs {
            if let Some(diag) = self.table.set(&mode, &token, value) {
                self.note(&mut diags, diag);
            }
        }
        diags
    }

    /// Deep, non-aliased copy of the current table, for logging,
    /// comparison, or serialization by the caller.
    pub fn snapshot(&self) -> HashMap<M, HashMap<T, f64>> {
        self.table.snapshot()
    }
}

impl FeedbackEngine<String, String> {
    /// Bulk-load weights from `"mode|token"` keyed pairs, the external
    /// seed format. Keys are split on the first `|`; a key without a
    /// separator is skipped with a diagnostic.
    pub fn seed<'a, I>(&mut self, pairs: I) -> Vec<Diagnostic>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut diags = Vec::new();
        for (key, value) in pairs {
            let Some((mode, token)) = key.split_once('|') else {
                self.note(
                    &mut diags,
                    Diagnostic::MalformedSeedKey {
                        key: key.to_string(),
                    },
                );
                continue;
            };
            if let Some(diag) = self.table.set(&mode.to_string(), &token.to_string(), value) {
                self.note(&mut diags, diag);
            }
        }
        diags
    }
}
