//! Association table - the learned mode <-> token weight map.
//!
//! Owns the beta values and the materialization policy. Created
//! zero-filled for every declared (mode, token) pair; mutated afterwards
//! only through seeding and feedback.

use std::collections::HashMap;

use super::diagnostics::Diagnostic;
use super::Ident;

/// Materialization policy for token entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Materialization {
    /// Only declared (mode, token) pairs may exist; writes naming
    /// anything else are rejected with a diagnostic.
    Strict,
    /// Previously unseen tokens materialize lazily on first write.
    #[default]
    Open,
}

/// Mapping from (mode, token) to learned association weight.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationTable<M: Ident, T: Ident> {
    modes: Vec<M>,
    tokens: Vec<T>,
    policy: Materialization,
    beta: HashMap<M, HashMap<T, f64>>,
}

impl<M: Ident, T: Ident> AssociationTable<M, T> {
    /// Create the table with a zero-weight entry for every declared pair.
    pub fn new(modes: Vec<M>, tokens: Vec<T>, policy: Materialization) -> Self {
        let mut beta = HashMap::with_capacity(modes.len());
        for mode in &modes {
            let row: HashMap<T, f64> = tokens.iter().cloned().map(|t| (t, 0.0)).collect();
            beta.insert(mode.clone(), row);
        }
        Self {
            modes,
            tokens,
            policy,
            beta,
        }
    }

    /// Declared modes, in declaration order. This order is the tie-break
    /// order for selection.
    pub fn modes(&self) -> &[M] {
        &self.modes
    }

    pub fn policy(&self) -> Materialization {
        self.policy
    }

    /// Stored weight, or `0.0` when the pair has never been written.
    pub fn get(&self, mode: &M, token: &T) -> f64 {
        self.beta
            .get(mode)
            .and_then(|row| row.get(token))
            .copied()
            .unwrap_or(0.0)
    }

    /// Whether the token is associated with at least one mode.
    pub(crate) fn knows_token(&self, token: &T) -> bool {
        self.beta.values().any(|row| row.contains_key(token))
    }

    fn is_declared_mode(&self, mode: &M) -> bool {
        self.modes.iter().any(|m| m == mode)
    }

    fn is_declared_token(&self, token: &T) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Direct write, used by seeding and feedback.
    ///
    /// Unknown modes are rejected under either policy; unknown tokens are
    /// rejected under `Strict` and materialized under `Open`. A rejection
    /// leaves the table untouched and returns the diagnostic.
    pub fn set(&mut self, mode: &M, token: &T, weight: f64) -> Option<Diagnostic> {
        if !self.is_declared_mode(mode) {
            return Some(Diagnostic::UnknownMode {
                mode: mode.to_string(),
            });
        }
        if self.policy == Materialization::Strict && !self.is_declared_token(token) {
            return Some(Diagnostic::UnknownToken {
                token: token.to_string(),
            });
        }
        self.beta
            .entry(mode.clone())
            .or_default()
            .insert(token.clone(), weight);
        None
    }

    /// Deep, non-aliased copy of the current weights.
    pub fn snapshot(&self) -> HashMap<M, HashMap<T, f64>> {
        self.beta.clone()
    }
}
