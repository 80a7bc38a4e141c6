//! Structured diagnostics for the feedback engine.
//!
//! The core never prints. Recoverable anomalies are returned as values so
//! callers can log them, collect them, or assert on them in tests. When the
//! engine is constructed with `verbose`, each diagnostic is also mirrored to
//! `tracing::warn!` at the point of emission.

use thiserror::Error;

/// A recoverable anomaly observed during seeding, scoring, or feedback.
///
/// None of these abort the operation that produced them; the affected
/// entry is skipped and everything else proceeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A beta seed key without a `mode|token` separator.
    #[error("bad beta seed key '{key}'; expected 'mode|token'")]
    MalformedSeedKey { key: String },

    /// A write naming a mode outside the declared set. The mode set is
    /// fixed at construction and never grows, under either policy.
    #[error("unknown mode '{mode}'; the mode set is fixed at construction")]
    UnknownMode { mode: String },

    /// A write naming a token outside the declared vocabulary under
    /// strict materialization.
    #[error("unknown token '{token}'; vocabulary is fixed under strict materialization")]
    UnknownToken { token: String },

    /// An active token whose turn weight is zero or negative. It
    /// contributes nothing to any mode's score.
    #[error("token '{token}' has zero weight; ignored")]
    InactiveToken { token: String },

    /// An active token with no association anywhere in the table.
    #[error("token '{token}' has no associations in beta; check configuration")]
    UnassociatedToken { token: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display_names_the_identifier() {
        let diag = Diagnostic::MalformedSeedKey {
            key: "no-separator".to_string(),
        };
        assert!(diag.to_string().contains("no-separator"));

        let diag = Diagnostic::UnknownToken {
            token: "mystery".to_string(),
        };
        assert!(diag.to_string().contains("mystery"));
    }
}
