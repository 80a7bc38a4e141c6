//! Guard decision layer.
//!
//! Screens a candidate reply with the drift detectors, turns the scores
//! into a verdict, and hands the same scores to the feedback engine as
//! active token weights. A producer/consumer collaborator of the engine
//! core, not part of it.

pub mod detectors;

use std::collections::HashMap;
use std::fmt;

/// Drift token emitted by the therapy-script detector.
pub const TOKEN_THERAPY_DRIFT: &str = "therapy-drift";
/// Drift token emitted by the assistant-takeover detector.
pub const TOKEN_ASSISTANT_TAKEOVER: &str = "assistant-takeover";
/// Drift token emitted by the ignored-wants detector.
pub const TOKEN_IGNORED_WANTS: &str = "ignored-wants";

const HARD_BLOCK: f64 = 0.8;
const SOFT_WARN: f64 = 0.4;

/// What to do with the candidate reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardVerdict {
    Allow,
    ScrubAndWarn,
    BlockAndRetry,
}

impl fmt::Display for GuardVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardVerdict::Allow => write!(f, "allow"),
            GuardVerdict::ScrubAndWarn => write!(f, "scrub-and-warn"),
            GuardVerdict::BlockAndRetry => write!(f, "block-and-retry"),
        }
    }
}

/// Outcome of screening one candidate reply.
#[derive(Debug, Clone)]
pub struct GuardReport {
    pub verdict: GuardVerdict,
    pub reason: String,
    /// Detector scores keyed by drift token, reusable as the engine's
    /// active weights for this turn.
    pub token_weights: HashMap<String, f64>,
}

/// Screen a candidate reply.
///
/// `bypass` skips detection entirely and allows the reply; callers use it
/// for pre-vetted output only.
pub fn evaluate(candidate: &str, user_wants_bullets: bool, bypass: bool) -> GuardReport {
    if bypass {
        return GuardReport {
            verdict: GuardVerdict::Allow,
            reason: "guard bypassed by caller".to_string(),
            token_weights: HashMap::new(),
        };
    }

    let therapy = detectors::therapy_script_score(candidate);
    let takeover = detectors::assistant_takeover_score(candidate);
    let ignored = detectors::ignored_wants_score(candidate, user_wants_bullets);

    let token_weights = HashMap::from([
        (TOKEN_THERAPY_DRIFT.to_string(), therapy),
        (TOKEN_ASSISTANT_TAKEOVER.to_string(), takeover),
        (TOKEN_IGNORED_WANTS.to_string(), ignored),
    ]);

    let (verdict, reason) = if therapy >= HARD_BLOCK || takeover >= HARD_BLOCK {
        (
            GuardVerdict::BlockAndRetry,
            "hard violation: therapy or assistant-takeover pattern detected".to_string(),
        )
    } else if therapy >= SOFT_WARN || takeover >= SOFT_WARN || ignored >= SOFT_WARN {
        (
            GuardVerdict::ScrubAndWarn,
            "soft drift detected; scrub or rewrite suggested".to_string(),
        )
    } else {
        (
            GuardVerdict::Allow,
            "no significant drift detected".to_string(),
        )
    };

    GuardReport {
        verdict,
        reason,
        token_weights,
    }
}
