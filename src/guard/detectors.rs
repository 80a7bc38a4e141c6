//! Keyword heuristic detectors for drift in candidate output text.
//!
//! Each detector scans for a small set of markers and returns a score in
//! [0, 1]. The scores feed the guard verdict and double as active token
//! weights for the feedback engine. Marker lists and step sizes are
//! coarse string heuristics, not calibrated probabilities.

/// Markers of therapy-script tone.
const THERAPY_MARKERS: &[&str] = &[
    "as your therapist",
    "let's process your feelings",
    "inner child",
];

/// Markers of assistant-voice takeover.
const TAKEOVER_MARKERS: &[&str] = &[
    "as an ai assistant",
    "as a language model",
    "chatgpt",
];

/// Score therapy-script tone: 0.4 per marker, capped at 1.0.
pub fn therapy_script_score(text: &str) -> f64 {
    marker_score(text, THERAPY_MARKERS, 0.4)
}

/// Score assistant-voice takeover: 0.6 per marker, capped at 1.0.
pub fn assistant_takeover_score(text: &str) -> f64 {
    marker_score(text, TAKEOVER_MARKERS, 0.6)
}

/// Score ignored formatting wishes: when the user asked for a bulleted
/// answer and no list marker appears, flag at a fixed 0.7.
pub fn ignored_wants_score(text: &str, user_wanted_bullets: bool) -> f64 {
    if !user_wanted_bullets {
        return 0.0;
    }
    if text.contains('-') || text.contains("1.") || text.contains('\u{2022}') {
        return 0.0;
    }
    0.7
}

fn marker_score(text: &str, markers: &[&str], step: f64) -> f64 {
    let lowered = text.to_lowercase();
    let mut score = 0.0;
    for marker in markers {
        if lowered.contains(marker) {
            score += step;
        }
    }
    score.min(1.0)
}
