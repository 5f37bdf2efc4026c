//! Pattern-driven work-mode classification.
//!
//! Four fixed pattern groups are matched against the listing text and
//! resolved first-match-wins: explicit disqualification outranks hybrid
//! signals, hybrid outranks generic positive signals, and anything else
//! falls through to unknown.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Work-mode classification for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Remote,
    Hybrid,
    Onsite,
    Unknown,
}

/// Named boolean signals raised while classifying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalFlags {
    pub has_positive_remote: bool,
    pub has_hybrid_hints: bool,
    pub has_negative_remote: bool,
    pub has_local_only: bool,
}

/// Classification output. Produced fresh per listing text, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteCheckResult {
    pub is_remote_ok: bool,
    pub mode: WorkMode,
    /// Rough heuristic confidence in [0, 1].
    pub confidence: f64,
    pub reasons: Vec<String>,
    pub flags: SignalFlags,
}

/// Acceptance variants for [`is_remote_ok`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemotePolicy {
    /// Only a firm remote classification passes.
    Strict,
    /// Remote or hybrid both pass.
    Lenient,
}

const POSITIVE_REMOTE: &[&str] = &[
    r"\bremote\b",
    r"work from home",
    r"work-from-home",
    r"fully remote",
    r"100% remote",
    r"work from anywhere",
    r"distributed team",
    r"telecommute",
    r"telecommuting",
    r"home-based",
];

const HYBRID_HINTS: &[&str] = &[
    r"\bhybrid\b",
    r"\b2 days in (the )?office\b",
    r"\b3 days in (the )?office\b",
    r"\b\d+ days in (the )?office\b",
    r"\bon[- ]site\b.*\b(\d|one|two|three)\s+days\b",
];

const NEGATIVE_REMOTE: &[&str] = &[
    r"\bno remote\b",
    r"\bnot remote\b",
    r"\bremote not available\b",
    r"\bremote work (is )?not (available|offered)\b",
    r"\bmust be on[- ]site\b",
    r"\bmust be in[- ]office\b",
    r"\b(on[- ]site|in[- ]office) only\b",
    r"\brelocation required\b",
    r"\blocated in [A-Za-z ]+ (office|campus)\b",
];

const LOCAL_ONLY: &[&str] = &[
    r"\blocal candidates only\b",
    r"\bmust live within\b",
    r"\bwithin \d+\s*(miles|km|kilometers)\b",
];

struct PatternTable {
    positive: Vec<Regex>,
    hybrid: Vec<Regex>,
    negative: Vec<Regex>,
    local_only: Vec<Regex>,
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .expect("static work-mode pattern compiles")
        })
        .collect()
}

fn pattern_table() -> &'static PatternTable {
    static TABLE: OnceLock<PatternTable> = OnceLock::new();
    TABLE.get_or_init(|| PatternTable {
        positive: compile(POSITIVE_REMOTE),
        hybrid: compile(HYBRID_HINTS),
        negative: compile(NEGATIVE_REMOTE),
        local_only: compile(LOCAL_ONLY),
    })
}

fn count_matches(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().filter(|re| re.is_match(text)).count()
}

/// Inspect listing text and guess whether it is remote-friendly.
pub fn classify_remote(text: &str) -> RemoteCheckResult {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let table = pattern_table();

    let positive_count = count_matches(&table.positive, &normalized);
    let hybrid_count = count_matches(&table.hybrid, &normalized);
    let negative_count = count_matches(&table.negative, &normalized);
    let local_count = count_matches(&table.local_only, &normalized);

    let flags = SignalFlags {
        has_positive_remote: positive_count > 0,
        has_hybrid_hints: hybrid_count > 0,
        has_negative_remote: negative_count > 0,
        has_local_only: local_count > 0,
    };

    let mut reasons = Vec::new();

    // Hard negatives win regardless of co-occurring remote language.
    if flags.has_negative_remote || flags.has_local_only {
        if flags.has_negative_remote {
            reasons.push("Explicit language that remote is not available.".to_string());
        }
        if flags.has_local_only {
            reasons.push("Local/relocation-only language detected.".to_string());
        }
        return RemoteCheckResult {
            is_remote_ok: false,
            mode: WorkMode::Onsite,
            confidence: 0.9,
            reasons,
            flags,
        };
    }

    let (mode, is_remote_ok, confidence) = if flags.has_hybrid_hints && flags.has_positive_remote {
        reasons.push("Mentions remote plus in-office days (likely hybrid).".to_string());
        (WorkMode::Hybrid, true, 0.85)
    } else if flags.has_hybrid_hints {
        reasons.push("Hybrid language detected (some in-office expected).".to_string());
        (WorkMode::Hybrid, true, 0.75)
    } else if flags.has_positive_remote {
        reasons.push("Remote-friendly language detected.".to_string());
        let confidence = if positive_count == 1 { 0.8 } else { 0.9 };
        (WorkMode::Remote, true, confidence)
    } else {
        reasons.push("No clear remote/onsite language found; treating as unknown.".to_string());
        (WorkMode::Unknown, false, 0.4)
    };

    RemoteCheckResult {
        is_remote_ok,
        mode,
        confidence,
        reasons,
        flags,
    }
}

/// Boolean convenience wrapper around [`classify_remote`].
pub fn is_remote_ok(text: &str, policy: RemotePolicy) -> bool {
    let result = classify_remote(text);
    match policy {
        RemotePolicy::Strict => result.mode == WorkMode::Remote,
        RemotePolicy::Lenient => matches!(result.mode, WorkMode::Remote | WorkMode::Hybrid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_language_outranks_positive_language() {
        let result = classify_remote("Fully remote team, but you must be on-site twice a month");
        assert_eq!(result.mode, WorkMode::Onsite);
        assert!(!result.is_remote_ok);
        assert_eq!(result.confidence, 0.9);
        assert!(result.flags.has_negative_remote);
        assert!(result
            .reasons
            .iter()
            .any(|reason| reason.contains("not available")));
    }

    #[test]
    fn local_only_language_classifies_onsite() {
        let result = classify_remote("Local candidates only, please");
        assert_eq!(result.mode, WorkMode::Onsite);
        assert!(result.flags.has_local_only);
        assert!(result
            .reasons
            .iter()
            .any(|reason| reason.contains("relocation-only")));
    }

    #[test]
    fn hybrid_plus_remote_language_is_hybrid_085() {
        let result = classify_remote("Remote with a hybrid schedule");
        assert_eq!(result.mode, WorkMode::Hybrid);
        assert!(result.is_remote_ok);
        assert_eq!(result.confidence, 0.85);
    }

    #[test]
    fn hybrid_only_language_is_hybrid_075() {
        let result = classify_remote("Hybrid role, 3 days in the office");
        assert_eq!(result.mode, WorkMode::Hybrid);
        assert_eq!(result.confidence, 0.75);
    }

    #[test]
    fn single_positive_signal_scores_08() {
        let result = classify_remote("This is a remote role");
        assert_eq!(result.mode, WorkMode::Remote);
        assert_eq!(result.confidence, 0.8);
    }

    #[test]
    fn multiple_positive_signals_score_09() {
        let result = classify_remote("Fully remote, work from anywhere");
        assert_eq!(result.mode, WorkMode::Remote);
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn no_signal_is_unknown_04() {
        let result = classify_remote("Exciting marketing opportunity");
        assert_eq!(result.mode, WorkMode::Unknown);
        assert!(!result.is_remote_ok);
        assert_eq!(result.confidence, 0.4);
        assert_eq!(result.flags, SignalFlags::default());
    }

    #[test]
    fn whitespace_is_collapsed_before_matching() {
        let result = classify_remote("must   be\n on-site");
        assert_eq!(result.mode, WorkMode::Onsite);
    }

    #[test]
    fn strict_policy_rejects_hybrid() {
        let text = "Hybrid schedule, 2 days in the office";
        assert!(!is_remote_ok(text, RemotePolicy::Strict));
        assert!(is_remote_ok(text, RemotePolicy::Lenient));
    }

    #[test]
    fn strict_and_lenient_accept_plain_remote() {
        let text = "100% remote, work from anywhere";
        assert!(is_remote_ok(text, RemotePolicy::Strict));
        assert!(is_remote_ok(text, RemotePolicy::Lenient));
    }
}
