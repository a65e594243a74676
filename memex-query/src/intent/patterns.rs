//! Ordered intent pattern sets.
//!
//! Evaluated top to bottom; the first set with any match wins. Patterns run
//! against lowercased, trimmed text.

use std::sync::LazyLock;

use memex_core::models::IntentKind;
use regex::RegexSet;

/// One intent with its patterns and the confidence a match carries.
pub struct IntentRule {
    pub intent: IntentKind,
    pub confidence: f64,
    /// `None` when the set failed to compile; such a rule never matches.
    pub patterns: Option<RegexSet>,
}

impl IntentRule {
    fn new(intent: IntentKind, confidence: f64, patterns: &[&str]) -> Self {
        Self {
            intent,
            confidence,
            patterns: RegexSet::new(patterns).ok(),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.as_ref().is_some_and(|set| set.is_match(text))
    }
}

const HOW_TO: &[&str] = &[
    r"^how (?:do|can|should|would) (?:i|we|you)\b",
    r"\bhow to\b",
    r"\bsteps? (?:to|for)\b",
    r"\b(?:guide|tutorial|walkthrough)\b",
    r"\bbest (?:way|practices?) (?:to|for)\b",
    r"\bwhat(?:'s| is) the (?:best|right|proper) way\b",
    r"\bexamples? of\b",
];

const DEBUG: &[&str] = &[
    r"\berrors?\b",
    r"\bbugs?\b",
    r"\bfail(?:s|ed|ing|ure)?\b",
    r"\bcrash(?:es|ed|ing)?\b",
    r"\bbroken\b",
    r"\bnot working\b",
    r"\bexceptions?\b",
    r"\bdebug(?:ging)?\b",
    r"\bfix(?:es|ed|ing)?\b",
    r"\bwhy (?:is|does|did|am|are)\b",
    r"\bstack ?trace\b",
    r"\bpanic(?:s|ked|king)?\b",
    r"\btroubleshoot(?:ing)?\b",
];

const LOOKUP: &[&str] = &[
    r"^what (?:is|are|was|does)\b",
    r"^(?:find|show|list|get|lookup|look up|search)\b",
    r"\bwhere (?:is|are|do|does)\b",
    r"\bdefinition of\b",
    r"\bwhich (?:file|function|tool|module|package|command)\b",
    r"\bdocs? for\b",
];

const COMPARE: &[&str] = &[
    r"\bvs\.?\b",
    r"\bversus\b",
    r"\bcompar(?:e|ed|es|ing|ison)\b",
    r"\bdifferences? between\b",
    r"\bbetter than\b",
    r"\bpros and cons\b",
    r"\btrade-?offs?\b",
    r"\b(?:instead of|alternatives? to)\b",
];

const CONFIGURE: &[&str] = &[
    r"\bconfigur(?:e|ed|es|ing|ation)\b",
    r"\bset ?up\b",
    r"\binstall(?:ing|ation|ed)?\b",
    r"\b(?:enable|disable)\b",
    r"\bsettings?\b",
    r"\benv(?:ironment)? var(?:iable)?s?\b",
    r"\bconfig\b",
];

/// Priority-ordered rules: how_to, debug, lookup, compare, configure.
pub static INTENT_RULES: LazyLock<[IntentRule; 5]> = LazyLock::new(|| {
    [
        IntentRule::new(IntentKind::HowTo, 0.85, HOW_TO),
        IntentRule::new(IntentKind::Debug, 0.85, DEBUG),
        IntentRule::new(IntentKind::Lookup, 0.8, LOOKUP),
        IntentRule::new(IntentKind::Compare, 0.8, COMPARE),
        IntentRule::new(IntentKind::Configure, 0.8, CONFIGURE),
    ]
});
