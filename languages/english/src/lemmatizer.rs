/// A stem must stay longer than this after stripping
const MIN_STEM_LEN: usize = 2;

struct SuffixRule {
    suffix: &'static str,
    replacement: &'static str,
}

/// Tried in order; the first usable rule wins
const RULES: &[SuffixRule] = &[
    SuffixRule { suffix: "ies", replacement: "y" },
    SuffixRule { suffix: "es", replacement: "e" },
    SuffixRule { suffix: "s", replacement: "" },
    SuffixRule { suffix: "ed", replacement: "" },
    SuffixRule { suffix: "ing", replacement: "" },
];

/// Suffix-stripping base form heuristic.
///
/// Not real morphology: "running" becomes "runn" and "boxes" becomes
/// "boxe". Stored words are keyed by this output, so it must not change.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishLemmatizer;

impl EnglishLemmatizer {
    pub fn new() -> Self {
        Self
    }

    pub fn lemmatize(&self, word: &str) -> String {
        for rule in RULES {
            if let Some(stem) = word.strip_suffix(rule.suffix) {
                if stem.len() > MIN_STEM_LEN {
                    return format!("{stem}{}", rule.replacement);
                }
            }
        }
        word.to_string()
    }
}
