//! Item code repair.
//!
//! Table columns bleed into each other during text extraction, so the item
//! code column often arrives with the start of the description fused onto
//! its unit suffix (`TCD029-20PKT/BAGTRENDCELL`) or with the suffix letters
//! interleaved with other text (`D221-THAI-25KG/PBUALGUT`). The repairer
//! looks at the text after the first `/` and recovers the canonical unit
//! suffix with progressively looser matching:
//!
//! 1. exact prefix (case-insensitive)
//! 2. anagram of the leading characters
//! 3. in-order subsequence, suffixes of two or more characters only
//! 4. truncation to a few leading alphanumerics
//!
//! Each strategy is tried against every known suffix, longest first, before
//! the next strategy is considered. A clean code therefore always matches
//! exactly and is never rewritten by a looser rule, which makes repair
//! idempotent.

use lazy_static::lazy_static;
use std::cmp::Reverse;
use std::collections::HashSet;
use tracing::trace;

use crate::models::config::{ExtractionConfig, DEFAULT_UNIT_SUFFIXES};

const DELIMITER: char = '/';
const DEFAULT_FALLBACK_LEN: usize = 5;

lazy_static! {
    static ref DEFAULT_REPAIRER: SuffixRepairer = SuffixRepairer::new();
}

/// Repair an item code with the default unit suffixes.
pub fn repair_item_code(raw: &str) -> String {
    DEFAULT_REPAIRER.repair(raw)
}

/// How a unit suffix was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    Exact,
    Anagram,
    Subsequence,
}

impl MatchStrategy {
    const ORDERED: [MatchStrategy; 3] = [
        MatchStrategy::Exact,
        MatchStrategy::Anagram,
        MatchStrategy::Subsequence,
    ];

    /// `suffix` and `rest` are both upper-cased.
    fn matches(self, suffix: &[char], rest: &[char]) -> bool {
        match self {
            MatchStrategy::Exact => rest.starts_with(suffix),
            MatchStrategy::Anagram => {
                if rest.len() < suffix.len() {
                    return false;
                }
                let mut head = rest[..suffix.len()].to_vec();
                let mut wanted = suffix.to_vec();
                head.sort_unstable();
                wanted.sort_unstable();
                head == wanted
            }
            MatchStrategy::Subsequence => {
                if suffix.len() < 2 {
                    return false;
                }
                let mut remaining = rest.iter();
                suffix.iter().all(|c| remaining.any(|r| r == c))
            }
        }
    }
}

/// Recovers the canonical unit suffix of a slash-delimited item code.
#[derive(Debug, Clone)]
pub struct SuffixRepairer {
    /// Upper-cased, longest first, ties in priority order.
    suffixes: Vec<Vec<char>>,
    fallback_len: usize,
}

impl SuffixRepairer {
    /// Create a repairer with the default unit suffixes.
    pub fn new() -> Self {
        Self::with_suffixes(DEFAULT_UNIT_SUFFIXES.iter().copied())
    }

    /// Create a repairer from suffixes given in priority order.
    pub fn with_suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut ordered: Vec<Vec<char>> = suffixes
            .into_iter()
            .map(|s| s.as_ref().trim().to_ascii_uppercase())
            .filter(|s| !s.is_empty() && !s.contains(DELIMITER))
            .filter(|s| seen.insert(s.clone()))
            .map(|s| s.chars().collect())
            .collect();

        // Stable, so equal lengths keep their priority order.
        ordered.sort_by_key(|s| Reverse(s.len()));

        Self {
            suffixes: ordered,
            fallback_len: DEFAULT_FALLBACK_LEN,
        }
    }

    /// Build a repairer from the extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::with_suffixes(&config.unit_suffixes).with_fallback_len(config.fallback_suffix_len)
    }

    /// Set how many characters truncation keeps when no suffix is recognized.
    pub fn with_fallback_len(mut self, len: usize) -> Self {
        self.fallback_len = len;
        self
    }

    /// Known suffixes in matching order.
    pub fn suffixes(&self) -> Vec<String> {
        self.suffixes.iter().map(|s| s.iter().collect()).collect()
    }

    /// Repair a raw item code token. Total: never fails, never panics.
    pub fn repair(&self, raw: &str) -> String {
        let Some((prefix, rest)) = raw.split_once(DELIMITER) else {
            return raw.to_string();
        };

        let rest_upper: Vec<char> = rest.chars().map(|c| c.to_ascii_uppercase()).collect();

        if let Some((suffix, strategy)) = self.match_suffix(&rest_upper) {
            let suffix: String = suffix.iter().collect();
            trace!("Repaired {} via {:?} -> {}/{}", raw, strategy, prefix, suffix);
            return format!("{}{}{}", prefix, DELIMITER, suffix);
        }

        let kept: String = rest
            .chars()
            .take_while(|c| c.is_alphanumeric())
            .take(self.fallback_len)
            .collect();

        if kept.is_empty() {
            return raw.to_string();
        }

        trace!("No unit suffix in {}, truncated to {}/{}", raw, prefix, kept);
        format!("{}{}{}", prefix, DELIMITER, kept)
    }

    fn match_suffix(&self, rest: &[char]) -> Option<(&[char], MatchStrategy)> {
        for strategy in MatchStrategy::ORDERED {
            let found = self
                .suffixes
                .iter()
                .map(Vec::as_slice)
                .find(|s| strategy.matches(s, rest));
            if let Some(suffix) = found {
                return Some((suffix, strategy));
            }
        }
        None
    }
}

impl Default for SuffixRepairer {
    fn default() -> Self {
        Self::new()
    }
}
