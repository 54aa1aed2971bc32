//! Word-pair feed
//!
//! The supplier delivers JSON arrays of `{"en": ..., "cn": ...}` objects. A
//! malformed or empty feed degrades to a built-in fallback bank; the rest of
//! the core never sees an empty pool or a feed error.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// An immutable translation pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    /// The word the player types or studies
    #[serde(rename = "en")]
    pub foreign: String,
    /// The displayed translation
    #[serde(rename = "cn")]
    pub native: String,
}

impl WordPair {
    pub fn new(foreign: impl Into<String>, native: impl Into<String>) -> Self {
        Self {
            foreign: foreign.into(),
            native: native.into(),
        }
    }
}

/// The session's active pool of word pairs
///
/// Duplicate `foreign` entries are tolerated; distractor sampling only
/// guarantees the question's own word is excluded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordBank {
    pairs: Vec<WordPair>,
}

impl WordBank {
    /// Build a bank from already-decoded pairs, substituting the fallback
    /// bank when the list is empty.
    pub fn from_pairs(pairs: Vec<WordPair>) -> Self {
        if pairs.is_empty() {
            log::warn!("word feed empty, using fallback bank");
            return Self::fallback();
        }
        log::info!("word bank loaded with {} pairs", pairs.len());
        Self { pairs }
    }

    /// Decode a JSON feed. Parse errors and empty arrays both degrade to the
    /// fallback bank.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Vec<WordPair>>(json) {
            Ok(pairs) => Self::from_pairs(pairs),
            Err(err) => {
                log::warn!("word feed undecodable ({err}), using fallback bank");
                Self::fallback()
            }
        }
    }

    /// The built-in pairs used when the supplier fails
    pub fn fallback() -> Self {
        Self {
            pairs: vec![
                WordPair::new("error", "错误"),
                WordPair::new("test", "测试"),
                WordPair::new("network", "网络"),
                WordPair::new("offline", "离线"),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    /// Pick one pair uniformly at random
    pub fn pick(&self, rng: &mut Pcg32) -> Option<&WordPair> {
        if self.pairs.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.pairs.len());
        self.pairs.get(idx)
    }

    /// Draw `count` distractor pairs for `question`: without replacement from
    /// the non-matching pairs, replenishing the pool once exhausted. After a
    /// replenish the same distractor can appear twice in one round.
    ///
    /// Returns fewer than `count` (possibly zero) only when no pair other
    /// than the question exists at all.
    pub fn distractors(&self, question: &WordPair, count: usize, rng: &mut Pcg32) -> Vec<WordPair> {
        let candidates: Vec<&WordPair> = self
            .pairs
            .iter()
            .filter(|p| p.foreign != question.foreign)
            .collect();
        if candidates.is_empty() {
            return Vec::new();
        }

        let mut pool = candidates.clone();
        let mut picked = Vec::with_capacity(count);
        for _ in 0..count {
            if pool.is_empty() {
                pool = candidates.clone();
            }
            let idx = rng.random_range(0..pool.len());
            picked.push(pool.swap_remove(idx).clone());
        }
        picked
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::fallback()
    }
}
