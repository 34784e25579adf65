use crate::aggregate::aggregate;
use crate::report::{MIN_LENGTH, TOP_N, top_by_count, top_by_length};
use crate::stat::WordStat;
use crate::tokenize::tokenize;

/// Word statistics for one text, with the three report views.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    stats:        Vec<WordStat>,
    total_tokens: usize,
}

impl Analysis {
    pub fn from_text(text: &str) -> Self {
        let tokens = tokenize(text);
        let total_tokens = tokens.len();
        Self {
            stats: aggregate(tokens),
            total_tokens,
        }
    }

    /// Every distinct word, most frequent first.
    pub fn all(&self) -> &[WordStat] { &self.stats }

    pub fn top_by_count(&self) -> &[WordStat] { top_by_count(&self.stats, TOP_N) }

    pub fn top_by_length(&self) -> Vec<&WordStat> { top_by_length(&self.stats, TOP_N, MIN_LENGTH) }

    pub fn total_tokens(&self) -> usize { self.total_tokens }

    pub fn distinct_words(&self) -> usize { self.stats.len() }
}
