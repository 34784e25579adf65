use std::fmt;

/// Aggregated record of one distinct token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordStat {
    word:   String,
    count:  usize,
    length: usize,
}

impl WordStat {
    /// Build a record for `word` seen `count` times.
    ///
    /// The word is trimmed and its length is counted in Unicode scalar
    /// values, not bytes.
    pub fn new(word: &str, count: usize) -> Self {
        let word = word.trim();
        Self {
            word: word.to_string(),
            count,
            length: word.chars().count(),
        }
    }

    pub fn word(&self) -> &str { &self.word }

    pub fn count(&self) -> usize { self.count }

    pub fn length(&self) -> usize { self.length }
}

impl fmt::Display for WordStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word:{} ===== Count:{}", self.word, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_chars() {
        let stat = WordStat::new("Болконский", 3);
        assert_eq!(stat.length(), 10);
        assert_eq!(stat.count(), 3);
    }

    #[test]
    fn word_is_trimmed() {
        let stat = WordStat::new(" prince\u{3000}", 1);
        assert_eq!(stat.word(), "prince");
        assert_eq!(stat.length(), 6);
    }

    #[test]
    fn display_is_report_line() {
        assert_eq!(WordStat::new("the", 2).to_string(), "Word:the ===== Count:2");
    }
}
