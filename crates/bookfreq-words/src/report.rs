use crate::stat::WordStat;

/// Number of entries in each ranked report.
pub const TOP_N: usize = 50;

/// Words must be strictly longer than this to appear in the length report.
pub const MIN_LENGTH: usize = 6;

/// The first `n` entries of a count-ordered list.
///
/// `stats` is expected to come from [`aggregate`](crate::aggregate); it is
/// not re-sorted here.
pub fn top_by_count(stats: &[WordStat], n: usize) -> &[WordStat] {
    &stats[..n.min(stats.len())]
}

/// The first `n` entries whose length exceeds `min_length`.
///
/// Selection keeps the incoming count order; the result is *not* sorted by
/// length. Existing report consumers depend on this ordering.
pub fn top_by_length(stats: &[WordStat], n: usize, min_length: usize) -> Vec<&WordStat> {
    stats
        .iter()
        .filter(|stat| stat.length() > min_length)
        .take(n)
        .collect()
}

/// Render one report line: `Word:<word> ===== Count:<count>`.
pub fn format_line(stat: &WordStat) -> String { stat.to_string() }
