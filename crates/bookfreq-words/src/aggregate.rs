use std::collections::HashMap;

use crate::stat::WordStat;

/// Group identical tokens and order the groups by descending count.
///
/// Matching is exact: case and punctuation distinguish words. Groups with
/// equal counts keep the order in which their word first appeared.
///
/// ```
/// use bookfreq_words::{aggregate, tokenize};
///
/// let stats = aggregate(tokenize("the The the cat"));
/// let pairs: Vec<_> = stats.iter().map(|s| (s.word(), s.count())).collect();
/// assert_eq!(pairs, vec![("the", 2), ("The", 1), ("cat", 1)]);
/// ```
pub fn aggregate<'a, I>(tokens: I) -> Vec<WordStat>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(&'a str, usize)> = Vec::new();

    for token in tokens {
        match slots.get(token) {
            Some(&slot) => groups[slot].1 += 1,
            None => {
                slots.insert(token, groups.len());
                groups.push((token, 1));
            }
        }
    }

    // Stable: ties stay in first-occurrence order.
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    groups
        .into_iter()
        .map(|(word, count)| WordStat::new(word, count))
        .collect()
}
