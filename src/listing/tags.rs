//! Tag ranking for the tag index

use serde::{Deserialize, Serialize};

use crate::content::TagCounts;

/// Secondary ordering applied to tags with equal counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Keep the order in which tags were inserted into the counts map
    #[default]
    Insertion,
    /// Ascending byte order of the tag name
    Lexicographic,
}

/// A tag name with its count, in ranked position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedTag<'a> {
    pub name: &'a str,
    pub count: usize,
}

/// Order tags by descending count, breaking ties with `tie_break`
///
/// The result is a permutation of the keys of `counts`.
pub fn rank_tags(counts: &TagCounts, tie_break: TieBreak) -> Vec<RankedTag<'_>> {
    let mut ranked: Vec<RankedTag<'_>> = counts
        .iter()
        .map(|(name, count)| RankedTag { name, count })
        .collect();

    // sort_by is stable, so equal counts keep insertion order
    match tie_break {
        TieBreak::Insertion => ranked.sort_by(|a, b| b.count.cmp(&a.count)),
        TieBreak::Lexicographic => {
            ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(b.name)))
        }
    }

    ranked
}
