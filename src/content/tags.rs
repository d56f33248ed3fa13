//! Tag occurrence counts

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::Post;

/// Mapping from tag name to the number of posts carrying it
///
/// Iteration follows insertion order, which the tag index uses as its
/// default tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCounts(IndexMap<String, usize>);

impl TagCounts {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Count tags across posts, in feed order
    ///
    /// A post counts once per distinct tag; blank tags are ignored. Tags with
    /// the same slug share one entry under the first spelling seen.
    pub fn from_posts(posts: &[Post]) -> Self {
        let mut counts = Self::new();
        let mut spellings: HashMap<String, String> = HashMap::new();

        for post in posts {
            let mut seen = HashSet::new();
            for tag in post.tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
                let key = tag_key(tag);
                if !seen.insert(key.clone()) {
                    continue;
                }
                let name = spellings.entry(key).or_insert_with(|| tag.to_string());
                counts.increment(name);
            }
        }
        counts
    }

    /// Add one occurrence of `tag`
    pub fn increment(&mut self, tag: &str) {
        *self.0.entry(tag.to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, tag: &str) -> Option<usize> {
        self.0.get(tag).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(tag, count)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

/// Identity of a tag: its URL slug, or the lowercased text when it has none
fn tag_key(tag: &str) -> String {
    match slug::slugify(tag) {
        key if key.is_empty() => tag.to_lowercase(),
        key => key,
    }
}

impl FromIterator<(String, usize)> for TagCounts {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
