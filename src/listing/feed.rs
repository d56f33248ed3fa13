//! Home feed selection

use std::num::NonZeroUsize;

/// The prefix of a feed chosen for display
#[derive(Debug, PartialEq, Eq)]
pub struct FeedSelection<'a, T> {
    /// First `min(max_display, len)` items, in input order
    pub displayed: &'a [T],
    /// Whether items exist beyond `displayed`
    pub has_more: bool,
}

impl<T> FeedSelection<'_, T> {
    /// True when there is nothing to show and the "no posts" state applies
    pub fn is_empty(&self) -> bool {
        self.displayed.is_empty()
    }
}

// Manual impls so `T` needs no bounds.
impl<T> Clone for FeedSelection<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FeedSelection<'_, T> {}

/// Select the first `max_display` items of an ordered feed
///
/// The caller decides the order (typically newest first).
pub fn select_feed<T>(items: &[T], max_display: NonZeroUsize) -> FeedSelection<'_, T> {
    let limit = max_display.get();
    let end = items.len().min(limit);
    FeedSelection {
        displayed: &items[..end],
        has_more: items.len() > limit,
    }
}
