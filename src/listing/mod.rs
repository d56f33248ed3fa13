//! Listing module - selects and orders content for display
//!
//! Both operations are pure functions over borrowed, already-loaded content.
//! They never filter, validate, or perform I/O.

mod feed;
mod tags;

pub use feed::{select_feed, FeedSelection};
pub use tags::{rank_tags, RankedTag, TieBreak};
