//! Listing order for blog entries.
//!
//! Entries are ranked by like count, highest first. Equal counts fall back
//! to the repository-assigned creation sequence so that repeated listings
//! with no intervening mutation are identical, whatever container the
//! entries were read from.

use std::cmp::Ordering;

use super::BlogEntry;

/// Total order over entries: likes descending, then creation ascending.
#[must_use]
pub fn compare(a: &BlogEntry, b: &BlogEntry) -> Ordering {
    b.likes()
        .cmp(&a.likes())
        .then_with(|| a.sequence().cmp(&b.sequence()))
}

/// Sort `entries` in place into listing order.
pub fn rank(entries: &mut [BlogEntry]) {
    entries.sort_by(compare);
}

/// Consume an unordered snapshot and return it in listing order.
///
/// # Examples
/// ```
/// use bloglist::domain::ranking::ranked;
///
/// assert!(ranked(Vec::new()).is_empty());
/// ```
#[must_use]
pub fn ranked(mut entries: Vec<BlogEntry>) -> Vec<BlogEntry> {
    rank(&mut entries);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BlogDraft, BlogId, UserId};
    use chrono::Utc;
    use rstest::rstest;

    fn entry(title: &str, sequence: u64, likes: u64) -> BlogEntry {
        let draft = BlogDraft::try_from_parts(title, "author", "https://blog.test").expect("draft");
        let mut entry =
            BlogEntry::create(BlogId::random(), draft, UserId::random(), sequence, Utc::now());
        for _ in 0..likes {
            entry.record_like();
        }
        entry
    }

    fn titles(entries: &[BlogEntry]) -> Vec<&str> {
        entries.iter().map(BlogEntry::title).collect()
    }

    #[rstest]
    fn more_likes_rank_first() {
        let list = ranked(vec![entry("A", 0, 0), entry("B", 1, 2), entry("C", 2, 1)]);
        assert_eq!(titles(&list), ["B", "C", "A"]);
    }

    #[rstest]
    fn ties_keep_creation_order_regardless_of_input_order() {
        let list = ranked(vec![entry("late", 9, 3), entry("early", 2, 3), entry("mid", 5, 3)]);
        assert_eq!(titles(&list), ["early", "mid", "late"]);
    }

    #[rstest]
    fn ranking_is_reproducible() {
        let input = vec![entry("x", 3, 1), entry("y", 1, 1), entry("z", 2, 4)];
        let first = ranked(input.clone());
        let second = ranked(input.into_iter().rev().collect());
        assert_eq!(first, second);
    }
}
