//! Leaderboard ranking.
//!
//! The stored list grows without bound; only the display is truncated.

use crate::types::{LeaderboardItem, LEADERBOARD_DISPLAY};

/// Append `item` and re-sort by score, highest first.
///
/// The sort is stable, so entries with equal scores keep their relative order.
pub fn insert(mut list: Vec<LeaderboardItem>, item: LeaderboardItem) -> Vec<LeaderboardItem> {
    list.push(item);
    list.sort_by(|a, b| b.score.cmp(&a.score));
    list
}

/// Entries shown on the scores screen.
pub fn top(list: &[LeaderboardItem]) -> &[LeaderboardItem] {
    &list[..list.len().min(LEADERBOARD_DISPLAY)]
}
