//! Scored text search over places and rooms.
//!
//! Matching is case-insensitive substring.  Scores:
//!
//! | Match                          | Score |
//! |--------------------------------|-------|
//! | place name starts with query   | 100   |
//! | place name contains query      | 80    |
//! | place short name contains it   | 70    |
//! | room number equals query       | 100   |
//! | room number contains query     | 85    |
//! | room name starts with query    | 75    |
//! | room name contains query       | 60    |
//!
//! Results are sorted by descending score; ties keep dataset order (places
//! before rooms).  At most [`MAX_RESULTS`] hits are returned.

use crate::{CampusDataset, Place, Room};

/// Queries shorter than this (after trimming) return nothing.
pub const MIN_QUERY_LEN: usize = 2;

/// Longest result list `search` returns.
pub const MAX_RESULTS: usize = 10;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SearchItem<'a> {
    Place(&'a Place),
    Room(&'a Room),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchHit<'a> {
    pub item:  SearchItem<'a>,
    pub score: u8,
}

pub fn search<'a, D: CampusDataset + ?Sized>(dataset: &'a D, query: &str) -> Vec<SearchHit<'a>> {
    let q = query.trim().to_lowercase();
    if q.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit<'a>> = dataset
        .places()
        .iter()
        .filter_map(|p| place_score(p, &q).map(|score| SearchHit { item: SearchItem::Place(p), score }))
        .chain(
            dataset
                .rooms()
                .iter()
                .filter_map(|r| room_score(r, &q).map(|score| SearchHit { item: SearchItem::Room(r), score })),
        )
        .collect();

    // Stable: equal scores keep dataset order.
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(MAX_RESULTS);
    hits
}

fn place_score(place: &Place, q: &str) -> Option<u8> {
    let name = place.name.to_lowercase();
    if name.starts_with(q) {
        Some(100)
    } else if name.contains(q) {
        Some(80)
    } else if place.short_name.as_deref().is_some_and(|s| s.to_lowercase().contains(q)) {
        Some(70)
    } else {
        None
    }
}

fn room_score(room: &Room, q: &str) -> Option<u8> {
    let number = room.number.to_lowercase();
    let name   = room.name.to_lowercase();
    if number == q {
        Some(100)
    } else if number.contains(q) {
        Some(85)
    } else if name.starts_with(q) {
        Some(75)
    } else if name.contains(q) {
        Some(60)
    } else {
        None
    }
}
