//! `cm-campus` — the read-only campus dataset the navigation engine resolves
//! identifiers against.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`place`]   | `Place`, `PlaceKind`                                            |
//! | [`room`]    | `Room`, `RoomKind`                                              |
//! | [`dataset`] | `CampusDataset` trait, `Campus` (indexed in-memory tables)      |
//! | [`builtin`] | `mace_campus()`, the static campus table                        |
//! | [`loader`]  | CSV loading of places and rooms                                 |
//! | [`search`]  | Scored text search over places and rooms                        |
//! | [`error`]   | `CampusError`, `CampusResult<T>`                                |
//!
//! The navigation core only ever needs two things from a dataset: lookup by
//! id, and iteration over all entries in a fixed priority order.  Both are
//! captured by [`CampusDataset`]; everything else here serves the
//! surrounding application.

pub mod builtin;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod place;
pub mod room;
pub mod search;

#[cfg(test)]
mod tests;

pub use builtin::mace_campus;
pub use dataset::{Campus, CampusDataset};
pub use error::{CampusError, CampusResult};
pub use loader::{load_campus, load_places_reader, load_rooms_reader};
pub use place::{Place, PlaceKind};
pub use room::{Room, RoomKind};
pub use search::{search, SearchHit, SearchItem, MAX_RESULTS, MIN_QUERY_LEN};
