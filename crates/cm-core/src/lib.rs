//! `cm-core` — foundational types for the campus map navigation engine.
//!
//! This crate is a dependency of every other `cm-*` crate.  It has no `cm-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`geo`]        | `Coordinates`, haversine distance, initial bearing      |
//! | [`compass`]    | `CompassPoint`, distance and walking-time labels        |
//! | [`projection`] | `MapBounds`, `PlanePoint`, `Projection`                 |
//! | [`ids`]        | `PlaceId`, `RoomId`                                     |
//! | [`config`]     | `CampusConfig`, `WatchSettings`                         |
//! | [`error`]      | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod compass;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod projection;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use compass::{format_distance, walking_time_label, CompassPoint, WALKING_SPEED_M_PER_MIN};
pub use config::{CampusConfig, WatchSettings};
pub use error::{CoreError, CoreResult};
pub use geo::{Coordinates, EARTH_RADIUS_M};
pub use ids::{PlaceId, RoomId};
pub use projection::{MapBounds, PlanePoint, Projection};
