//! `cm-spatial` — "which building am I standing next to?"
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`proximity`] | `find_nearby` (linear scan), `ProximityIndex` (R-tree)    |
//!
//! # Metric
//!
//! Distances here are planar Euclidean distances in *degrees*
//! (`sqrt(Δlat² + Δlng²)`), not haversine metres.  The threshold is small
//! (≈ 20 m) so curvature does not matter at that scale.  Navigation arrival
//! uses haversine metres and its own radius; the two checks are deliberately
//! kept separate.
//!
//! # Tie-breaking
//!
//! When several places are within the threshold the **first in priority
//! order** wins, not the nearest.  Callers that want nearest-wins must supply
//! places sorted accordingly.

pub mod proximity;

#[cfg(test)]
mod tests;

pub use proximity::{find_nearby, ProximityIndex, DEFAULT_THRESHOLD_DEG};
