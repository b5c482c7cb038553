//! `cm-navigation` — point-to-point campus navigation.
//!
//! Routes are straight great-circle legs: distance and initial bearing from
//! the user's position to the destination.  A room is navigated to by way of
//! the building it is in.
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`route`]    | `Route`, `Destination`, `DestinationKind`, `calculate_route`   |
//! | [`session`]  | `NavigationSession`, `NavigationState`, `Arrival`, `DestinationInfo` |
//! | [`observer`] | `NavigationObserver`, `NoopNavigationObserver`                 |
//! | [`error`]    | `NavError`, `NavResult`                                        |
//!
//! Arrival is judged in haversine metres against the session's radius
//! (default 15 m).  This is a different metric and threshold from the
//! nearby-building check in `cm-spatial`; the two are not unified.

pub mod error;
pub mod observer;
pub mod route;
pub mod session;


pub use error::{NavError, NavResult};
pub use observer::{NavigationObserver, NoopNavigationObserver};
pub use route::{calculate_route, Destination, DestinationKind, Route};
pub use session::{Arrival, DestinationInfo, NavigationSession, NavigationState, DEFAULT_ARRIVAL_RADIUS_M};
