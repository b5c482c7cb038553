//! `cm-tracking` — the position stream.
//!
//! Wraps a push-based platform location source ([`LocationProvider`]) in an
//! explicit lifecycle object, [`PositionStream`], constructed once by the
//! application and passed to whoever needs positions.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`stream`]   | `PositionStream`, `TrackingState`                            |
//! | [`provider`] | `LocationProvider`, `FixSender`, `WatchOptions`, `WatchHandle` |
//! | [`fix`]      | `RawFix`, `PositionFix`                                      |
//! | [`observer`] | `PositionObserver`, `NoopPositionObserver`                   |
//! | [`sink`]     | `FixSink`, `NoopSink`, `CsvFixSink`, `FixRecord`, `UserId`   |
//! | [`mock`]     | `MockProvider` test double                                   |
//! | [`error`]    | `PositionError`, `SinkError`                                 |
//!
//! # Execution model
//!
//! Single-threaded.  `start()` is the only call that suspends for long: it
//! waits for the first fix or a failure.  After that the caller pumps fixes
//! with `next_fix().await` or `drain()`; each one is processed to completion
//! (sink, then `on_location`, then `on_nearby_changed` if it changed) before
//! the next is looked at.
//!
//! ```rust,ignore
//! let index  = ProximityIndex::new(buildings, config.proximity_threshold_deg);
//! let mut stream = PositionStream::new(provider, index, WatchOptions::from(&config.watch));
//! stream.start(&mut observer).await?;
//! while let Some(fix) = stream.next_fix(&mut observer).await {
//!     // ...
//! }
//! ```

pub mod error;
pub mod fix;
pub mod mock;
pub mod observer;
pub mod provider;
pub mod sink;
pub mod stream;


pub use error::{PositionError, SinkError, TrackingResult};
pub use fix::{PositionFix, RawFix};
pub use mock::MockProvider;
pub use observer::{NoopPositionObserver, PositionObserver};
pub use provider::{FixSender, LocationProvider, ProviderEvent, WatchHandle, WatchOptions};
pub use sink::{CsvFixSink, FixRecord, FixSink, NoopSink, UserId};
pub use stream::{PositionStream, TrackingState};
