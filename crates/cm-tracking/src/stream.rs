//! [`PositionStream`]: the tracking state machine.
//!
//! ```text
//!            start()                first fix
//! Stopped ───────────▶ Starting ──────────────▶ Tracking ◀──┐
//!    ▲                    │ error / timeout       │  pause() │ resume()
//!    │                    ▼                       ▼          │
//!    └──────────────── Stopped            Paused ───────────┘
//!    stop() from any state
//! ```
//!
//! Fixes reach the stream through an unbounded channel and are processed
//! only when the caller awaits [`PositionStream::next_fix`] (or calls
//! [`PositionStream::drain`]), one at a time.  Releasing the subscription
//! drops the receiving half, so nothing queued before a `stop()` or
//! `pause()` is ever processed.

use tokio::sync::mpsc::{error::TryRecvError, UnboundedReceiver};
use tracing::{debug, info, warn};

use cm_core::PlaceId;
use cm_spatial::ProximityIndex;

use crate::{
    FixRecord, FixSender, FixSink, LocationProvider, NoopSink, PositionError, PositionFix,
    PositionObserver, ProviderEvent, RawFix, TrackingResult, UserId, WatchHandle, WatchOptions,
};

/// Lifecycle state of a [`PositionStream`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrackingState {
    Stopped,
    /// Subscribed, waiting for the first fix.
    Starting,
    Tracking,
    /// Subscription released, but `resume()` may pick up again without a
    /// fresh `start()`.
    Paused,
}

impl TrackingState {
    pub fn as_str(self) -> &'static str {
        match self {
            TrackingState::Stopped  => "stopped",
            TrackingState::Starting => "starting",
            TrackingState::Tracking => "active",
            TrackingState::Paused   => "paused",
        }
    }
}

pub struct PositionStream<P: LocationProvider, S: FixSink = NoopSink> {
    provider:    P,
    sink:        S,
    index:       ProximityIndex,
    options:     WatchOptions,
    user_id:     UserId,
    state:       TrackingState,
    watch:       Option<WatchHandle>,
    events:      Option<UnboundedReceiver<ProviderEvent>>,
    current:     Option<PositionFix>,
    last_nearby: Option<PlaceId>,
}

impl<P: LocationProvider> PositionStream<P, NoopSink> {
    /// A stream that detects nearby places with `index` and persists nothing.
    pub fn new(provider: P, index: ProximityIndex, options: WatchOptions) -> Self {
        Self {
            provider,
            sink: NoopSink,
            index,
            options,
            user_id: UserId::generate(),
            state: TrackingState::Stopped,
            watch: None,
            events: None,
            current: None,
            last_nearby: None,
        }
    }
}

impl<P: LocationProvider, S: FixSink> PositionStream<P, S> {
    /// Replace the persistence sink.
    pub fn with_sink<S2: FixSink>(self, sink: S2) -> PositionStream<P, S2> {
        PositionStream {
            provider:    self.provider,
            sink,
            index:       self.index,
            options:     self.options,
            user_id:     self.user_id,
            state:       self.state,
            watch:       self.watch,
            events:      self.events,
            current:     self.current,
            last_nearby: self.last_nearby,
        }
    }

    /// Record fixes under `user_id` instead of a generated one.
    pub fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = user_id;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn status(&self) -> TrackingState {
        self.state
    }

    /// `true` only while a subscription is live and delivering.
    pub fn is_active(&self) -> bool {
        self.state == TrackingState::Tracking
    }

    /// Latest processed fix, if any.
    pub fn current_fix(&self) -> Option<PositionFix> {
        self.current.clone()
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn options(&self) -> &WatchOptions {
        &self.options
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Subscribe and wait for the first fix.
    ///
    /// Returns `Ok` at once, without subscribing again, when already
    /// `Tracking` or `Paused`.  On failure the subscription is released and
    /// the stream is `Stopped`.
    pub async fn start<O: PositionObserver>(&mut self, observer: &mut O) -> TrackingResult<()> {
        match self.state {
            TrackingState::Tracking | TrackingState::Paused => return Ok(()),
            // A start() future dropped mid-wait leaves a dangling watch.
            TrackingState::Starting => self.release(),
            TrackingState::Stopped => {}
        }

        self.state = TrackingState::Starting;
        let mut events = match self.subscribe() {
            Ok(events) => events,
            Err(err) => {
                warn!(%err, "location subscription refused");
                self.state = TrackingState::Stopped;
                return Err(err);
            }
        };

        let first = match tokio::time::timeout(self.options.timeout, events.recv()).await {
            Ok(Some(ProviderEvent::Fix(raw)))   => Ok(raw),
            Ok(Some(ProviderEvent::Error(err))) => Err(err),
            Ok(None)                            => Err(PositionError::Unavailable),
            Err(_elapsed)                       => Err(PositionError::Timeout),
        };

        match first {
            Ok(raw) => {
                self.events = Some(events);
                self.state = TrackingState::Tracking;
                info!(user = %self.user_id, "location tracking started");
                self.process(raw, observer);
                Ok(())
            }
            Err(err) => {
                warn!(%err, "location tracking failed to start");
                self.release();
                self.state = TrackingState::Stopped;
                Err(err)
            }
        }
    }

    /// Release the subscription and forget nearby state.  Safe from any state.
    pub fn stop(&mut self) {
        self.release();
        self.last_nearby = None;
        if self.state != TrackingState::Stopped {
            debug!(from = self.state.as_str(), "location tracking stopped");
        }
        self.state = TrackingState::Stopped;
    }

    /// Release the subscription but stay resumable.  Only valid while
    /// `Tracking`; otherwise a no-op.
    pub fn pause(&mut self) {
        if self.state != TrackingState::Tracking {
            return;
        }
        self.release();
        self.state = TrackingState::Paused;
        debug!("location tracking paused");
    }

    /// Re-subscribe after `pause()`.  A no-op unless `Paused`.  Does not wait
    /// for a fix; if the provider refuses, the stream is `Stopped`.
    pub fn resume(&mut self) -> TrackingResult<()> {
        if self.state != TrackingState::Paused {
            return Ok(());
        }
        match self.subscribe() {
            Ok(events) => {
                self.events = Some(events);
                self.state = TrackingState::Tracking;
                debug!("location tracking resumed");
                Ok(())
            }
            Err(err) => {
                warn!(%err, "location tracking failed to resume");
                self.state = TrackingState::Stopped;
                self.last_nearby = None;
                Err(err)
            }
        }
    }

    // ── Delivery ──────────────────────────────────────────────────────────

    /// Wait for and process the next fix.
    ///
    /// Watch errors are logged, reported to the observer, and skipped.
    /// Returns `None` when not `Tracking`, or when the provider hangs up (the
    /// stream is then `Stopped`).
    pub async fn next_fix<O: PositionObserver>(&mut self, observer: &mut O) -> Option<PositionFix> {
        loop {
            if self.state != TrackingState::Tracking {
                return None;
            }
            let event = self.events.as_mut()?.recv().await;
            match event {
                Some(ProviderEvent::Fix(raw)) => return Some(self.process(raw, observer)),
                Some(ProviderEvent::Error(err)) => self.watch_error(&err, observer),
                None => {
                    self.provider_gone();
                    return None;
                }
            }
        }
    }

    /// Process every event already queued, without waiting.  Returns the
    /// number of fixes processed.
    pub fn drain<O: PositionObserver>(&mut self, observer: &mut O) -> usize {
        let mut processed = 0;
        while self.state == TrackingState::Tracking {
            let Some(events) = self.events.as_mut() else { break };
            match events.try_recv() {
                Ok(ProviderEvent::Fix(raw)) => {
                    self.process(raw, observer);
                    processed += 1;
                }
                Ok(ProviderEvent::Error(err)) => self.watch_error(&err, observer),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => self.provider_gone(),
            }
        }
        processed
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn subscribe(&mut self) -> TrackingResult<UnboundedReceiver<ProviderEvent>> {
        let (sender, events) = FixSender::channel();
        let handle = self.provider.watch(&self.options, sender)?;
        debug!(handle = handle.0, high_accuracy = self.options.high_accuracy, "location watch created");
        self.watch = Some(handle);
        Ok(events)
    }

    fn release(&mut self) {
        if let Some(handle) = self.watch.take() {
            self.provider.clear_watch(handle);
            debug!(handle = handle.0, "location watch cleared");
        }
        self.events = None;
    }

    fn provider_gone(&mut self) {
        warn!("location provider closed the watch");
        self.release();
        self.last_nearby = None;
        self.state = TrackingState::Stopped;
    }

    fn watch_error<O: PositionObserver>(&self, err: &PositionError, observer: &mut O) {
        warn!(%err, "location watch error");
        observer.on_watch_error(err);
    }

    fn process<O: PositionObserver>(&mut self, raw: RawFix, observer: &mut O) -> PositionFix {
        let nearby = self.index.find(raw.coordinates).cloned();
        let fix = PositionFix::from_raw(raw, nearby);
        self.current = Some(fix.clone());

        if let Err(err) = self.sink.save_fix(&FixRecord::new(&self.user_id, &fix)) {
            warn!(%err, "failed to persist fix");
        }

        observer.on_location(&fix);
        if fix.nearby != self.last_nearby {
            self.last_nearby = fix.nearby.clone();
            debug!(nearby = ?fix.nearby, "nearby building changed");
            observer.on_nearby_changed(fix.nearby.as_ref());
        }
        fix
    }
}
