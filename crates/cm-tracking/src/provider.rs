//! The platform location capability the stream subscribes to.
//!
//! A provider is push-based: [`LocationProvider::watch`] hands it a
//! [`FixSender`] and the provider keeps sending fixes (or errors) until the
//! watch is cleared.  Everything the provider sends lands in a channel owned
//! by the stream, so fixes are processed one at a time and in order.

use std::time::Duration;

use tokio::sync::mpsc;

use cm_core::WatchSettings;

use crate::{PositionError, RawFix};

// ── Options ───────────────────────────────────────────────────────────────────

/// Per-subscription provider knobs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WatchOptions {
    pub high_accuracy: bool,
    /// Deadline for the first fix after `start()`.
    pub timeout:       Duration,
    /// Oldest cached fix the provider may return while watching.
    pub maximum_age:   Duration,
}

impl From<&WatchSettings> for WatchOptions {
    fn from(s: &WatchSettings) -> Self {
        Self {
            high_accuracy: s.high_accuracy,
            timeout:       Duration::from_millis(s.first_fix_timeout_ms),
            maximum_age:   Duration::from_millis(s.maximum_age_ms),
        }
    }
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self::from(&WatchSettings::default())
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

/// One notification from the provider.
#[derive(Clone, Debug, PartialEq)]
pub enum ProviderEvent {
    Fix(RawFix),
    Error(PositionError),
}

/// Sending half of a watch.  Cloneable; sends after the watch has been
/// released are silently dropped.
#[derive(Clone, Debug)]
pub struct FixSender {
    tx: mpsc::UnboundedSender<ProviderEvent>,
}

impl FixSender {
    pub(crate) fn channel() -> (Self, mpsc::UnboundedReceiver<ProviderEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Deliver a fix.  Returns `false` once the receiving stream is gone.
    pub fn send_fix(&self, fix: RawFix) -> bool {
        self.tx.send(ProviderEvent::Fix(fix)).is_ok()
    }

    /// Deliver a watch error.  Returns `false` once the receiving stream is gone.
    pub fn send_error(&self, error: PositionError) -> bool {
        self.tx.send(ProviderEvent::Error(error)).is_ok()
    }

    /// `true` once the stream has released this watch.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

// ── Capability ────────────────────────────────────────────────────────────────

/// Opaque id of a live subscription, used to clear it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WatchHandle(pub u64);

/// Subscribe-with-callback / unsubscribe-by-handle location source.
pub trait LocationProvider {
    /// Start watching.  An `Err` means the subscription was refused outright
    /// (unsupported platform, permission denied up front).
    fn watch(&mut self, options: &WatchOptions, sender: FixSender) -> Result<WatchHandle, PositionError>;

    /// Release a subscription.  Must be a no-op for unknown handles.
    fn clear_watch(&mut self, handle: WatchHandle);
}

impl<P: LocationProvider + ?Sized> LocationProvider for &mut P {
    fn watch(&mut self, options: &WatchOptions, sender: FixSender) -> Result<WatchHandle, PositionError> {
        (**self).watch(options, sender)
    }

    fn clear_watch(&mut self, handle: WatchHandle) {
        (**self).clear_watch(handle)
    }
}

impl<P: LocationProvider + ?Sized> LocationProvider for Box<P> {
    fn watch(&mut self, options: &WatchOptions, sender: FixSender) -> Result<WatchHandle, PositionError> {
        (**self).watch(options, sender)
    }

    fn clear_watch(&mut self, handle: WatchHandle) {
        (**self).clear_watch(handle)
    }
}
