//! Scriptable in-memory [`LocationProvider`] for tests and demos.
//!
//! Clones share state, so a test can keep one handle while the stream owns
//! another:
//!
//! ```rust,ignore
//! let provider = MockProvider::with_script([MockProvider::fix(10.0538, 76.6192)]);
//! let mut stream = PositionStream::new(provider.clone(), index, WatchOptions::default());
//! stream.start(&mut NoopPositionObserver).await?;
//! assert_eq!(provider.subscribe_count(), 1);
//! provider.push_fix(RawFix::new(coords, 5.0, 1_000));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use cm_core::Coordinates;

use crate::{FixSender, LocationProvider, PositionError, ProviderEvent, RawFix, WatchHandle, WatchOptions};

#[derive(Default)]
struct MockState {
    next_handle:     u64,
    subscribe_count: usize,
    clear_count:     usize,
    watches:         Vec<(WatchHandle, FixSender)>,
    script:          Vec<ProviderEvent>,
    refuse:          Option<PositionError>,
    last_options:    Option<WatchOptions>,
}

#[derive(Clone, Default)]
pub struct MockProvider {
    state: Rc<RefCell<MockState>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider that sends `script` into the next watch as soon as it is
    /// created.
    pub fn with_script<I: IntoIterator<Item = ProviderEvent>>(script: I) -> Self {
        let mock = Self::new();
        mock.set_script(script);
        mock
    }

    /// Queue events for the next watch.  A script is consumed by one watch.
    pub fn set_script<I: IntoIterator<Item = ProviderEvent>>(&self, script: I) {
        self.state.borrow_mut().script = script.into_iter().collect();
    }

    /// Convenience: a 5 m accuracy fix at `(lat, lng)`, timestamp 0.
    pub fn fix(lat: f64, lng: f64) -> ProviderEvent {
        ProviderEvent::Fix(RawFix::new(Coordinates::new(lat, lng), 5.0, 0))
    }

    /// Refuse every future `watch` call with `error`.
    pub fn refuse_with(&self, error: PositionError) {
        self.state.borrow_mut().refuse = Some(error);
    }

    pub fn subscribe_count(&self) -> usize {
        self.state.borrow().subscribe_count
    }

    pub fn clear_count(&self) -> usize {
        self.state.borrow().clear_count
    }

    /// Watches created and not yet cleared.
    pub fn active_watches(&self) -> usize {
        self.state.borrow().watches.len()
    }

    pub fn last_options(&self) -> Option<WatchOptions> {
        self.state.borrow().last_options
    }

    /// Send a fix to every live watch; returns how many accepted it.
    pub fn push_fix(&self, fix: RawFix) -> usize {
        self.state.borrow().watches.iter().filter(|(_, tx)| tx.send_fix(fix)).count()
    }

    /// Send a watch error to every live watch; returns how many accepted it.
    pub fn push_error(&self, error: PositionError) -> usize {
        self.state
            .borrow()
            .watches
            .iter()
            .filter(|(_, tx)| tx.send_error(error.clone()))
            .count()
    }

    /// Drop every sender without clearing, as if the platform went away.
    pub fn hang_up(&self) {
        self.state.borrow_mut().watches.clear();
    }
}

impl LocationProvider for MockProvider {
    fn watch(&mut self, options: &WatchOptions, sender: FixSender) -> Result<WatchHandle, PositionError> {
        let mut state = self.state.borrow_mut();
        state.subscribe_count += 1;
        state.last_options = Some(*options);
        if let Some(err) = &state.refuse {
            return Err(err.clone());
        }
        for event in std::mem::take(&mut state.script) {
            match event {
                ProviderEvent::Fix(fix)   => sender.send_fix(fix),
                ProviderEvent::Error(err) => sender.send_error(err),
            };
        }
        state.next_handle += 1;
        let handle = WatchHandle(state.next_handle);
        state.watches.push((handle, sender));
        Ok(handle)
    }

    fn clear_watch(&mut self, handle: WatchHandle) {
        let mut state = self.state.borrow_mut();
        state.clear_count += 1;
        state.watches.retain(|(h, _)| *h != handle);
    }
}
