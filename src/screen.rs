//! Screen-scoped load state with a stale-result guard.
//!
//! A screen kicks off one async load when it becomes active. If the screen
//! is dismissed (or a new load supersedes the old one) before the response
//! arrives, the late result must be discarded without touching state the
//! user can still observe. [`ScreenSlot`] enforces that with an epoch
//! ticket: only the ticket issued by the most recent [`ScreenSlot::begin`]
//! may publish a result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tracing::{debug, error};

use crate::error::Result;

/// Observable state of one screen's load.
///
/// The explicit tagged form: a screen is either untouched, in flight,
/// showing data, or showing a terminal failure. There is no nullable
/// in-between.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// No load has been started, or the screen was dismissed.
    Idle,
    /// A load is in flight.
    Loading,
    /// The load finished and produced data.
    Loaded(T),
    /// The load failed; the reason is display-ready.
    Failed(String),
}

impl<T> LoadState<T> {
    /// Whether this state carries data.
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }
}

/// Ticket tying an in-flight load to the screen epoch that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
}

/// Holder for one screen's load state.
pub struct ScreenSlot<T> {
    epoch: AtomicU64,
    state: Mutex<LoadState<T>>,
}

impl<T: Clone> ScreenSlot<T> {
    /// Create an idle slot.
    pub fn new() -> Self {
        Self {
            epoch: AtomicU64::new(0),
            state: Mutex::new(LoadState::Idle),
        }
    }

    /// Start a new load: supersede any outstanding ticket and move the
    /// state to `Loading`.
    pub fn begin(&self) -> LoadTicket {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.lock().expect("screen state poisoned") = LoadState::Loading;
        LoadTicket { epoch }
    }

    /// Publish a finished load.
    ///
    /// Applies the result only if `ticket` is still current; a stale ticket
    /// is discarded and observable state stays untouched. Returns whether
    /// the result was applied. Failures collapse to a logged terminal
    /// `Failed` state.
    pub fn complete(&self, ticket: LoadTicket, result: Result<T>) -> bool {
        if ticket.epoch != self.epoch.load(Ordering::SeqCst) {
            debug!("discarding stale load result for epoch {}", ticket.epoch);
            return false;
        }

        let mut state = self.state.lock().expect("screen state poisoned");
        *state = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => {
                error!("load failed: {}", e);
                LoadState::Failed(e.to_string())
            }
        };
        true
    }

    /// Dismiss the screen: outstanding tickets become stale and the state
    /// returns to `Idle`.
    pub fn dismiss(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        *self.state.lock().expect("screen state poisoned") = LoadState::Idle;
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LoadState<T> {
        self.state.lock().expect("screen state poisoned").clone()
    }
}

impl<T: Clone> Default for ScreenSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
