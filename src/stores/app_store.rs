//! Application state store.
//!
//! Tracks application-level presentation state relevant to the shopping
//! experience, currently just whether the shopping bottom sheet is expanded.
//! Built on `tokio::sync::watch` like the browser store.

use tokio::sync::watch;
use tracing::debug;

use crate::types::app_state::AppState;

/// Reactive store for application state.
pub struct AppStore {
    state: watch::Sender<AppState>,
}

impl AppStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(AppState::default());
        Self { state }
    }

    /// Subscribes to state snapshots. The receiver immediately holds the
    /// current snapshot and observes every subsequent change.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current snapshot.
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Records the shopping bottom sheet's expansion state.
    pub fn set_shopping_sheet_expanded(&self, expanded: bool) {
        let changed = self.state.send_if_modified(|state| {
            if state.shopping_sheet_expanded == Some(expanded) {
                return false;
            }
            state.shopping_sheet_expanded = Some(expanded);
            true
        });
        if changed {
            debug!(expanded, "shopping sheet state recorded");
        }
    }

    /// Clears the sheet state back to "not yet reported".
    pub fn clear_shopping_sheet(&self) {
        let changed = self.state.send_if_modified(|state| {
            if state.shopping_sheet_expanded.is_none() {
                return false;
            }
            state.shopping_sheet_expanded = None;
            true
        });
        if changed {
            debug!("shopping sheet state cleared");
        }
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}
