//! Browser state store.
//!
//! Holds the tab list and selection inside a `tokio::sync::watch` channel so
//! any number of consumers can subscribe to state snapshots. Mutations go
//! through `send_if_modified`, so writes that change nothing do not wake
//! subscribers.

use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::watch;
use tracing::debug;
use uuid::Uuid;

use crate::services::product_classifier::ProductPageClassifier;
use crate::types::errors::TabError;
use crate::types::tab::{BrowserState, Tab};

/// Reactive store for browser tab state.
pub struct BrowserStore {
    state: watch::Sender<BrowserState>,
    classifier: ProductPageClassifier,
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new(ProductPageClassifier::default())
    }
}

impl BrowserStore {
    pub fn new(classifier: ProductPageClassifier) -> Self {
        let (state, _) = watch::channel(BrowserState::default());
        Self { state, classifier }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Subscribes to state snapshots. The receiver immediately holds the
    /// current snapshot and observes every subsequent change.
    pub fn subscribe(&self) -> watch::Receiver<BrowserState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current snapshot.
    pub fn snapshot(&self) -> BrowserState {
        self.state.borrow().clone()
    }

    pub fn tab_count(&self) -> usize {
        self.state.borrow().tabs.len()
    }

    /// Creates a new tab, optionally with a URL and selected state.
    /// Returns the new tab's ID.
    pub fn create_tab(&self, url: Option<&str>, select: bool) -> String {
        let id = Uuid::new_v4().to_string();
        let url = url.unwrap_or("about:blank");
        let tab = Tab {
            id: id.clone(),
            url: url.to_string(),
            title: "New Tab".to_string(),
            is_product_url: self.classifier.is_product_url(url),
            loading: false,
            created_at: Self::now(),
        };
        self.state.send_modify(|state| {
            state.tabs.push(tab);
            if select || state.selected_tab_id.is_none() {
                state.selected_tab_id = Some(id.clone());
            }
        });
        debug!(tab_id = %id, url, "created tab");
        id
    }

    /// Closes a tab. If it was the selected tab, selection moves to the
    /// nearest neighbor; closing the last tab leaves no tab selected.
    pub fn close_tab(&self, tab_id: &str) -> Result<(), TabError> {
        let mut found = false;
        self.state.send_if_modified(|state| {
            let Some(idx) = state.tabs.iter().position(|t| t.id == tab_id) else {
                return false;
            };
            found = true;
            state.tabs.remove(idx);

            if state.selected_tab_id.as_deref() == Some(tab_id) {
                state.selected_tab_id = if state.tabs.is_empty() {
                    None
                } else {
                    let neighbor = idx.min(state.tabs.len() - 1);
                    Some(state.tabs[neighbor].id.clone())
                };
            }
            true
        });
        if found {
            debug!(tab_id, "closed tab");
            Ok(())
        } else {
            Err(TabError::NotFound(tab_id.to_string()))
        }
    }

    /// Changes the selected tab.
    pub fn select_tab(&self, tab_id: &str) -> Result<(), TabError> {
        let mut found = false;
        self.state.send_if_modified(|state| {
            if !state.tabs.iter().any(|t| t.id == tab_id) {
                return false;
            }
            found = true;
            if state.selected_tab_id.as_deref() == Some(tab_id) {
                return false;
            }
            state.selected_tab_id = Some(tab_id.to_string());
            true
        });
        if found {
            Ok(())
        } else {
            Err(TabError::NotFound(tab_id.to_string()))
        }
    }

    /// Navigates a tab to a new URL, re-running product page classification.
    pub fn update_tab_url(&self, tab_id: &str, url: &str) -> Result<(), TabError> {
        let is_product = self.classifier.is_product_url(url);
        self.modify_tab(tab_id, |tab| {
            if tab.url == url && tab.is_product_url == is_product {
                return false;
            }
            tab.url = url.to_string();
            tab.title = url.to_string();
            tab.is_product_url = is_product;
            true
        })
    }

    /// Updates a tab's loading flag.
    pub fn set_tab_loading(&self, tab_id: &str, loading: bool) -> Result<(), TabError> {
        self.modify_tab(tab_id, |tab| {
            if tab.loading == loading {
                return false;
            }
            tab.loading = loading;
            true
        })
    }

    /// Applies `f` to the tab with the given ID. `f` returns whether it
    /// actually changed anything; subscribers are only notified when it did.
    fn modify_tab(
        &self,
        tab_id: &str,
        f: impl FnOnce(&mut Tab) -> bool,
    ) -> Result<(), TabError> {
        let mut found = false;
        self.state.send_if_modified(|state| {
            match state.tabs.iter_mut().find(|t| t.id == tab_id) {
                Some(tab) => {
                    found = true;
                    f(tab)
                }
                None => false,
            }
        });
        if found {
            Ok(())
        } else {
            Err(TabError::NotFound(tab_id.to_string()))
        }
    }
}
