use serde::{Deserialize, Serialize};

/// Represents a browser tab with its current page state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
    /// Whether the host classified the current URL as a shopping product page.
    pub is_product_url: bool,
    /// Whether the page is still loading.
    pub loading: bool,
    pub created_at: i64,
}

/// Snapshot of the browser's tab state as published by the browser store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BrowserState {
    pub tabs: Vec<Tab>,
    pub selected_tab_id: Option<String>,
}

impl BrowserState {
    /// Returns the currently selected tab, if any.
    pub fn selected_tab(&self) -> Option<&Tab> {
        self.selected_tab_id
            .as_ref()
            .and_then(|id| self.tabs.iter().find(|t| &t.id == id))
    }
}
