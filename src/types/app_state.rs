use serde::{Deserialize, Serialize};

/// Snapshot of application-level presentation state as published by the app store.
///
/// `shopping_sheet_expanded` is `None` until the host reports the bottom
/// sheet's state for the first time.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppState {
    pub shopping_sheet_expanded: Option<bool>,
}
