//! Review quality check feature.
//!
//! Watches the browser store and the app store and tells its owner when the
//! review quality check surface should be shown or hidden. Two signals come
//! out of this feature:
//!
//! - availability: the selected tab is on a product page and has finished
//!   loading. Becoming available is debounced so rapid load-state changes
//!   while a page settles don't flicker the surface; becoming unavailable is
//!   reported immediately.
//! - sheet expansion: mirrors the app store's `shopping_sheet_expanded`.
//!
//! The feature owns no state beyond its two subscription task handles; both
//! signals are pure functions of the latest store snapshots.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::services::feature_flags::FeatureFlagServiceTrait;
use crate::stores::app_store::AppStore;
use crate::stores::browser_store::BrowserStore;
use crate::types::app_state::AppState;
use crate::types::settings::ShoppingSettings;
use crate::types::tab::BrowserState;

/// Callback invoked with each change of a boolean feature signal.
pub type SignalCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Maps a candidate availability value to its debounce window.
pub type DebounceTimeout = Arc<dyn Fn(bool) -> Duration + Send + Sync>;

/// Builds a debounce-window function from the user's shopping settings.
pub fn debounce_timeout_from_settings(shopping: &ShoppingSettings) -> DebounceTimeout {
    let available = Duration::from_millis(shopping.available_debounce_ms);
    let unavailable = Duration::from_millis(shopping.unavailable_debounce_ms);
    Arc::new(move |value| if value { available } else { unavailable })
}

/// Quiet period before reporting "available".
const DEFAULT_AVAILABLE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Trait for features driven by an external lifecycle owner.
pub trait LifecycleFeature {
    fn start(&mut self);
    fn stop(&mut self);
}

/// Feature controller deriving the review quality check's availability and
/// sheet-expansion signals from the browser and app stores.
pub struct ReviewQualityCheckFeature {
    browser_store: Arc<BrowserStore>,
    app_store: Arc<AppStore>,
    flags: Arc<dyn FeatureFlagServiceTrait + Send + Sync>,
    on_availability_change: SignalCallback,
    on_bottom_sheet_state_change: SignalCallback,
    debounce_timeout: DebounceTimeout,
    availability_task: Option<JoinHandle<()>>,
    sheet_task: Option<JoinHandle<()>>,
}

impl ReviewQualityCheckFeature {
    pub fn new(
        browser_store: Arc<BrowserStore>,
        app_store: Arc<AppStore>,
        flags: Arc<dyn FeatureFlagServiceTrait + Send + Sync>,
        on_availability_change: SignalCallback,
        on_bottom_sheet_state_change: SignalCallback,
    ) -> Self {
        Self {
            browser_store,
            app_store,
            flags,
            on_availability_change,
            on_bottom_sheet_state_change,
            debounce_timeout: Arc::new(|available| {
                if available {
                    DEFAULT_AVAILABLE_DEBOUNCE
                } else {
                    Duration::ZERO
                }
            }),
            availability_task: None,
            sheet_task: None,
        }
    }

    /// Replaces the debounce-window function. Takes effect on the next
    /// `start()`.
    pub fn set_debounce_timeout(&mut self, debounce_timeout: DebounceTimeout) {
        self.debounce_timeout = debounce_timeout;
    }

    fn abort_subscriptions(&mut self) {
        if let Some(handle) = self.availability_task.take() {
            handle.abort();
        }
        if let Some(handle) = self.sheet_task.take() {
            handle.abort();
        }
    }
}

impl LifecycleFeature for ReviewQualityCheckFeature {
    /// Starts observing the stores.
    ///
    /// If the shopping experience flag is off, reports unavailable once and
    /// establishes no subscriptions. Otherwise spawns the two pipeline tasks,
    /// overwriting any handles left from a previous lifecycle.
    fn start(&mut self) {
        self.abort_subscriptions();

        if !self.flags.is_shopping_experience_enabled() {
            debug!("shopping experience disabled, review check unavailable");
            (self.on_availability_change)(false);
            return;
        }

        let rx = self.browser_store.subscribe();
        let on_change = Arc::clone(&self.on_availability_change);
        let debounce_timeout = Arc::clone(&self.debounce_timeout);
        self.availability_task = Some(tokio::spawn(run_availability_pipeline(
            rx,
            on_change,
            debounce_timeout,
        )));

        let rx = self.app_store.subscribe();
        let on_change = Arc::clone(&self.on_bottom_sheet_state_change);
        self.sheet_task = Some(tokio::spawn(run_sheet_pipeline(rx, on_change)));
    }

    /// Stops observing. Idempotent; a pending debounce timer is cancelled
    /// without firing.
    fn stop(&mut self) {
        self.abort_subscriptions();
    }
}

/// Availability of the review check for a given browser snapshot: `None` when
/// no tab is selected, otherwise whether the selected tab is a settled
/// product page.
fn availability_of(state: &BrowserState) -> Option<bool> {
    state
        .selected_tab()
        .map(|tab| tab.is_product_url && !tab.loading)
}

/// Pipeline A: browser snapshots -> selected tab -> `is_product_url && !loading`
/// -> dedup -> variable debounce -> callback.
async fn run_availability_pipeline(
    mut rx: watch::Receiver<BrowserState>,
    on_change: SignalCallback,
    debounce_timeout: DebounceTimeout,
) {
    // The candidate waiting out its debounce window, if any.
    let mut pending: Option<bool> = None;
    // Last value seen from upstream, for duplicate suppression.
    let mut last_input: Option<bool> = None;

    let timer = tokio::time::sleep(Duration::ZERO);
    tokio::pin!(timer);

    // The store's current snapshot counts as the first upstream value.
    if let Some(value) = availability_of(&rx.borrow_and_update()) {
        last_input = Some(value);
        pending = Some(value);
        timer.as_mut().reset(Instant::now() + debounce_timeout(value));
    }

    loop {
        tokio::select! {
            _ = &mut timer, if pending.is_some() => {
                if let Some(value) = pending.take() {
                    debug!(available = value, "review check availability changed");
                    on_change(value);
                }
            }
            changed = rx.changed() => {
                if changed.is_err() {
                    // Store dropped; nothing more will arrive.
                    break;
                }
                let Some(value) = availability_of(&rx.borrow_and_update()) else {
                    continue;
                };
                if last_input == Some(value) {
                    continue;
                }
                last_input = Some(value);
                // A newer value replaces the pending candidate and restarts
                // the window with that value's own duration.
                pending = Some(value);
                timer.as_mut().reset(Instant::now() + debounce_timeout(value));
            }
        }
    }
}

/// Pipeline B: app snapshots -> `shopping_sheet_expanded` -> dedup -> callback.
async fn run_sheet_pipeline(mut rx: watch::Receiver<AppState>, on_change: SignalCallback) {
    let mut last_input: Option<bool> = None;

    let current = rx.borrow_and_update().shopping_sheet_expanded;
    if let Some(expanded) = current {
        last_input = Some(expanded);
        debug!(expanded, "shopping sheet state changed");
        on_change(expanded);
    }

    while rx.changed().await.is_ok() {
        let Some(expanded) = rx.borrow_and_update().shopping_sheet_expanded else {
            continue;
        };
        if last_input == Some(expanded) {
            continue;
        }
        last_input = Some(expanded);
        debug!(expanded, "shopping sheet state changed");
        on_change(expanded);
    }
}
