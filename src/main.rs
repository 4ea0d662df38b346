//! ReviewCheck — review quality check availability engine.
//!
//! Entry point: runs a console demo that drives the stores through a short
//! simulated browsing session and prints the signals the feature emits.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use reviewcheck::features::review_quality_check::{
    debounce_timeout_from_settings, LifecycleFeature, ReviewQualityCheckFeature, SignalCallback,
};
use reviewcheck::services::feature_flags::FeatureFlagService;
use reviewcheck::services::product_classifier::ProductPageClassifier;
use reviewcheck::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use reviewcheck::stores::app_store::AppStore;
use reviewcheck::stores::browser_store::BrowserStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!();
    println!("ReviewCheck v{} — Demo Mode", env!("CARGO_PKG_VERSION"));
    println!();

    let mut engine = SettingsEngine::new("demo_settings.json".to_string());
    let settings = engine.load().unwrap_or_default();
    println!("Settings:");
    println!("  shopping experience enabled: {}", settings.shopping.experience_enabled);
    println!("  available debounce: {}ms", settings.shopping.available_debounce_ms);
    println!("  product sites: {}", settings.product_sites.len());

    let classifier = ProductPageClassifier::new(settings.product_sites.clone());
    let browser_store = Arc::new(BrowserStore::new(classifier));
    let app_store = Arc::new(AppStore::new());
    let flags = Arc::new(FeatureFlagService::from_settings(&settings));

    let on_availability: SignalCallback = Arc::new(|available| {
        println!("  -> review check available: {}", available);
    });
    let on_sheet: SignalCallback = Arc::new(|expanded| {
        println!("  -> shopping sheet expanded: {}", expanded);
    });

    let mut feature = ReviewQualityCheckFeature::new(
        Arc::clone(&browser_store),
        Arc::clone(&app_store),
        flags,
        on_availability,
        on_sheet,
    );
    feature.set_debounce_timeout(debounce_timeout_from_settings(&settings.shopping));
    feature.start();

    println!();
    println!("Opening a product page...");
    let tab = browser_store.create_tab(Some("https://www.amazon.com/dp/B01DEMO"), true);
    browser_store.set_tab_loading(&tab, true).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    println!("Page finished loading...");
    browser_store.set_tab_loading(&tab, false).unwrap();
    tokio::time::sleep(Duration::from_millis(400)).await;

    println!("Expanding the shopping sheet...");
    app_store.set_shopping_sheet_expanded(true);
    tokio::time::sleep(Duration::from_millis(100)).await;

    println!("Navigating away...");
    browser_store
        .update_tab_url(&tab, "https://example.com/article")
        .unwrap();
    app_store.set_shopping_sheet_expanded(false);
    tokio::time::sleep(Duration::from_millis(400)).await;

    feature.stop();
    println!();
    println!("Feature stopped. Demo complete.");
}
