pub mod app_store;
pub mod browser_store;
