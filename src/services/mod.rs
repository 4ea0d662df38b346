pub mod feature_flags;
pub mod product_classifier;
pub mod settings_engine;
