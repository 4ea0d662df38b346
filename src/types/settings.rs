use serde::{Deserialize, Serialize};

/// User-facing settings for the review quality check feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewCheckSettings {
    pub shopping: ShoppingSettings,
    pub product_sites: Vec<ProductSiteRule>,
}

/// Shopping experience settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingSettings {
    /// Master switch for the shopping experience (review quality check).
    pub experience_enabled: bool,
    /// Quiet period before reporting "available", to avoid flicker while a
    /// page settles.
    pub available_debounce_ms: u64,
    /// Delay before reporting "unavailable". Zero means next scheduler tick.
    pub unavailable_debounce_ms: u64,
}

/// Classifier rule: a page on `host` (or a subdomain of it) is a product page
/// when its path contains any of `path_markers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSiteRule {
    pub host: String,
    pub path_markers: Vec<String>,
}

impl Default for ShoppingSettings {
    fn default() -> Self {
        Self {
            experience_enabled: true,
            available_debounce_ms: 200,
            unavailable_debounce_ms: 0,
        }
    }
}

impl Default for ReviewCheckSettings {
    fn default() -> Self {
        Self {
            shopping: ShoppingSettings::default(),
            product_sites: default_product_sites(),
        }
    }
}

/// Built-in rules for the shopping sites the review checker understands.
pub fn default_product_sites() -> Vec<ProductSiteRule> {
    vec![
        ProductSiteRule {
            host: "amazon.com".to_string(),
            path_markers: vec!["/dp/".to_string(), "/gp/product/".to_string()],
        },
        ProductSiteRule {
            host: "walmart.com".to_string(),
            path_markers: vec!["/ip/".to_string()],
        },
        ProductSiteRule {
            host: "bestbuy.com".to_string(),
            path_markers: vec!["/site/".to_string()],
        },
    ]
}
