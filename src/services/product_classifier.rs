//! Product page classification.
//!
//! Decides whether a URL points at a shopping product page. A URL matches
//! when its host is one of the configured shopping sites (or a subdomain of
//! one) and its path contains one of that site's product path markers, e.g.
//! `/dp/` on amazon.com or `/ip/` on walmart.com.

use crate::types::settings::{default_product_sites, ProductSiteRule};

/// Classifies URLs as product pages based on host + path-marker rules.
#[derive(Debug, Clone)]
pub struct ProductPageClassifier {
    rules: Vec<ProductSiteRule>,
}

impl Default for ProductPageClassifier {
    fn default() -> Self {
        Self::new(default_product_sites())
    }
}

impl ProductPageClassifier {
    pub fn new(rules: Vec<ProductSiteRule>) -> Self {
        Self { rules }
    }

    /// Returns true if `url` is a product page on a known shopping site.
    pub fn is_product_url(&self, url: &str) -> bool {
        let Some((host, path)) = split_host_path(url) else {
            return false;
        };
        self.rules.iter().any(|rule| {
            host_matches(host, &rule.host)
                && rule.path_markers.iter().any(|marker| path.contains(marker.as_str()))
        })
    }
}

/// Splits a URL into host and path, without a full URL parser. Returns `None`
/// for URLs that carry no host (e.g. `about:blank`).
fn split_host_path(url: &str) -> Option<(&str, &str)> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let (authority, path) = match rest.find('/') {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, "/"),
    };
    // Drop userinfo and port.
    let host = authority.rsplit('@').next().unwrap_or(authority);
    let host = host.split(':').next().unwrap_or(host);
    if host.is_empty() {
        return None;
    }
    Some((host, path))
}

/// Case-insensitive host match: exact or subdomain of `site`.
fn host_matches(host: &str, site: &str) -> bool {
    let host = host.to_ascii_lowercase();
    let site = site.to_ascii_lowercase();
    host == site || host.ends_with(&format!(".{}", site))
}
