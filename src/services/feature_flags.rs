//! Feature flag service.
//!
//! Exposes the switches that gate the shopping experience. Backed by atomics
//! so an `Arc`-shared instance can be flipped at runtime (e.g. from a
//! settings screen) while the feature reads it.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::types::settings::ReviewCheckSettings;

/// Trait defining the feature flag interface.
pub trait FeatureFlagServiceTrait {
    fn is_shopping_experience_enabled(&self) -> bool;
}

/// Runtime-togglable feature flags.
pub struct FeatureFlagService {
    shopping_experience: AtomicBool,
}

impl FeatureFlagService {
    pub fn new(shopping_experience_enabled: bool) -> Self {
        Self {
            shopping_experience: AtomicBool::new(shopping_experience_enabled),
        }
    }

    /// Builds flags from loaded settings.
    pub fn from_settings(settings: &ReviewCheckSettings) -> Self {
        Self::new(settings.shopping.experience_enabled)
    }

    pub fn set_shopping_experience_enabled(&self, enabled: bool) {
        self.shopping_experience.store(enabled, Ordering::Relaxed);
    }
}

impl FeatureFlagServiceTrait for FeatureFlagService {
    fn is_shopping_experience_enabled(&self) -> bool {
        self.shopping_experience.load(Ordering::Relaxed)
    }
}
