//! Typed feature access table.
//!
//! Replaces dynamic per-user feature gating from an untyped YAML mapping
//! with an explicit table checked at dispatch time. Semantics: a feature
//! absent from the table is available to everyone; a listed feature is
//! available only to the users named for it.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Feature name → users allowed to see it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessTable {
    features: BTreeMap<String, BTreeSet<String>>,
}

impl AccessTable {
    /// Empty table: every feature is available to every user
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from its YAML mapping form
    /// (`feature-name: [user_a, user_b]`)
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Restrict a feature to an explicit user
    pub fn grant(&mut self, feature: impl Into<String>, user: impl Into<String>) {
        self.features
            .entry(feature.into())
            .or_default()
            .insert(user.into());
    }

    /// Whether the given user may see the given feature
    pub fn allows(&self, feature: &str, user: &str) -> bool {
        match self.features.get(feature) {
            Some(users) => users.contains(user),
            None => true,
        }
    }

    /// Features the table explicitly restricts
    pub fn restricted_features(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }
}
