//! Trait-keyed property documents
//!
//! A [`TraitsData`] holds zero or more traits, each identified by a string
//! id, and each carrying its own string-keyed property map. The meaning of
//! a trait and its properties belongs to the trait schema, not to this
//! crate; here it is only a keyed document with `get`/`set`.
//!
//! Trait order is irrelevant: two documents with the same traits and
//! properties compare equal regardless of insertion order.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A set of trait ids.
pub type TraitSet = BTreeSet<String>;

/// One trait set per batch element.
pub type TraitSets = Vec<TraitSet>;

/// Trait-keyed property bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitsData {
    traits: BTreeMap<String, BTreeMap<String, Value>>,
}

impl TraitsData {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document imbued with the given traits and no properties.
    pub fn with_traits(trait_set: &TraitSet) -> Self {
        let mut data = Self::new();
        data.add_traits(trait_set);
        data
    }

    /// The ids of all traits held.
    pub fn trait_set(&self) -> TraitSet {
        self.traits.keys().cloned().collect()
    }

    /// Whether no traits are held.
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Whether the trait is held, with or without properties.
    pub fn has_trait(&self, trait_id: &str) -> bool {
        self.traits.contains_key(trait_id)
    }

    /// Add a trait. Existing properties for the trait are kept.
    pub fn add_trait(&mut self, trait_id: impl Into<String>) {
        self.traits.entry(trait_id.into()).or_default();
    }

    /// Add every trait in `trait_set`.
    pub fn add_traits(&mut self, trait_set: &TraitSet) {
        for trait_id in trait_set {
            self.add_trait(trait_id.as_str());
        }
    }

    /// Set a property, adding the trait if it is not yet held.
    pub fn set_trait_property(
        &mut self,
        trait_id: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) {
        self.traits
            .entry(trait_id.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Get a property, or `None` if the trait or the property is unset.
    pub fn get_trait_property(&self, trait_id: &str, key: &str) -> Option<&Value> {
        self.traits.get(trait_id).and_then(|props| props.get(key))
    }

    /// The property keys set for a trait, in key order.
    pub fn trait_property_keys(&self, trait_id: &str) -> Vec<&str> {
        self.traits
            .get(trait_id)
            .map(|props| props.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
