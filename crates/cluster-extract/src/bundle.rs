//! Extracted feature bundles.

use cluster_types::{Counter, ScoredWord, Vector};

use crate::features::{FeatureKind, FeatureValue};

/// Every extracted feature for one cluster, keyed by feature name.
///
/// Built-in features are reachable through typed accessors; custom
/// provider output through [`FeatureBundle::get`]. Entries keep
/// provider registration order.
#[derive(Debug, Clone, Default)]
pub struct FeatureBundle<I> {
    features: Vec<(String, FeatureValue<I>)>,
}

impl<I> FeatureBundle<I> {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self {
            features: Vec::new(),
        }
    }

    /// Append a named feature value.
    pub fn push(&mut self, name: &str, value: FeatureValue<I>) {
        self.features.push((name.to_string(), value));
    }

    /// Look a feature up by name.
    pub fn get(&self, name: &str) -> Option<&FeatureValue<I>> {
        self.features
            .iter()
            .find(|(feature, _)| feature == name)
            .map(|(_, value)| value)
    }

    /// Names of every extracted feature, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|(name, _)| name.as_str())
    }

    /// Number of extracted features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Check whether the bundle is empty.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// The cluster's items, if extracted.
    pub fn items(&self) -> Option<&[I]> {
        match self.get(FeatureKind::Items.as_str()) {
            Some(FeatureValue::Items(items)) => Some(items),
            _ => None,
        }
    }

    /// The cluster's vectors, if extracted.
    pub fn vectors(&self) -> Option<&[Vector]> {
        match self.get(FeatureKind::Vectors.as_str()) {
            Some(FeatureValue::Vectors(vectors)) => Some(vectors),
            _ => None,
        }
    }

    /// The aggregate counter, if extracted.
    pub fn counter(&self) -> Option<&Counter> {
        match self.get(FeatureKind::Counter.as_str()) {
            Some(FeatureValue::Counter(counter)) => Some(counter),
            _ => None,
        }
    }

    /// The central item index, if extracted.
    pub fn center(&self) -> Option<usize> {
        match self.get(FeatureKind::Center.as_str()) {
            Some(FeatureValue::Center(index)) => Some(*index),
            _ => None,
        }
    }

    /// The ranked keywords, if extracted.
    pub fn keywords(&self) -> Option<&[ScoredWord]> {
        match self.get(FeatureKind::Keywords.as_str()) {
            Some(FeatureValue::Keywords(ranked)) => Some(ranked),
            _ => None,
        }
    }
}
