//! Feature providers.
//!
//! Each provider computes one named feature over a cluster's unpacked
//! triples. The built-in set covers the items and vectors pass-throughs,
//! the aggregate counter, the central item index, and ranked keywords;
//! callers append custom providers without touching dispatch.

use std::fmt;
use std::sync::Arc;

use cluster_tokenize::{is_noun, PosTagger};
use cluster_types::{Counter, ScoredWord, Vector};

use crate::centroid::locate_center;
use crate::error::ExtractError;
use crate::keywords::score_keywords;

/// The built-in feature names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    /// Pass-through of the item sequence
    Items,
    /// Pass-through of the vector sequence
    Vectors,
    /// Pointwise sum of all per-item counters
    Counter,
    /// Index of the item closest to the cluster centroid
    Center,
    /// Top-K ranked (token, score) pairs
    Keywords,
}

impl FeatureKind {
    /// The feature's name as it appears in a bundle.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::Items => "items",
            FeatureKind::Vectors => "vectors",
            FeatureKind::Counter => "counter",
            FeatureKind::Center => "center",
            FeatureKind::Keywords => "keywords",
        }
    }

    /// All built-in kinds.
    pub fn all() -> &'static [FeatureKind] {
        &[
            FeatureKind::Items,
            FeatureKind::Vectors,
            FeatureKind::Counter,
            FeatureKind::Center,
            FeatureKind::Keywords,
        ]
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted feature value.
#[derive(Debug, Clone)]
pub enum FeatureValue<I> {
    /// The cluster's items, in input order
    Items(Vec<I>),
    /// The cluster's vectors, in input order
    Vectors(Vec<Vector>),
    /// Aggregate token counts
    Counter(Counter),
    /// Index of the most central item
    Center(usize),
    /// Ranked keywords
    Keywords(Vec<ScoredWord>),
}

/// A cluster's unpacked parallel slices, as handed to providers.
#[derive(Debug)]
pub struct ClusterView<'a, I> {
    /// Items in input order.
    pub items: &'a [I],
    /// Vectors in input order.
    pub vectors: &'a [Vector],
    /// Per-item counters in input order.
    pub counters: &'a [Counter],
    /// Total item count across the whole corpus.
    pub corpus_size: usize,
}

/// Computes one named feature for a cluster.
pub trait FeatureProvider<I>: Send + Sync {
    /// The feature's name in the resulting bundle.
    fn name(&self) -> &'static str;

    /// Extract the feature from the cluster view.
    fn extract(&self, view: &ClusterView<'_, I>) -> Result<FeatureValue<I>, ExtractError>;
}

/// Pass-through of the item sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemsProvider;

impl<I: Clone + Send + Sync> FeatureProvider<I> for ItemsProvider {
    fn name(&self) -> &'static str {
        FeatureKind::Items.as_str()
    }

    fn extract(&self, view: &ClusterView<'_, I>) -> Result<FeatureValue<I>, ExtractError> {
        Ok(FeatureValue::Items(view.items.to_vec()))
    }
}

/// Pass-through of the vector sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorsProvider;

impl<I: Send + Sync> FeatureProvider<I> for VectorsProvider {
    fn name(&self) -> &'static str {
        FeatureKind::Vectors.as_str()
    }

    fn extract(&self, view: &ClusterView<'_, I>) -> Result<FeatureValue<I>, ExtractError> {
        Ok(FeatureValue::Vectors(view.vectors.to_vec()))
    }
}

/// Pointwise sum of every per-item counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterProvider;

impl CounterProvider {
    fn aggregate(counters: &[Counter]) -> Counter {
        let mut aggregate = Counter::new();
        for counter in counters {
            aggregate.merge(counter);
        }
        aggregate
    }
}

impl<I: Send + Sync> FeatureProvider<I> for CounterProvider {
    fn name(&self) -> &'static str {
        FeatureKind::Counter.as_str()
    }

    fn extract(&self, view: &ClusterView<'_, I>) -> Result<FeatureValue<I>, ExtractError> {
        Ok(FeatureValue::Counter(Self::aggregate(view.counters)))
    }
}

/// Index of the item whose vector is closest to the cluster centroid.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterProvider;

impl<I: Send + Sync> FeatureProvider<I> for CenterProvider {
    fn name(&self) -> &'static str {
        FeatureKind::Center.as_str()
    }

    fn extract(&self, view: &ClusterView<'_, I>) -> Result<FeatureValue<I>, ExtractError> {
        let (_, index) = locate_center(view.vectors);
        Ok(FeatureValue::Center(index))
    }
}

/// Top-K keywords ranked over the aggregate counter.
pub struct KeywordsProvider {
    top_k: usize,
    tagger: Arc<dyn PosTagger>,
}

impl KeywordsProvider {
    /// Create a keywords provider with the given ranking depth.
    pub fn new(top_k: usize, tagger: Arc<dyn PosTagger>) -> Self {
        Self { top_k, tagger }
    }
}

impl<I: Send + Sync> FeatureProvider<I> for KeywordsProvider {
    fn name(&self) -> &'static str {
        FeatureKind::Keywords.as_str()
    }

    fn extract(&self, view: &ClusterView<'_, I>) -> Result<FeatureValue<I>, ExtractError> {
        let aggregate = CounterProvider::aggregate(view.counters);
        let ranked = score_keywords(
            &aggregate,
            view.vectors.len(),
            view.corpus_size,
            self.top_k,
            |token| is_noun(self.tagger.as_ref(), token),
        );
        Ok(FeatureValue::Keywords(ranked))
    }
}
