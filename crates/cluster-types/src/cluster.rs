//! Cluster data types and the cluster-lookup boundary.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::counter::Counter;

/// A unique identifier for a cluster.
pub type ClusterId = u64;

/// A numeric vector representing one item.
///
/// Dimensionality is fixed per cluster; the semantics are owned by the
/// external collaborator that built the clusters.
pub type Vector = Vec<f32>;

/// Anything the pipeline can treat as a clustered item.
///
/// Items are opaque: the pipeline only needs them renderable as text
/// for tokenization, and passes them through otherwise unchanged.
pub trait Render {
    /// Render the item as the text to tokenize.
    fn render(&self) -> String;
}

impl Render for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl Render for &str {
    fn render(&self) -> String {
        (*self).to_string()
    }
}

impl Render for Cow<'_, str> {
    fn render(&self) -> String {
        self.clone().into_owned()
    }
}

/// One clustered item with its vector and token counts.
#[derive(Debug, Clone)]
pub struct ClusterEntry<I> {
    /// The opaque item.
    pub item: I,
    /// The item's numeric vector.
    pub vector: Vector,
    /// Token frequencies for the item's rendered text.
    pub counter: Counter,
}

impl<I> ClusterEntry<I> {
    /// Create a new cluster entry.
    pub fn new(item: I, vector: Vector, counter: Counter) -> Self {
        Self {
            item,
            vector,
            counter,
        }
    }
}

/// The materialized (item, vector, counter) triples for one cluster.
///
/// A valid dump has at least one entry and uniform vector width.
pub type ClusterDump<I> = Vec<ClusterEntry<I>>;

/// Input boundary owned by the external clustering collaborator.
///
/// The pipeline reads dumps and the corpus size through this trait and
/// never mutates them.
pub trait ClusterStore<I>: Send + Sync {
    /// Fetch the dump for a cluster id, if the cluster exists.
    fn dump(&self, id: ClusterId) -> Option<ClusterDump<I>>;

    /// Total number of items across the whole corpus.
    fn total_items(&self) -> usize;
}

/// Simple map-backed [`ClusterStore`].
///
/// Useful for tests and for callers that materialize clusters up front.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore<I> {
    clusters: HashMap<ClusterId, ClusterDump<I>>,
}

impl<I> InMemoryStore<I> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            clusters: HashMap::new(),
        }
    }

    /// Insert or replace the dump for a cluster id.
    pub fn insert(&mut self, id: ClusterId, dump: ClusterDump<I>) {
        self.clusters.insert(id, dump);
    }

    /// Number of stored clusters.
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }
}

impl<I: Clone + Send + Sync> ClusterStore<I> for InMemoryStore<I> {
    fn dump(&self, id: ClusterId) -> Option<ClusterDump<I>> {
        self.clusters.get(&id).cloned()
    }

    fn total_items(&self) -> usize {
        self.clusters.values().map(|dump| dump.len()).sum()
    }
}
