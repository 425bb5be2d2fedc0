//! # cluster-extract
//!
//! Summary feature extraction over pre-formed clusters.
//!
//! Given a cluster's (item, vector, counter) triples, the [`Extractor`]
//! runs every registered [`FeatureProvider`] and collects the results
//! into a [`FeatureBundle`]: the items and vectors passed through, the
//! pointwise-summed counter, the index of the most central item, and
//! the top-K keywords ranked by a term-frequency / inverse-cluster-
//! frequency score.
//!
//! Providers are registered declaratively at construction; adding a
//! feature never touches the unpacking or dispatch logic, and the
//! process holds no global mutable registry.

pub mod bundle;
pub mod centroid;
pub mod error;
pub mod extractor;
pub mod features;
pub mod keywords;

pub use bundle::FeatureBundle;
pub use centroid::locate_center;
pub use error::ExtractError;
pub use extractor::Extractor;
pub use features::{
    CenterProvider, ClusterView, CounterProvider, FeatureKind, FeatureProvider, FeatureValue,
    ItemsProvider, KeywordsProvider, VectorsProvider,
};
pub use keywords::score_keywords;
