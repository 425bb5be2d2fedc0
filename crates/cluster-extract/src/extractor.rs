//! Cluster feature extraction.

use std::sync::Arc;

use regex::Regex;
use tracing::debug;

use cluster_tokenize::{
    FusionTokenizer, PosTagger, SimpleTokenizer, Stopwords, Tokenizer,
};
use cluster_types::{ClusterId, ClusterStore, Counter, Render, SummaryConfig};

use crate::bundle::FeatureBundle;
use crate::error::ExtractError;
use crate::features::{
    CenterProvider, ClusterView, CounterProvider, FeatureProvider, ItemsProvider,
    KeywordsProvider, VectorsProvider,
};

/// Extracts summary features from pre-formed clusters.
///
/// Holds the cluster-lookup boundary, the tokenizer, and the provider
/// list; every collaborator is injected at construction and the
/// extractor itself is stateless between [`Extractor::dump`] calls, so
/// concurrent dumps over different cluster ids are safe.
pub struct Extractor<I: 'static> {
    store: Arc<dyn ClusterStore<I>>,
    tokenizer: Arc<dyn Tokenizer>,
    providers: Vec<Box<dyn FeatureProvider<I>>>,
    stopwords: Stopwords,
    word_chars: Regex,
}

impl<I: 'static> std::fmt::Debug for Extractor<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("providers", &self.providers.len())
            .field("word_chars", &self.word_chars.as_str())
            .finish_non_exhaustive()
    }
}

impl<I: Render + Clone + Send + Sync + 'static> Extractor<I> {
    /// Create an extractor with the full fusion tokenizer and the
    /// built-in provider set.
    pub fn new(
        store: Arc<dyn ClusterStore<I>>,
        tagger: Arc<dyn PosTagger>,
        config: &SummaryConfig,
    ) -> Result<Self, ExtractError> {
        let stopwords = match &config.tokenizer.stopwords {
            Some(words) => Stopwords::from_list(words),
            None => Stopwords::default(),
        };
        let tokenizer: Arc<dyn Tokenizer> = Arc::new(FusionTokenizer::new(
            tagger.clone(),
            config.tokenizer.fusion_patterns.clone(),
            stopwords.clone(),
        ));
        let word_chars = Regex::new(&config.tokenizer.word_pattern).map_err(|err| {
            ExtractError::InvalidConfig(format!(
                "bad word pattern {:?}: {err}",
                config.tokenizer.word_pattern
            ))
        })?;

        Ok(Self {
            store,
            tokenizer,
            providers: Self::builtin_providers(config.keywords.top_k, tagger),
            stopwords,
            word_chars,
        })
    }

    /// Swap in the lower-cost simple tokenizer.
    pub fn with_simple_tokenizer(mut self) -> Self {
        self.tokenizer = Arc::new(SimpleTokenizer::new(self.stopwords.clone()));
        self
    }

    /// Swap in a caller-provided tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Append a custom feature provider.
    pub fn with_provider(mut self, provider: Box<dyn FeatureProvider<I>>) -> Self {
        self.providers.push(provider);
        self
    }

    /// The declarative registration list for the built-in features.
    fn builtin_providers(
        top_k: usize,
        tagger: Arc<dyn PosTagger>,
    ) -> Vec<Box<dyn FeatureProvider<I>>> {
        vec![
            Box::new(ItemsProvider),
            Box::new(VectorsProvider),
            Box::new(CounterProvider),
            Box::new(CenterProvider),
            Box::new(KeywordsProvider::new(top_k, tagger)),
        ]
    }

    /// Extract every registered feature for one cluster.
    ///
    /// Fails with [`ExtractError::EmptyCluster`] when the cluster id has
    /// no members; the dump itself is only read, never mutated.
    pub fn dump(&self, cluster_id: ClusterId) -> Result<FeatureBundle<I>, ExtractError> {
        let entries = self
            .store
            .dump(cluster_id)
            .filter(|dump| !dump.is_empty())
            .ok_or(ExtractError::EmptyCluster(cluster_id))?;

        let mut items = Vec::with_capacity(entries.len());
        let mut vectors = Vec::with_capacity(entries.len());
        let mut counters = Vec::with_capacity(entries.len());
        for entry in entries {
            items.push(entry.item);
            vectors.push(entry.vector);
            counters.push(entry.counter);
        }

        let view = ClusterView {
            items: &items,
            vectors: &vectors,
            counters: &counters,
            corpus_size: self.store.total_items(),
        };

        let mut bundle = FeatureBundle::new();
        for provider in &self.providers {
            bundle.push(provider.name(), provider.extract(&view)?);
        }

        debug!(
            cluster_id,
            members = items.len(),
            features = bundle.len(),
            "Extracted cluster features"
        );
        Ok(bundle)
    }

    /// Tokenize text and count the tokens eligible as vocabulary.
    ///
    /// Stopwords and tokens without a single word character (per the
    /// configured pattern) are rejected, so symbol-only tokens never
    /// enter a counter. This is the pipeline that produces the
    /// vocabularies stored in cluster dumps.
    pub fn count_words(&self, text: &str) -> Result<Counter, ExtractError> {
        let mut counter = Counter::new();
        for token in self.tokenizer.tokenize(text)? {
            if !self.stopwords.contains(&token) && self.word_chars.is_match(&token) {
                counter.increment(&token);
            }
        }
        Ok(counter)
    }

    /// Count words for one item's rendered text.
    pub fn item_counter(&self, item: &I) -> Result<Counter, ExtractError> {
        self.count_words(&item.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cluster_tokenize::LexiconTagger as Lexicon;
    use cluster_types::{ClusterEntry, InMemoryStore};

    fn store() -> Arc<InMemoryStore<String>> {
        let mut store = InMemoryStore::new();
        store.insert(
            1,
            vec![
                ClusterEntry::new(
                    "storage engine design".to_string(),
                    vec![0.1, 0.2],
                    ["storage", "engine", "design"].into_iter().collect(),
                ),
                ClusterEntry::new(
                    "storage compaction".to_string(),
                    vec![0.3, 0.4],
                    ["storage", "compaction"].into_iter().collect(),
                ),
            ],
        );
        store.insert(
            2,
            vec![ClusterEntry::new(
                "unrelated note".to_string(),
                vec![0.9, 1.0],
                ["unrelated", "note"].into_iter().collect(),
            )],
        );
        Arc::new(store)
    }

    fn extractor() -> Extractor<String> {
        Extractor::new(
            store(),
            Arc::new(Lexicon::default()),
            &SummaryConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_dump_empty_cluster_errors() {
        let err = extractor().dump(99).unwrap_err();
        match err {
            ExtractError::EmptyCluster(id) => assert_eq!(id, 99),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dump_preserves_item_order() {
        let bundle = extractor().dump(1).unwrap();
        let items = bundle.items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], "storage engine design");
        assert_eq!(items[1], "storage compaction");
    }

    #[test]
    fn test_count_words_rejects_symbols_and_stopwords() {
        let counter = extractor()
            .count_words("the storage --- engine && storage")
            .unwrap();
        assert_eq!(counter.get("storage"), 2);
        assert_eq!(counter.get("engine"), 1);
        assert_eq!(counter.get("the"), 0);
        assert_eq!(counter.get("---"), 0);
        assert_eq!(counter.get("&&"), 0);
    }

    #[test]
    fn test_item_counter_uses_rendered_text() {
        let counter = extractor()
            .item_counter(&"compaction compaction".to_string())
            .unwrap();
        assert_eq!(counter.get("compaction"), 2);
    }

    #[test]
    fn test_simple_tokenizer_skips_quotation_handling() {
        let counter = extractor()
            .with_simple_tokenizer()
            .count_words("said 'fragile cargo' twice")
            .unwrap();
        // No masking: the quoted words count separately, quotes and all.
        assert_eq!(counter.get("fragile cargo"), 0);
        assert_eq!(counter.get("'fragile"), 1);
        assert_eq!(counter.get("cargo'"), 1);
    }

    #[test]
    fn test_caller_provided_tokenizer() {
        let tokenizer: Arc<dyn Tokenizer> =
            Arc::new(SimpleTokenizer::new(Stopwords::empty()));
        let counter = extractor()
            .with_tokenizer(tokenizer)
            .count_words("the the word")
            .unwrap();
        // The replacement tokenizer kept stopwords; counting still
        // applies the extractor's own stopword set.
        assert_eq!(counter.get("the"), 0);
        assert_eq!(counter.get("word"), 1);
    }

    #[test]
    fn test_invalid_word_pattern_is_config_error() {
        let mut config = SummaryConfig::default();
        config.tokenizer.word_pattern = "[unclosed".to_string();
        let err = Extractor::<String>::new(store(), Arc::new(Lexicon::default()), &config)
            .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)));
    }
}
