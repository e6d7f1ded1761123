//! Search service tying together store, embedder, and ranking engine.
//!
//! The service owns the collaborators as injected `Arc`s and is the only
//! place configuration is resolved: the ranking engine itself stays a pure
//! function with an explicit `top_k`.

use std::sync::Arc;

use tracing::debug;

use crate::config::SearchConfig;
use crate::document::{Document, DocumentDraft};
use crate::embedding::Embedder;
use crate::error::{CairnError, Result};
use crate::ranking::{RankedResult, rank};
use crate::storage::DocumentStore;

/// High-level semantic search over a document store.
#[derive(Debug, Clone)]
pub struct SearchService {
    store: Arc<dyn DocumentStore>,
    embedder: Arc<dyn Embedder>,
    config: SearchConfig,
}

impl SearchService {
    /// Create a new search service.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        embedder: Arc<dyn Embedder>,
        config: SearchConfig,
    ) -> Self {
        Self {
            store,
            embedder,
            config,
        }
    }

    /// Embed and persist a batch of document drafts.
    ///
    /// Returns the created documents with their assigned ids, in input order.
    pub async fn index(&self, drafts: Vec<DocumentDraft>) -> Result<Vec<Document>> {
        if drafts.is_empty() {
            return Ok(Vec::new());
        }

        let texts: Vec<&str> = drafts.iter().map(|draft| draft.content.as_str()).collect();
        let mut embeddings = self.embedder.embed(&texts).await?;
        if embeddings.len() != drafts.len() {
            return Err(CairnError::embedding(format!(
                "embedder returned {} vectors for {} texts",
                embeddings.len(),
                drafts.len()
            )));
        }

        if self.config.normalize_on_ingest {
            for embedding in &mut embeddings {
                embedding.normalize();
            }
        }

        debug!(count = drafts.len(), embedder = self.embedder.name(), "indexing documents");
        self.store
            .create(drafts.into_iter().zip(embeddings).collect())
    }

    /// Rank stored documents against a text query.
    ///
    /// `top_k` falls back to the configured default when not supplied. An
    /// empty corpus returns an empty result without invoking the embedder.
    pub async fn search(&self, query: &str, top_k: Option<usize>) -> Result<Vec<RankedResult>> {
        let top_k = top_k.unwrap_or(self.config.default_top_k);

        let documents = self.store.fetch_all()?;
        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let query_vector = self
            .embedder
            .embed(&[query])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| CairnError::embedding("embedder returned no vector for query"))?;

        debug!(corpus = documents.len(), top_k, "ranking query against corpus");
        rank(&query_vector, &documents, top_k)
    }

    /// Fetch a single document by id.
    pub fn get_document(&self, id: u64) -> Result<Option<Document>> {
        self.store.get_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::storage::memory::MemoryDocumentStore;
    use crate::vector::Vector;

    /// Test embedder that returns scripted vectors and counts calls.
    #[derive(Debug)]
    struct ScriptedEmbedder {
        outputs: parking_lot::Mutex<Vec<Vec<Vector>>>,
        calls: AtomicUsize,
        dimension: usize,
    }

    impl ScriptedEmbedder {
        fn new(dimension: usize, outputs: Vec<Vec<Vector>>) -> Self {
            let mut outputs = outputs;
            outputs.reverse();
            Self {
                outputs: parking_lot::Mutex::new(outputs),
                calls: AtomicUsize::new(0),
                dimension,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Embedder for ScriptedEmbedder {
        async fn embed(&self, _texts: &[&str]) -> Result<Vec<Vector>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outputs
                .lock()
                .pop()
                .ok_or_else(|| CairnError::embedding("no scripted output left"))
        }

        fn dimension(&self) -> usize {
            self.dimension
        }

        fn name(&self) -> &str {
            "ScriptedEmbedder"
        }
    }

    fn drafts(titles: &[&str]) -> Vec<DocumentDraft> {
        titles
            .iter()
            .map(|title| DocumentDraft::new(*title, *title))
            .collect()
    }

    #[tokio::test]
    async fn test_index_assigns_ids_and_search_ranks() {
        let embedder = Arc::new(ScriptedEmbedder::new(
            3,
            vec![
                vec![
                    Vector::new(vec![1.0, 0.0, 0.0]),
                    Vector::new(vec![0.0, 1.0, 0.0]),
                    Vector::new(vec![0.7071, 0.7071, 0.0]),
                ],
                vec![Vector::new(vec![1.0, 0.0, 0.0])],
            ],
        ));
        let service = SearchService::new(
            Arc::new(MemoryDocumentStore::new()),
            embedder,
            SearchConfig::default(),
        );

        let created = service.index(drafts(&["a", "b", "c"])).await.unwrap();
        assert_eq!(created.len(), 3);
        assert_eq!(created[0].id, 1);

        let results = service.search("query", Some(2)).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, 1);
        assert_eq!(results[1].id, 3);
        assert!((results[1].score - 0.7071).abs() < 1e-3);
    }

    #[tokio::test]
    async fn test_search_empty_corpus_skips_embedder() {
        let embedder = Arc::new(ScriptedEmbedder::new(3, vec![]));
        let service = SearchService::new(
            Arc::new(MemoryDocumentStore::new()),
            Arc::clone(&embedder) as Arc<dyn Embedder>,
            SearchConfig::default(),
        );

        let results = service.search("anything", None).await.unwrap();
        assert!(results.is_empty());
        assert_eq!(embedder.call_count(), 0);
    }

    #[tokio::test]
    async fn test_search_uses_configured_default_top_k() {
        let outputs = vec![
            (0..4)
                .map(|i| {
                    let mut data = vec![0.0; 4];
                    data[i] = 1.0;
                    Vector::new(data)
                })
                .collect(),
            vec![Vector::new(vec![1.0, 0.0, 0.0, 0.0])],
        ];
        let embedder = Arc::new(ScriptedEmbedder::new(4, outputs));
        let config = SearchConfig {
            default_top_k: 2,
            ..SearchConfig::default()
        };
        let service = SearchService::new(Arc::new(MemoryDocumentStore::new()), embedder, config);

        service.index(drafts(&["a", "b", "c", "d"])).await.unwrap();
        let results = service.search("query", None).await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_search_dimension_mismatch_fails_whole_call() {
        let embedder = Arc::new(ScriptedEmbedder::new(
            3,
            vec![
                vec![Vector::new(vec![1.0, 0.0, 0.0])],
                // Query vector of the wrong dimensionality.
                vec![Vector::new(vec![1.0, 0.0])],
            ],
        ));
        let service = SearchService::new(
            Arc::new(MemoryDocumentStore::new()),
            embedder,
            SearchConfig::default(),
        );

        service.index(drafts(&["a"])).await.unwrap();
        let result = service.search("query", None).await;
        assert!(matches!(
            result,
            Err(CairnError::DimensionMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn test_index_normalizes_when_configured() {
        let embedder = Arc::new(ScriptedEmbedder::new(
            2,
            vec![vec![Vector::new(vec![3.0, 4.0])]],
        ));
        let store = Arc::new(MemoryDocumentStore::new());
        let service = SearchService::new(
            Arc::clone(&store) as Arc<dyn DocumentStore>,
            embedder,
            SearchConfig::default(),
        );

        service.index(drafts(&["a"])).await.unwrap();
        let stored = store.get_by_id(1).unwrap().unwrap();
        assert!((stored.embedding.norm() - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_index_keeps_raw_vectors_when_normalization_disabled() {
        let embedder = Arc::new(ScriptedEmbedder::new(
            2,
            vec![vec![Vector::new(vec![3.0, 4.0])]],
        ));
        let store = Arc::new(MemoryDocumentStore::new());
        let config = SearchConfig {
            normalize_on_ingest: false,
            ..SearchConfig::default()
        };
        let service = SearchService::new(
            Arc::clone(&store) as Arc<dyn DocumentStore>,
            embedder,
            config,
        );

        service.index(drafts(&["a"])).await.unwrap();
        let stored = store.get_by_id(1).unwrap().unwrap();
        assert_eq!(stored.embedding.data, vec![3.0, 4.0]);
    }

    #[tokio::test]
    async fn test_index_empty_batch_is_noop() {
        let embedder = Arc::new(ScriptedEmbedder::new(2, vec![]));
        let service = SearchService::new(
            Arc::new(MemoryDocumentStore::new()),
            Arc::clone(&embedder) as Arc<dyn Embedder>,
            SearchConfig::default(),
        );

        let created = service.index(Vec::new()).await.unwrap();
        assert!(created.is_empty());
        assert_eq!(embedder.call_count(), 0);
    }

    #[tokio::test]
    async fn test_index_rejects_short_embedder_output() {
        let embedder = Arc::new(ScriptedEmbedder::new(
            2,
            vec![vec![Vector::new(vec![1.0, 0.0])]],
        ));
        let service = SearchService::new(
            Arc::new(MemoryDocumentStore::new()),
            embedder,
            SearchConfig::default(),
        );

        let result = service.index(drafts(&["a", "b"])).await;
        assert!(matches!(result, Err(CairnError::Embedding(_))));
    }

    #[tokio::test]
    async fn test_get_document() {
        let embedder = Arc::new(ScriptedEmbedder::new(
            2,
            vec![vec![Vector::new(vec![1.0, 0.0])]],
        ));
        let service = SearchService::new(
            Arc::new(MemoryDocumentStore::new()),
            embedder,
            SearchConfig::default(),
        );

        service.index(drafts(&["a"])).await.unwrap();
        assert_eq!(service.get_document(1).unwrap().unwrap().title, "a");
        assert!(service.get_document(99).unwrap().is_none());
    }
}
