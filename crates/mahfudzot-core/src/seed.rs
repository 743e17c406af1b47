//! One-shot seeding of a store from a catalog

use crate::{QuoteError, QuoteStore, Result, SeedQuote};
use tracing::{info, warn};

/// Insert every catalog entry through [`QuoteStore::create`].
///
/// Individual failures are logged and skipped. Returns the number of entries
/// inserted, and fails only when none of them could be.
pub async fn seed_store(store: &dyn QuoteStore, catalog: &[SeedQuote]) -> Result<usize> {
    info!("Seeding {} store with {} quotes", store.backend_name(), catalog.len());

    let mut inserted = 0;
    for (i, entry) in catalog.iter().enumerate() {
        match store.create(entry.to_request()).await {
            Ok(_) => inserted += 1,
            Err(e) => warn!("Failed to insert quote {}: {}", i + 1, e),
        }
    }

    info!("Seeded {} out of {} quotes", inserted, catalog.len());

    if inserted == 0 {
        return Err(QuoteError::Storage("failed to seed any quotes".to_string()));
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use mahfudzot_types::{Quote, QuoteRequest};
    use std::sync::Mutex;

    /// Accepts creates unless the author is "reject"; nothing else is used.
    #[derive(Default)]
    struct RecordingStore {
        created: Mutex<Vec<QuoteRequest>>,
    }

    #[async_trait]
    impl QuoteStore for RecordingStore {
        fn backend_name(&self) -> &'static str {
            "recording"
        }

        async fn list(&self, _limit: i64, _offset: i64) -> Result<Vec<Quote>> {
            Ok(vec![])
        }

        async fn get_by_id(&self, id: i64) -> Result<Quote> {
            Err(QuoteError::NotFound(id))
        }

        async fn get_random(&self) -> Result<Quote> {
            Err(QuoteError::Empty)
        }

        async fn filter_by_author(&self, _: &str, _: i64, _: i64) -> Result<Vec<Quote>> {
            Ok(vec![])
        }

        async fn filter_by_category(&self, _: &str, _: i64, _: i64) -> Result<Vec<Quote>> {
            Ok(vec![])
        }

        async fn count_by_author(&self, _: &str) -> Result<i64> {
            Ok(0)
        }

        async fn count_by_category(&self, _: &str) -> Result<i64> {
            Ok(0)
        }

        async fn create(&self, req: QuoteRequest) -> Result<Quote> {
            if req.author == "reject" {
                return Err(QuoteError::Storage("rejected".to_string()));
            }
            let mut created = self.created.lock().unwrap();
            created.push(req.clone());
            let now = Utc::now();
            Ok(Quote {
                id: created.len() as i64,
                text_arabic: req.text_arabic,
                text_latin: req.text_latin,
                translation: req.translation,
                author: req.author,
                category: req.category,
                source: req.source,
                created_at: now,
                updated_at: now,
            })
        }

        async fn update(&self, id: i64, _req: QuoteRequest) -> Result<Quote> {
            Err(QuoteError::NotFound(id))
        }

        async fn delete(&self, id: i64) -> Result<()> {
            Err(QuoteError::NotFound(id))
        }

        async fn count(&self) -> Result<i64> {
            Ok(self.created.lock().unwrap().len() as i64)
        }
    }

    fn entry(author: &'static str) -> SeedQuote {
        SeedQuote {
            text_arabic: "نص",
            text_latin: "",
            translation: "",
            author,
            category: "",
            source: "",
        }
    }

    #[tokio::test]
    async fn test_seed_counts_partial_success() {
        let store = RecordingStore::default();
        let catalog = [entry("a"), entry("reject"), entry("b")];

        let inserted = seed_store(&store, &catalog).await.unwrap();
        assert_eq!(inserted, 2);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_seed_fails_when_nothing_inserted() {
        let store = RecordingStore::default();
        let catalog = [entry("reject"), entry("reject")];

        let err = tokio_test::assert_err!(seed_store(&store, &catalog).await);
        assert!(matches!(err, QuoteError::Storage(_)));
    }

    #[tokio::test]
    async fn test_seed_full_catalog() {
        let store = RecordingStore::default();
        let inserted = tokio_test::assert_ok!(seed_store(&store, crate::SEED_CATALOG).await);
        assert_eq!(inserted, crate::SEED_CATALOG.len());
    }
}
