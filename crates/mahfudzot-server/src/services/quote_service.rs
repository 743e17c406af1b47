//! Quote service: pagination and totals on top of a [`QuoteStore`]

use mahfudzot_core::{seed_store, PageRequest, Quote, QuoteRequest, QuoteStore, Result, SeedQuote};
use std::sync::Arc;
use tracing::{debug, info};

/// One page of results plus the total number of matching quotes
#[derive(Debug, Clone)]
pub struct QuotePage {
    pub quotes: Vec<Quote>,
    pub total: i64,
    pub page: PageRequest,
}

pub struct QuoteService {
    store: Arc<dyn QuoteStore>,
}

impl QuoteService {
    pub fn new(store: Arc<dyn QuoteStore>) -> Self {
        Self { store }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    pub async fn list(&self, page: PageRequest) -> Result<QuotePage> {
        let quotes = self.store.list(page.limit_i64(), page.offset()).await?;
        let total = self.store.count().await?;
        Ok(QuotePage {
            quotes,
            total,
            page,
        })
    }

    pub async fn by_author(&self, author: &str, page: PageRequest) -> Result<QuotePage> {
        debug!("Filtering by author={:?}, page={:?}", author, page);
        let quotes = self
            .store
            .filter_by_author(author, page.limit_i64(), page.offset())
            .await?;
        let total = self.store.count_by_author(author).await?;
        Ok(QuotePage {
            quotes,
            total,
            page,
        })
    }

    pub async fn by_category(&self, category: &str, page: PageRequest) -> Result<QuotePage> {
        debug!("Filtering by category={:?}, page={:?}", category, page);
        let quotes = self
            .store
            .filter_by_category(category, page.limit_i64(), page.offset())
            .await?;
        let total = self.store.count_by_category(category).await?;
        Ok(QuotePage {
            quotes,
            total,
            page,
        })
    }

    pub async fn get(&self, id: i64) -> Result<Quote> {
        self.store.get_by_id(id).await
    }

    pub async fn random(&self) -> Result<Quote> {
        self.store.get_random().await
    }

    pub async fn create(&self, req: QuoteRequest) -> Result<Quote> {
        let quote = self.store.create(req).await?;
        info!("Created quote {} by {}", quote.id, quote.author);
        Ok(quote)
    }

    pub async fn update(&self, id: i64, req: QuoteRequest) -> Result<Quote> {
        let quote = self.store.update(id, req).await?;
        info!("Updated quote {}", id);
        Ok(quote)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.store.delete(id).await?;
        info!("Deleted quote {}", id);
        Ok(())
    }

    /// Seed from `catalog` only if the store holds no quotes.
    ///
    /// Returns the number inserted, or `None` when the store already had data.
    pub async fn seed_if_empty(&self, catalog: &[SeedQuote]) -> Result<Option<usize>> {
        let existing = self.store.count().await?;
        if existing > 0 {
            debug!("Store already holds {} quotes, skipping seed", existing);
            return Ok(None);
        }
        seed_store(self.store.as_ref(), catalog).await.map(Some)
    }
}
