//! In-memory quote store seeded from the embedded catalog

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use mahfudzot_core::pagination::{normalize_limit, normalize_offset};
use mahfudzot_core::{Quote, QuoteError, QuoteRequest, QuoteStore, Result, SeedQuote};
use rand::seq::SliceRandom;
use tokio::sync::RwLock;

/// Quote store backed by a `Vec` behind a single lock
pub struct MemoryQuoteStore {
    state: RwLock<MemoryState>,
}

struct MemoryState {
    quotes: Vec<Quote>,
    /// Never decremented, so deleted ids are not handed out again.
    next_id: i64,
}

impl MemoryQuoteStore {
    /// Empty store
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                quotes: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Store holding `catalog`, ids assigned from 1 in catalog order.
    ///
    /// Each entry is stamped one hour older than the previous one, so
    /// most-recent-first listings reproduce the catalog order.
    pub fn from_catalog(catalog: &[SeedQuote]) -> Self {
        let now = Utc::now();
        let quotes: Vec<Quote> = catalog
            .iter()
            .enumerate()
            .map(|(i, seed)| {
                let stamp = now - Duration::hours(i as i64);
                materialize(i as i64 + 1, seed.to_request(), stamp)
            })
            .collect();
        let next_id = quotes.len() as i64 + 1;

        Self {
            state: RwLock::new(MemoryState { quotes, next_id }),
        }
    }

    async fn filtered_page<F>(&self, limit: i64, offset: i64, pred: F) -> Vec<Quote>
    where
        F: Fn(&Quote) -> bool,
    {
        let state = self.state.read().await;
        let mut matches: Vec<&Quote> = state.quotes.iter().filter(|&q| pred(q)).collect();
        matches.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        matches
            .into_iter()
            .skip(normalize_offset(offset) as usize)
            .take(normalize_limit(limit) as usize)
            .cloned()
            .collect()
    }

    async fn count_where<F>(&self, pred: F) -> i64
    where
        F: Fn(&Quote) -> bool,
    {
        let state = self.state.read().await;
        state.quotes.iter().filter(|&q| pred(q)).count() as i64
    }
}

impl Default for MemoryQuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

fn materialize(id: i64, req: QuoteRequest, stamp: DateTime<Utc>) -> Quote {
    Quote {
        id,
        text_arabic: req.text_arabic,
        text_latin: req.text_latin,
        translation: req.translation,
        author: req.author,
        category: req.category,
        source: req.source,
        created_at: stamp,
        updated_at: stamp,
    }
}

/// Case-insensitive substring match
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Next `updated_at`, strictly after `previous` even if the clock has not moved.
fn bump(previous: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(previous + Duration::microseconds(1))
}

#[async_trait]
impl QuoteStore for MemoryQuoteStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Quote>> {
        Ok(self.filtered_page(limit, offset, |_| true).await)
    }

    async fn get_by_id(&self, id: i64) -> Result<Quote> {
        let state = self.state.read().await;
        state
            .quotes
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or(QuoteError::NotFound(id))
    }

    async fn get_random(&self) -> Result<Quote> {
        let state = self.state.read().await;
        state
            .quotes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(QuoteError::Empty)
    }

    async fn filter_by_author(&self, author: &str, limit: i64, offset: i64) -> Result<Vec<Quote>> {
        Ok(self
            .filtered_page(limit, offset, |q| contains_ci(&q.author, author))
            .await)
    }

    async fn filter_by_category(
        &self,
        category: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Quote>> {
        Ok(self
            .filtered_page(limit, offset, |q| {
                q.category
                    .as_deref()
                    .is_some_and(|c| contains_ci(c, category))
            })
            .await)
    }

    async fn count_by_author(&self, author: &str) -> Result<i64> {
        Ok(self.count_where(|q| contains_ci(&q.author, author)).await)
    }

    async fn count_by_category(&self, category: &str) -> Result<i64> {
        Ok(self
            .count_where(|q| {
                q.category
                    .as_deref()
                    .is_some_and(|c| contains_ci(c, category))
            })
            .await)
    }

    async fn create(&self, req: QuoteRequest) -> Result<Quote> {
        req.validate()?;

        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let quote = materialize(id, req, Utc::now());
        state.quotes.push(quote.clone());
        Ok(quote)
    }

    async fn update(&self, id: i64, req: QuoteRequest) -> Result<Quote> {
        req.validate()?;

        let mut state = self.state.write().await;
        let quote = state
            .quotes
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(QuoteError::NotFound(id))?;

        quote.apply(req);
        quote.updated_at = bump(quote.updated_at);
        Ok(quote.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut state = self.state.write().await;
        let pos = state
            .quotes
            .iter()
            .position(|q| q.id == id)
            .ok_or(QuoteError::NotFound(id))?;
        state.quotes.remove(pos);
        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.state.read().await.quotes.len() as i64)
    }
}
