//! Storage trait for quote persistence

use crate::Result;
use async_trait::async_trait;
use mahfudzot_types::{Quote, QuoteRequest};

/// Quote store
///
/// Every listing is ordered by `created_at` descending. `limit <= 0` means the
/// default page size and a negative `offset` is treated as zero; clamping the
/// upper bound of `limit` is left to callers. Author and category filters are
/// case-insensitive substring matches.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Short name reported by the health endpoint.
    fn backend_name(&self) -> &'static str;

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Quote>>;
    async fn get_by_id(&self, id: i64) -> Result<Quote>;
    async fn get_random(&self) -> Result<Quote>;
    async fn filter_by_author(&self, author: &str, limit: i64, offset: i64) -> Result<Vec<Quote>>;
    async fn filter_by_category(
        &self,
        category: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Quote>>;
    async fn count_by_author(&self, author: &str) -> Result<i64>;
    async fn count_by_category(&self, category: &str) -> Result<i64>;
    async fn create(&self, req: QuoteRequest) -> Result<Quote>;
    async fn update(&self, id: i64, req: QuoteRequest) -> Result<Quote>;
    async fn delete(&self, id: i64) -> Result<()>;
    async fn count(&self) -> Result<i64>;
}
