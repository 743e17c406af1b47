//! PostgreSQL quote store

use crate::config::DatabaseConfig;
use async_trait::async_trait;
use mahfudzot_core::pagination::{normalize_limit, normalize_offset};
use mahfudzot_core::{Quote, QuoteError, QuoteRequest, QuoteStore, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

/// Prefixes `$tail` with the full column list of the quotes table.
macro_rules! select_quotes {
    ($tail:literal) => {
        concat!(
            "SELECT id, text_arabic, text_latin, translation, author, category, source, ",
            "created_at, updated_at FROM quotes ",
            $tail
        )
    };
}

const RETURNING_COLUMNS: &str =
    "id, text_arabic, text_latin, translation, author, category, source, created_at, updated_at";

pub struct PgQuoteStore {
    pool: PgPool,
}

impl PgQuoteStore {
    /// Connect, create the schema if needed, and probe the quotes table.
    ///
    /// Every failure is reported as [`QuoteError::Unavailable`]; nothing is
    /// retried.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        tracing::info!(
            "Connecting to PostgreSQL at {}:{}/{}",
            config.host,
            config.port,
            config.name
        );

        let ssl_mode: PgSslMode = config.ssl_mode.parse().map_err(QuoteError::unavailable)?;

        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name)
            .ssl_mode(ssl_mode);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .connect_with(options)
            .await
            .map_err(QuoteError::unavailable)?;

        tracing::info!("PostgreSQL connection established, running migrations...");

        let store = Self::from_pool(pool);
        store
            .run_migrations()
            .await
            .map_err(QuoteError::unavailable)?;
        store.probe().await?;

        Ok(store)
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS quotes (
                id BIGSERIAL PRIMARY KEY,
                text_arabic TEXT NOT NULL,
                text_latin TEXT,
                translation TEXT,
                author TEXT NOT NULL,
                category TEXT,
                source TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(QuoteError::storage)?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_quotes_author ON quotes (author)")
            .execute(&self.pool)
            .await
            .map_err(QuoteError::storage)?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_quotes_category ON quotes (category)")
            .execute(&self.pool)
            .await
            .map_err(QuoteError::storage)?;

        Ok(())
    }

    async fn probe(&self) -> Result<()> {
        sqlx::query("SELECT 1 FROM quotes LIMIT 1")
            .execute(&self.pool)
            .await
            .map_err(QuoteError::unavailable)?;
        Ok(())
    }

    async fn fetch_page(
        &self,
        sql: &'static str,
        needle: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Quote>> {
        let mut query = sqlx::query_as::<_, QuoteRow>(sql);
        if let Some(needle) = needle {
            query = query.bind(like_pattern(needle));
        }

        let rows = query
            .bind(normalize_limit(limit))
            .bind(normalize_offset(offset))
            .fetch_all(&self.pool)
            .await
            .map_err(QuoteError::storage)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn fetch_count(&self, sql: &'static str, needle: &str) -> Result<i64> {
        sqlx::query_scalar(sql)
            .bind(like_pattern(needle))
            .fetch_one(&self.pool)
            .await
            .map_err(QuoteError::storage)
    }
}

#[async_trait]
impl QuoteStore for PgQuoteStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Quote>> {
        self.fetch_page(
            select_quotes!("ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"),
            None,
            limit,
            offset,
        )
        .await
    }

    async fn get_by_id(&self, id: i64) -> Result<Quote> {
        let row: Option<QuoteRow> = sqlx::query_as(select_quotes!("WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(QuoteError::storage)?;

        row.map(Into::into).ok_or(QuoteError::NotFound(id))
    }

    async fn get_random(&self) -> Result<Quote> {
        let row: Option<QuoteRow> = sqlx::query_as(select_quotes!("ORDER BY RANDOM() LIMIT 1"))
            .fetch_optional(&self.pool)
            .await
            .map_err(QuoteError::storage)?;

        row.map(Into::into).ok_or(QuoteError::Empty)
    }

    async fn filter_by_author(&self, author: &str, limit: i64, offset: i64) -> Result<Vec<Quote>> {
        self.fetch_page(
            select_quotes!(
                "WHERE author ILIKE $1 ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3"
            ),
            Some(author),
            limit,
            offset,
        )
        .await
    }

    async fn filter_by_category(
        &self,
        category: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Quote>> {
        self.fetch_page(
            select_quotes!(
                "WHERE category ILIKE $1 ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3"
            ),
            Some(category),
            limit,
            offset,
        )
        .await
    }

    async fn count_by_author(&self, author: &str) -> Result<i64> {
        self.fetch_count("SELECT COUNT(*) FROM quotes WHERE author ILIKE $1", author)
            .await
    }

    async fn count_by_category(&self, category: &str) -> Result<i64> {
        self.fetch_count("SELECT COUNT(*) FROM quotes WHERE category ILIKE $1", category)
            .await
    }

    async fn create(&self, req: QuoteRequest) -> Result<Quote> {
        req.validate()?;

        let sql = format!(
            "INSERT INTO quotes (text_arabic, text_latin, translation, author, category, source) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            RETURNING_COLUMNS
        );
        let row: QuoteRow = sqlx::query_as(&sql)
            .bind(&req.text_arabic)
            .bind(&req.text_latin)
            .bind(&req.translation)
            .bind(&req.author)
            .bind(&req.category)
            .bind(&req.source)
            .fetch_one(&self.pool)
            .await
            .map_err(QuoteError::storage)?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, req: QuoteRequest) -> Result<Quote> {
        req.validate()?;

        // updated_at must move forward even when NOW() has not.
        let sql = format!(
            "UPDATE quotes SET text_arabic = $2, text_latin = $3, translation = $4, \
             author = $5, category = $6, source = $7, \
             updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond') \
             WHERE id = $1 RETURNING {}",
            RETURNING_COLUMNS
        );
        let row: Option<QuoteRow> = sqlx::query_as(&sql)
            .bind(id)
            .bind(&req.text_arabic)
            .bind(&req.text_latin)
            .bind(&req.translation)
            .bind(&req.author)
            .bind(&req.category)
            .bind(&req.source)
            .fetch_optional(&self.pool)
            .await
            .map_err(QuoteError::storage)?;

        row.map(Into::into).ok_or(QuoteError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM quotes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(QuoteError::storage)?;

        if result.rows_affected() == 0 {
            return Err(QuoteError::NotFound(id));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM quotes")
            .fetch_one(&self.pool)
            .await
            .map_err(QuoteError::storage)
    }
}

/// `%needle%` with LIKE metacharacters escaped so user input matches literally.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct QuoteRow {
    id: i64,
    text_arabic: String,
    text_latin: Option<String>,
    translation: Option<String>,
    author: String,
    category: Option<String>,
    source: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<QuoteRow> for Quote {
    fn from(r: QuoteRow) -> Self {
        Quote {
            id: r.id,
            text_arabic: r.text_arabic,
            text_latin: r.text_latin,
            translation: r.translation,
            author: r.author,
            category: r.category,
            source: r.source,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("ali"), "%ali%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b\\c"), "%a\\_b\\\\c%");
    }

    /// Connects when MAHFUDZOT_TEST_DATABASE_URL is set, otherwise the
    /// database tests return early.
    async fn test_store() -> Option<PgQuoteStore> {
        let url = std::env::var("MAHFUDZOT_TEST_DATABASE_URL").ok()?;
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .expect("connect to test database");
        let store = PgQuoteStore::from_pool(pool);
        store.run_migrations().await.expect("run migrations");
        Some(store)
    }

    #[tokio::test]
    async fn test_postgres_lifecycle() {
        let Some(store) = test_store().await else {
            return;
        };

        let before = store.count().await.unwrap();
        let marker = format!("Lifecycle Tester {}", chrono::Utc::now().timestamp_micros());

        let mut req = QuoteRequest::new("العلم نور", marker.clone());
        req.category = Some("Knowledge_100%".to_string());
        let created = store.create(req).await.unwrap();
        assert_eq!(store.get_by_id(created.id).await.unwrap(), created);
        assert_eq!(store.count().await.unwrap(), before + 1);

        // Substring, case-insensitive, metacharacters literal.
        let found = store
            .filter_by_author(&marker.to_uppercase(), 10, 0)
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(store.count_by_author(&marker).await.unwrap(), 1);
        assert!(store
            .filter_by_category("ledge_100%", 100, 0)
            .await
            .unwrap()
            .iter()
            .any(|q| q.id == created.id));

        let updated = store
            .update(created.id, QuoteRequest::new("الصبر مفتاح الفرج", marker.clone()))
            .await
            .unwrap();
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.category, None);

        store.delete(created.id).await.unwrap();
        assert!(matches!(
            store.get_by_id(created.id).await.unwrap_err(),
            QuoteError::NotFound(_)
        ));
        assert!(matches!(
            store.delete(created.id).await.unwrap_err(),
            QuoteError::NotFound(_)
        ));
        assert_eq!(store.count().await.unwrap(), before);

        let again = store
            .create(QuoteRequest::new("نص", marker.clone()))
            .await
            .unwrap();
        assert!(again.id > created.id);
        store.delete(again.id).await.unwrap();

        let err = store.create(QuoteRequest::new("", "X")).await.unwrap_err();
        assert!(matches!(err, QuoteError::Validation(_)));
    }
}
