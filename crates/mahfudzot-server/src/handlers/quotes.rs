//! Quote handlers

use crate::error::ApiError;
use crate::services::QuotePage;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use mahfudzot_core::{PageRequest, QuoteRequest, QuoteResponse, QuotesResponse};
use serde::Deserialize;

/// Raw `page`/`limit` query values, parsed leniently by [`PageRequest::parse`]
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
    limit: Option<String>,
}

impl PageQuery {
    fn to_page(&self) -> PageRequest {
        PageRequest::parse(self.page.as_deref(), self.limit.as_deref())
    }
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::bad_request(
            "Invalid quote ID",
            "ID must be a positive number",
        )),
    }
}

fn page_response(page: QuotePage) -> Json<QuotesResponse> {
    Json(QuotesResponse::page(
        page.quotes,
        page.total,
        page.page.page(),
        page.page.limit(),
    ))
}

fn body(payload: Result<Json<QuoteRequest>, JsonRejection>) -> Result<QuoteRequest, ApiError> {
    payload
        .map(|Json(req)| req)
        .map_err(|e| ApiError::bad_request("Invalid request body", e.body_text()))
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuotesResponse>, ApiError> {
    state
        .quotes
        .list(query.to_page())
        .await
        .map(page_response)
        .map_err(|e| ApiError::from_store(e, "Failed to retrieve quotes"))
}

pub async fn random(State(state): State<AppState>) -> Result<Json<QuoteResponse>, ApiError> {
    state
        .quotes
        .random()
        .await
        .map(|q| Json(QuoteResponse::ok(q)))
        .map_err(|e| ApiError::from_store(e, "Failed to retrieve random quote"))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let id = parse_id(&id)?;

    state
        .quotes
        .get(id)
        .await
        .map(|q| Json(QuoteResponse::ok(q)))
        .map_err(|e| ApiError::from_store(e, "Failed to retrieve quote"))
}

pub async fn by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuotesResponse>, ApiError> {
    let author = author.trim();
    if author.is_empty() {
        return Err(ApiError::bad_request(
            "Author parameter is required",
            "Missing author parameter",
        ));
    }

    state
        .quotes
        .by_author(author, query.to_page())
        .await
        .map(page_response)
        .map_err(|e| ApiError::from_store(e, "Failed to retrieve quotes by author"))
}

pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuotesResponse>, ApiError> {
    let category = category.trim();
    if category.is_empty() {
        return Err(ApiError::bad_request(
            "Category parameter is required",
            "Missing category parameter",
        ));
    }

    state
        .quotes
        .by_category(category, query.to_page())
        .await
        .map(page_response)
        .map_err(|e| ApiError::from_store(e, "Failed to retrieve quotes by category"))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<QuoteResponse>), ApiError> {
    let req = body(payload)?;

    state
        .quotes
        .create(req)
        .await
        .map(|q| (StatusCode::CREATED, Json(QuoteResponse::ok(q))))
        .map_err(|e| ApiError::from_store(e, "Failed to create quote"))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let id = parse_id(&id)?;
    let req = body(payload)?;

    state
        .quotes
        .update(id, req)
        .await
        .map(|q| Json(QuoteResponse::ok(q)))
        .map_err(|e| ApiError::from_store(e, "Failed to update quote"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let id = parse_id(&id)?;

    state
        .quotes
        .delete(id)
        .await
        .map(|_| Json(QuoteResponse::message(format!("Quote {} deleted", id))))
        .map_err(|e| ApiError::from_store(e, "Failed to delete quote"))
}

#[cfg(test)]
mod tests {
    use crate::services::QuoteService;
    use crate::storage::MemoryQuoteStore;
    use crate::{router, AppState};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use mahfudzot_core::SEED_CATALOG;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn app_with(store: MemoryQuoteStore) -> Router {
        let state = AppState::new(QuoteService::new(Arc::new(store)));
        router(state, Duration::from_secs(5))
    }

    fn app() -> Router {
        app_with(MemoryQuoteStore::from_catalog(SEED_CATALOG))
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["storage"], "memory");
    }

    #[tokio::test]
    async fn test_list_defaults() {
        let (status, body) = send(&app(), "GET", "/api/v1/quotes", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 10);
        assert_eq!(body["data"][0]["id"], 1);
        assert_eq!(body["total"], SEED_CATALOG.len());
        assert_eq!(body["page"], 1);
        assert_eq!(body["limit"], 10);
    }

    #[tokio::test]
    async fn test_list_paging_and_lenient_params() {
        let app = app();

        let (_, body) = send(&app, "GET", "/api/v1/quotes?page=2&limit=3", None).await;
        let ids: Vec<i64> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![4, 5, 6]);

        let (status, body) = send(&app, "GET", "/api/v1/quotes?page=abc&limit=-4", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"], 1);
        assert_eq!(body["limit"], 10);

        let (_, body) = send(&app, "GET", "/api/v1/quotes?limit=1000", None).await;
        assert_eq!(body["limit"], 100);

        let (status, body) = send(&app, "GET", "/api/v1/quotes?page=999", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let app = app();

        let (status, body) = send(&app, "GET", "/api/v1/quotes/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["author"], SEED_CATALOG[0].author);

        let (status, body) = send(&app, "GET", "/api/v1/quotes/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid quote ID");

        let (status, body) = send(&app, "GET", "/api/v1/quotes/999999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Quote not found");
    }

    #[tokio::test]
    async fn test_random() {
        let (status, body) = send(&app(), "GET", "/api/v1/quotes/random", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["id"].as_i64().unwrap() >= 1);

        let empty = app_with(MemoryQuoteStore::new());
        let (status, body) = send(&empty, "GET", "/api/v1/quotes/random", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to retrieve random quote");
    }

    #[tokio::test]
    async fn test_filter_by_author() {
        let expected = SEED_CATALOG
            .iter()
            .filter(|s| s.author == "Imam Ali")
            .count();

        let (status, body) =
            send(&app(), "GET", "/api/v1/quotes/author/imam%20ali?limit=2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["total"], expected);
        assert!(body["data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|q| q["author"] == "Imam Ali"));
    }

    #[tokio::test]
    async fn test_filter_by_category() {
        let (status, body) =
            send(&app(), "GET", "/api/v1/quotes/category/KNOWLEDGE", None).await;
        assert_eq!(status, StatusCode::OK);

        let data = body["data"].as_array().unwrap();
        assert!(!data.is_empty());
        assert!(data.iter().all(|q| q["category"]
            .as_str()
            .unwrap()
            .to_lowercase()
            .contains("knowledge")));
    }

    #[tokio::test]
    async fn test_blank_filter_rejected() {
        let app = app();

        let (status, body) = send(&app, "GET", "/api/v1/quotes/author/%20", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Author parameter is required");

        let (status, _) = send(&app, "GET", "/api/v1/quotes/category/%20%20", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_write_lifecycle() {
        let app = app();
        let total = SEED_CATALOG.len();

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/quotes",
            Some(json!({"text_arabic": "العلم نور", "author": "Tester", "category": "Test"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["data"]["id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/v1/quotes/{}", id),
            Some(json!({"text_arabic": "الصبر مفتاح الفرج", "author": "Edited"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["author"], "Edited");
        assert!(body["data"].get("category").is_none());

        let (_, body) = send(&app, "GET", "/api/v1/quotes", None).await;
        assert_eq!(body["total"], total + 1);

        let uri = format!("/api/v1/quotes/{}", id);
        let (status, body) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let (status, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_validation() {
        let app = app();

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/quotes",
            Some(json!({"text_arabic": "", "author": "X"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation failed: text_arabic is required");

        let (status, body) = send(&app, "POST", "/api/v1/quotes", Some(json!("nope"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid request body");

        let (_, body) = send(&app, "GET", "/api/v1/quotes", None).await;
        assert_eq!(body["total"], SEED_CATALOG.len());
    }

    #[tokio::test]
    async fn test_update_validation_leaves_quote_unchanged() {
        let app = app();
        let (_, before) = send(&app, "GET", "/api/v1/quotes/2", None).await;

        let (status, body) = send(
            &app,
            "PUT",
            "/api/v1/quotes/2",
            Some(json!({"text_arabic": "نص", "author": "   "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Validation failed: author is required");

        let (status, after) = send(&app, "GET", "/api/v1/quotes/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn test_update_missing_quote() {
        let (status, _) = send(
            &app(),
            "PUT",
            "/api/v1/quotes/999999",
            Some(json!({"text_arabic": "نص", "author": "X"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
