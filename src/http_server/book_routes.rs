//! Book HTTP Routes
//!
//! - `POST   /books`      create
//! - `GET    /books`      list, filtered by `name`, `reading`, `finished`
//! - `GET    /books/:id`  fetch one
//! - `PUT    /books/:id`  replace
//! - `DELETE /books/:id`  remove

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::books::book::now;
use crate::books::{
    validate_payload, BookError, BookFields, BookFilter, BookPayload, BookResult, BookStore,
    ListQuery, WriteAction,
};
use crate::observability::{Event, Logger};

use super::response::Envelope;

const MSG_CREATED: &str = "Buku berhasil ditambahkan";
const MSG_UPDATED: &str = "Buku berhasil diperbarui";
const MSG_DELETED: &str = "Buku berhasil dihapus";

// ==================
// Shared State
// ==================

/// Book state shared across handlers
#[derive(Debug, Default)]
pub struct BookState {
    pub store: BookStore,
}

impl BookState {
    pub fn new() -> Self {
        Self::default()
    }
}

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes(state: Arc<BookState>) -> Router {
    Router::new()
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route(
            "/books/:id",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Decode and validate a write body; failures are logged before returning.
fn accept_payload(
    payload: Result<Json<BookPayload>, JsonRejection>,
    action: WriteAction,
) -> BookResult<BookFields> {
    payload
        .map_err(|rejection| BookError::InvalidPayload(action, rejection.body_text()))
        .and_then(|Json(payload)| validate_payload(payload, action))
        .map_err(rejected)
}

fn rejected(err: BookError) -> BookError {
    Logger::event(Event::BookRejected, &[("reason", err.to_string().as_str())]);
    err
}

// ==================
// Book Handlers
// ==================

async fn create_book_handler(
    State(state): State<Arc<BookState>>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<Envelope, BookError> {
    let fields = accept_payload(payload, WriteAction::Add)?;
    let book = state.store.insert(fields, now()).await;

    if !state.store.contains(&book.id).await {
        Logger::event(Event::BookInsertFailed, &[("book_id", book.id.as_str())]);
        return Err(BookError::InsertFailed);
    }

    Logger::event(Event::BookCreated, &[("book_id", book.id.as_str())]);

    Ok(Envelope::success()
        .code(StatusCode::CREATED)
        .message(MSG_CREATED)
        .data(json!({ "bookId": book.id })))
}

async fn list_books_handler(
    State(state): State<Arc<BookState>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Envelope, BookError> {
    let Query(query) = query
        .map_err(|rejection| BookError::InvalidQuery(rejection.body_text()))
        .map_err(rejected)?;
    let books = state.store.list(&BookFilter::from(query)).await;

    Ok(Envelope::success().data(json!({ "books": books })))
}

async fn get_book_handler(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
) -> Result<Envelope, BookError> {
    let book = state.store.get(&id).await?;

    Ok(Envelope::success().data(json!({ "book": book })))
}

async fn update_book_handler(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<Envelope, BookError> {
    let fields = accept_payload(payload, WriteAction::Update)?;
    let book = state.store.update(&id, fields, now()).await.map_err(rejected)?;

    Logger::event(Event::BookUpdated, &[("book_id", book.id.as_str())]);

    Ok(Envelope::success().message(MSG_UPDATED))
}

async fn delete_book_handler(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
) -> Result<Envelope, BookError> {
    let book = state.store.remove(&id).await.map_err(rejected)?;

    Logger::event(Event::BookDeleted, &[("book_id", book.id.as_str())]);

    Ok(Envelope::success().message(MSG_DELETED))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: Option<&str>, page_count: u32, read_page: u32) -> Json<BookPayload> {
        Json(BookPayload {
            name: name.map(str::to_string),
            page_count: Some(page_count),
            read_page: Some(read_page),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_create_rejects_missing_name_without_mutation() {
        let state = Arc::new(BookState::new());

        let result = create_book_handler(State(state.clone()), Ok(payload(None, 10, 0))).await;

        assert_eq!(result.unwrap_err(), BookError::MissingName(WriteAction::Add));
        assert!(state.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_returns_created() {
        let state = Arc::new(BookState::new());

        let envelope = create_book_handler(State(state.clone()), Ok(payload(Some("A"), 10, 10)))
            .await
            .unwrap();

        assert_eq!(envelope.status_code(), StatusCode::CREATED);
        assert_eq!(envelope.body().message, MSG_CREATED);
        let data = envelope.body().data.clone().unwrap();
        let id = data["bookId"].as_str().unwrap();
        assert!(state.store.get(id).await.unwrap().finished);
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let state = Arc::new(BookState::new());

        let result = update_book_handler(
            State(state),
            Path("missing".to_string()),
            Ok(payload(Some("A"), 10, 20)),
        )
        .await;

        assert_eq!(
            result.unwrap_err(),
            BookError::ReadPageExceedsPageCount(WriteAction::Update)
        );
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let state = Arc::new(BookState::new());

        let result = delete_book_handler(State(state), Path("missing".to_string())).await;

        assert_eq!(result.unwrap_err(), BookError::DeleteTargetMissing);
    }
}
