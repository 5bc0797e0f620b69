//! # Book Errors
//!
//! Messages are client-facing and kept in Indonesian.

use std::fmt;

use axum::http::StatusCode;
use thiserror::Error;

/// Result type for book operations
pub type BookResult<T> = Result<T, BookError>;

/// Write operation a validation error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Add,
    Update,
}

impl WriteAction {
    /// Message prefix for failures of this action
    pub fn failure_prefix(&self) -> &'static str {
        match self {
            WriteAction::Add => "Gagal menambahkan buku",
            WriteAction::Update => "Gagal memperbarui buku",
        }
    }
}

impl fmt::Display for WriteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_prefix())
    }
}

/// Book operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    // ==================
    // Validation (400)
    // ==================
    /// Body could not be decoded into a book payload
    #[error("{0}. {1}")]
    InvalidPayload(WriteAction, String),

    /// `name` absent or empty
    #[error("{0}. Mohon isi nama buku")]
    MissingName(WriteAction),

    /// `readPage` greater than `pageCount`
    #[error("{0}. readPage tidak boleh lebih besar dari pageCount")]
    ReadPageExceedsPageCount(WriteAction),

    /// `readPage` sent without `pageCount`
    #[error("{0}. Mohon isi pageCount")]
    MissingPageCount(WriteAction),

    /// List query string could not be decoded
    #[error("Gagal menampilkan buku. {0}")]
    InvalidQuery(String),

    // ==================
    // Not found (404)
    // ==================
    #[error("Buku tidak ditemukan")]
    NotFound,

    #[error("Gagal memperbarui buku. Id tidak ditemukan")]
    UpdateTargetMissing,

    #[error("Buku gagal dihapus. Id tidak ditemukan")]
    DeleteTargetMissing,

    // ==================
    // Unexpected (500)
    // ==================
    /// Book absent from the store right after insertion
    #[error("Buku gagal ditambahkan")]
    InsertFailed,
}

impl BookError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookError::InvalidPayload(..)
            | BookError::MissingName(_)
            | BookError::ReadPageExceedsPageCount(_)
            | BookError::MissingPageCount(_)
            | BookError::InvalidQuery(_) => StatusCode::BAD_REQUEST,

            BookError::NotFound
            | BookError::UpdateTargetMissing
            | BookError::DeleteTargetMissing => StatusCode::NOT_FOUND,

            BookError::InsertFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            BookError::MissingName(WriteAction::Add).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BookError::InvalidPayload(WriteAction::Update, "x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(BookError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            BookError::DeleteTargetMissing.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BookError::InsertFailed.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_carry_action_prefix() {
        assert_eq!(
            BookError::MissingName(WriteAction::Add).to_string(),
            "Gagal menambahkan buku. Mohon isi nama buku"
        );
        assert_eq!(
            BookError::MissingName(WriteAction::Update).to_string(),
            "Gagal memperbarui buku. Mohon isi nama buku"
        );
        assert_eq!(
            BookError::ReadPageExceedsPageCount(WriteAction::Add).to_string(),
            "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount"
        );
        assert_eq!(
            BookError::ReadPageExceedsPageCount(WriteAction::Update).to_string(),
            "Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount"
        );
    }

    #[test]
    fn test_not_found_messages() {
        assert_eq!(BookError::NotFound.to_string(), "Buku tidak ditemukan");
        assert_eq!(
            BookError::UpdateTargetMissing.to_string(),
            "Gagal memperbarui buku. Id tidak ditemukan"
        );
        assert_eq!(
            BookError::DeleteTargetMissing.to_string(),
            "Buku gagal dihapus. Id tidak ditemukan"
        );
        assert_eq!(BookError::InsertFailed.to_string(), "Buku gagal ditambahkan");
    }

    #[test]
    fn test_query_and_page_count_errors() {
        let err = BookError::InvalidQuery("duplicate field `name`".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "Gagal menampilkan buku. duplicate field `name`"
        );

        let err = BookError::MissingPageCount(WriteAction::Add);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Gagal menambahkan buku. Mohon isi pageCount");
    }
}
