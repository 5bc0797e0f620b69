//! Write validation
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. `name` present and non-empty
//! 2. `pageCount` present whenever `readPage` is
//! 3. `readPage <= pageCount`
//!
//! Absent page numbers default to 0.

use super::book::{BookFields, BookPayload};
use super::errors::{BookError, BookResult, WriteAction};

/// Turn a client payload into validated book content.
pub fn validate_payload(payload: BookPayload, action: WriteAction) -> BookResult<BookFields> {
    let name = require_name(payload.name, action)?;
    let (page_count, read_page) = page_numbers(payload.page_count, payload.read_page, action)?;
    check_read_progress(read_page, page_count, action)?;

    Ok(BookFields {
        name,
        year: payload.year,
        author: payload.author,
        summary: payload.summary,
        publisher: payload.publisher,
        page_count,
        read_page,
        reading: payload.reading,
    })
}

/// `name` must be present and not the empty string.
pub fn require_name(name: Option<String>, action: WriteAction) -> BookResult<String> {
    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(BookError::MissingName(action)),
    }
}

/// Resolve `(pageCount, readPage)`; a `readPage` needs a `pageCount` to be
/// measured against.
pub fn page_numbers(
    page_count: Option<u32>,
    read_page: Option<u32>,
    action: WriteAction,
) -> BookResult<(u32, u32)> {
    match (page_count, read_page) {
        (None, Some(_)) => Err(BookError::MissingPageCount(action)),
        (page_count, read_page) => Ok((page_count.unwrap_or(0), read_page.unwrap_or(0))),
    }
}

pub fn check_read_progress(read_page: u32, page_count: u32, action: WriteAction) -> BookResult<()> {
    if read_page > page_count {
        return Err(BookError::ReadPageExceedsPageCount(action));
    }
    Ok(())
}
