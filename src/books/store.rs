//! In-memory book store
//!
//! An ordered `Vec<Book>` behind a single async `RwLock`. Each
//! find-then-mutate sequence runs under one write guard, so concurrent
//! requests never observe a half-applied update or delete.

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::book::{generate_book_id, Book, BookFields, BookSummary};
use super::errors::{BookError, BookResult};
use super::filter::BookFilter;

/// Process-wide book collection, insertion ordered
#[derive(Debug, Default)]
pub struct BookStore {
    books: RwLock<Vec<Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new book under a fresh unique id.
    pub async fn insert(&self, fields: BookFields, now: DateTime<Utc>) -> Book {
        let mut books = self.books.write().await;

        let mut id = generate_book_id();
        while books.iter().any(|book| book.id == id) {
            id = generate_book_id();
        }

        let book = Book::new(id, fields, now);
        books.push(book.clone());
        book
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.books.read().await.iter().any(|book| book.id == id)
    }

    /// Summaries of every book passing `filter`, in insertion order
    pub async fn list(&self, filter: &BookFilter) -> Vec<BookSummary> {
        let books = self.books.read().await;

        if filter.is_empty() {
            return books.iter().map(Book::summary).collect();
        }

        books
            .iter()
            .filter(|book| filter.matches(book))
            .map(Book::summary)
            .collect()
    }

    pub async fn get(&self, id: &str) -> BookResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or(BookError::NotFound)
    }

    /// Replace a book's content, keeping `id` and `insertedAt`.
    pub async fn update(&self, id: &str, fields: BookFields, now: DateTime<Utc>) -> BookResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or(BookError::UpdateTargetMissing)?;

        book.apply(fields, now);
        Ok(book.clone())
    }

    pub async fn remove(&self, id: &str) -> BookResult<Book> {
        let mut books = self.books.write().await;
        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or(BookError::DeleteTargetMissing)?;

        Ok(books.remove(index))
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}
