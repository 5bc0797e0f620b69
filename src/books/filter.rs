//! List filtering
//!
//! `name` is a case-insensitive substring match. `reading` and `finished`
//! accept only `"0"` and `"1"`; any other value disables that filter.
//! Active filters are intersected.

use serde::Deserialize;

use super::book::Book;

/// Raw `GET /books` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

/// Parsed list filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Lowercased name needle
    name: Option<String>,
    reading: Option<bool>,
    finished: Option<bool>,
}

impl BookFilter {
    pub fn new(name: Option<&str>, reading: Option<bool>, finished: Option<bool>) -> Self {
        Self {
            name: name.map(str::to_lowercase),
            reading,
            finished,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.reading.is_none() && self.finished.is_none()
    }

    pub fn matches(&self, book: &Book) -> bool {
        if let Some(needle) = &self.name {
            if !book.name.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(reading) = self.reading {
            if book.reading != reading {
                return false;
            }
        }
        if let Some(finished) = self.finished {
            if book.finished != finished {
                return false;
            }
        }
        true
    }
}

impl From<ListQuery> for BookFilter {
    fn from(query: ListQuery) -> Self {
        Self::new(
            query.name.as_deref(),
            query.reading.as_deref().and_then(parse_flag),
            query.finished.as_deref().and_then(parse_flag),
        )
    }
}

/// `"1"` → true, `"0"` → false, anything else → no filter
fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::book::{now, BookFields};

    fn book(name: &str, reading: bool, page_count: u32, read_page: u32) -> Book {
        Book::new(
            name.to_lowercase(),
            BookFields {
                name: name.to_string(),
                year: None,
                author: None,
                summary: None,
                publisher: None,
                page_count,
                read_page,
                reading,
            },
            now(),
        )
    }

    fn query(name: Option<&str>, reading: Option<&str>, finished: Option<&str>) -> BookFilter {
        BookFilter::from(ListQuery {
            name: name.map(str::to_string),
            reading: reading.map(str::to_string),
            finished: finished.map(str::to_string),
        })
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("true"), None);
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = query(None, None, None);
        assert!(filter.is_empty());
        assert!(filter.matches(&book("Anything", true, 1, 0)));
    }

    #[test]
    fn test_name_is_case_insensitive_substring() {
        let filter = query(Some("dumas"), None, None);
        assert!(filter.matches(&book("Dumas X", false, 1, 0)));
        assert!(filter.matches(&book("Alexandre DUMAS", false, 1, 0)));
        assert!(!filter.matches(&book("Other", false, 1, 0)));
    }

    #[test]
    fn test_invalid_flags_are_ignored() {
        let filter = query(None, Some("yes"), Some("2"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_filters_intersect() {
        let filter = query(Some("a"), Some("1"), Some("0"));
        assert!(filter.matches(&book("Alpha", true, 10, 5)));
        assert!(!filter.matches(&book("Alpha", false, 10, 5)));
        assert!(!filter.matches(&book("Alpha", true, 10, 10)));
        assert!(!filter.matches(&book("Echo", true, 10, 5)));
    }
}
