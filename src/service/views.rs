// MyBooks - Book catalog service
// Copyright (C) 2025 The MyBooks Authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! View models returned to callers of the publisher service
//!
//! All views serialize with camelCase field names.

use crate::storage::PageRequest;
use serde::{Deserialize, Serialize};

/// Payload for creating a publisher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherView {
    pub name: String,
}

/// A book title with the names of its authors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAuthorsView {
    pub book_name: String,
    pub book_authors: Vec<String>,
}

/// A publisher flattened together with its books and their authors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherBookAuthorsView {
    pub name: String,
    pub book_authors: Vec<BookAuthorsView>,
}

/// One page of results plus paging metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedView<T> {
    pub items: Vec<T>,
    pub page_number: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl<T> PaginatedView<T> {
    pub fn new(items: Vec<T>, page: PageRequest, total_items: i64) -> Self {
        let total_pages = if total_items <= 0 {
            0
        } else {
            (total_items + page.size() - 1) / page.size()
        };

        Self {
            items,
            page_number: page.number(),
            page_size: page.size(),
            total_items,
            total_pages,
            has_previous_page: page.number() > 1,
            has_next_page: page.number() < total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_metadata() {
        let view = PaginatedView::new(vec![3], PageRequest::new(2, 2), 3);
        assert_eq!(view.total_pages, 2);
        assert!(view.has_previous_page);
        assert!(!view.has_next_page);

        let empty: PaginatedView<i32> = PaginatedView::new(vec![], PageRequest::new(1, 10), 0);
        assert_eq!(empty.total_pages, 0);
        assert!(!empty.has_previous_page);
        assert!(!empty.has_next_page);
    }

    #[test]
    fn test_camel_case_serialization() {
        let view = PublisherBookAuthorsView {
            name: "Publisher 1".to_string(),
            book_authors: vec![BookAuthorsView {
                book_name: "Book Title 1".to_string(),
                book_authors: vec!["Author 1".to_string()],
            }],
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["bookAuthors"][0]["bookName"], "Book Title 1");
        assert_eq!(json["bookAuthors"][0]["bookAuthors"][0], "Author 1");
    }
}
