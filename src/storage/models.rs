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


//! Database models for MyBooks
//!
//! Row types for the four catalog tables plus the insert payloads used by
//! the query layer.
//!
//! # SQLite Adaptations
//! - DateTime stored as TEXT in ISO 8601 format
//! - Booleans stored as INTEGER 0/1
//! - The Book ↔ Author many-to-many relationship uses the BookAuthors
//!   junction table

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// MAIN ENTITIES
// ============================================================================

/// Publisher - owns zero or more books
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Publisher {
    pub id: i64,
    pub name: String,
}

/// Book - catalog entry, always owned by a publisher
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub is_read: bool,
    pub genre: String,
    pub cover_url: String,
    pub created_at: DateTime<Utc>,
    pub publisher_id: i64, // Foreign key to Publishers
}

/// Author
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i64,
    pub full_name: String,
}

/// BookAuthor - junction table for the book/author relationship
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAuthor {
    pub id: i64,
    pub book_id: i64,
    pub author_id: i64,
}

// ============================================================================
// INSERT MODELS (without auto-generated IDs)
// ============================================================================

/// New publisher. `id` is only set when seeding fixed rows.
#[derive(Debug, Clone, Default)]
pub struct NewPublisher {
    pub id: Option<i64>,
    pub name: String,
}

impl NewPublisher {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// New book
#[derive(Debug, Clone)]
pub struct NewBook {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub is_read: bool,
    pub genre: String,
    pub cover_url: String,
    pub created_at: DateTime<Utc>,
    pub publisher_id: i64,
}

impl NewBook {
    pub fn new(title: impl Into<String>, publisher_id: i64) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: String::new(),
            is_read: false,
            genre: String::new(),
            cover_url: String::new(),
            created_at: Utc::now(),
            publisher_id,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// New author
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub id: Option<i64>,
    pub full_name: String,
}

impl NewAuthor {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            id: None,
            full_name: full_name.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// New book/author link
#[derive(Debug, Clone)]
pub struct NewBookAuthor {
    pub id: Option<i64>,
    pub book_id: i64,
    pub author_id: i64,
}

impl NewBookAuthor {
    pub fn new(book_id: i64, author_id: i64) -> Self {
        Self {
            id: None,
            book_id,
            author_id,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
