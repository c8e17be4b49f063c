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


//! Database storage and models
//!
//! This module handles all database operations using SQLite through sqlx.
//!
//! # Database Schema
//! - Publishers: owners of books
//! - Books: catalog entries, each owned by one publisher
//! - Authors: people who wrote books
//! - BookAuthors: many-to-many junction between books and authors
//!
//! # Usage Example
//! ```no_run
//! use mybooks::storage::{Database, queries, models::NewPublisher};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::new("./catalog.db").await?;
//!
//! let publisher = queries::insert_publisher(db.pool(), &NewPublisher::new("Penguin")).await?;
//! let found = queries::find_publisher_by_id(db.pool(), publisher.id).await?;
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;
pub mod seed;

// Re-export commonly used types
pub use database::Database;
pub use models::{
    Author, Book, BookAuthor, NewAuthor, NewBook, NewBookAuthor, NewPublisher, Publisher,
};
pub use queries::{
    PageRequest, PublisherListQuery, PublisherPage, PublisherSort, PublisherSortField,
    SortDirection,
};
