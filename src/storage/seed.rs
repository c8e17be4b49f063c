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


//! Sample catalog data
//!
//! Three publishers, two authors and two books of `Publisher 1`, linked as:
//!
//! | link | book | author |
//! |------|------|--------|
//! | 1    | 1    | 1      |
//! | 2    | 1    | 2      |
//! | 3    | 2    | 2      |

use crate::error::Result;
use crate::storage::models::{NewAuthor, NewBook, NewBookAuthor, NewPublisher};
use crate::storage::queries;
use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use tracing::info;

/// Insert the sample catalog in one transaction
///
/// Ids are fixed, so seeding a database that already holds any of these
/// rows fails and nothing is written.
pub async fn seed_sample_catalog(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await?;

    for id in 1..=3 {
        let publisher = NewPublisher::new(format!("Publisher {}", id)).with_id(id);
        queries::insert_publisher(&mut *tx, &publisher).await?;
    }

    for id in 1..=2 {
        let author = NewAuthor::new(format!("Author {}", id)).with_id(id);
        queries::insert_author(&mut *tx, &author).await?;
    }

    let created_at = Utc::now() - Duration::days(11);
    for id in 1..=2 {
        let book = NewBook {
            description: format!("Book Description {}", id),
            is_read: false,
            genre: "Genre 1".to_string(),
            cover_url: "http://...".to_string(),
            created_at,
            ..NewBook::new(format!("Book Title {}", id), 1).with_id(id)
        };
        queries::insert_book(&mut *tx, &book).await?;
    }

    for (id, book_id, author_id) in [(1, 1, 1), (2, 1, 2), (3, 2, 2)] {
        let link = NewBookAuthor::new(book_id, author_id).with_id(id);
        queries::insert_book_author(&mut *tx, &link).await?;
    }

    tx.commit().await?;

    info!("seeded sample catalog");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::database::Database;

    #[tokio::test]
    async fn test_seed_row_counts() {
        let db = Database::new_in_memory().await.expect("Failed to create database");
        seed_sample_catalog(db.pool()).await.expect("Failed to seed");

        assert_eq!(queries::count_publishers(db.pool()).await.unwrap(), 3);

        let books = queries::find_books_by_publisher(db.pool(), 1).await.unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "Book Title 1");
        assert!(!books[0].is_read);
        assert!(books[0].created_at < Utc::now() - Duration::days(10));

        let authors = queries::find_authors_by_book(db.pool(), 1).await.unwrap();
        let names: Vec<&str> = authors.iter().map(|a| a.full_name.as_str()).collect();
        assert_eq!(names, vec!["Author 1", "Author 2"]);
    }

    #[tokio::test]
    async fn test_seed_twice_is_rejected_atomically() {
        let db = Database::new_in_memory().await.expect("Failed to create database");
        seed_sample_catalog(db.pool()).await.expect("Failed to seed");

        assert!(seed_sample_catalog(db.pool()).await.is_err());
        assert_eq!(queries::count_publishers(db.pool()).await.unwrap(), 3);
    }
}
