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


//! Publisher repository capability and its SQLite implementation.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use super::views::BookAuthorsView;
use crate::error::Result;
use crate::storage::{
    queries, Database, NewPublisher, Publisher, PublisherListQuery, PublisherPage,
};

/// Data access operations the publisher service depends on.
#[async_trait]
pub trait PublisherRepository: Debug + Send + Sync {
    /// Filters, orders and pages publishers, returning the page and the
    /// number of rows matching the filter.
    async fn list(&self, query: &PublisherListQuery) -> Result<PublisherPage>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Publisher>>;

    /// Books of the publisher ordered by id, each with its author names.
    async fn book_authors(&self, publisher_id: i64) -> Result<Vec<BookAuthorsView>>;

    async fn insert(&self, publisher: &NewPublisher) -> Result<Publisher>;

    /// Removes the publisher. Returns `false` when no such row existed.
    async fn delete(&self, id: i64) -> Result<bool>;
}

pub type PublisherRepositoryArc = Arc<dyn PublisherRepository>;

/// [`PublisherRepository`] backed by a SQLite [`Database`].
#[derive(Debug, Clone)]
pub struct SqlitePublisherRepository {
    db: Database,
}

impl SqlitePublisherRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PublisherRepository for SqlitePublisherRepository {
    async fn list(&self, query: &PublisherListQuery) -> Result<PublisherPage> {
        queries::list_publishers(self.db.pool(), query).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Publisher>> {
        queries::find_publisher_by_id(self.db.pool(), id).await
    }

    async fn book_authors(&self, publisher_id: i64) -> Result<Vec<BookAuthorsView>> {
        let rows = queries::find_publisher_book_authors(self.db.pool(), publisher_id).await?;

        let mut views: Vec<BookAuthorsView> = Vec::new();
        let mut current_book = None;
        for row in rows {
            if current_book != Some(row.book_id) {
                current_book = Some(row.book_id);
                views.push(BookAuthorsView {
                    book_name: row.title,
                    book_authors: Vec::new(),
                });
            }
            if let (Some(name), Some(view)) = (row.author_name, views.last_mut()) {
                view.book_authors.push(name);
            }
        }

        Ok(views)
    }

    async fn insert(&self, publisher: &NewPublisher) -> Result<Publisher> {
        queries::insert_publisher(self.db.pool(), publisher).await
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut tx = self.db.pool().begin().await?;

        if !queries::publisher_exists(&mut *tx, id).await? {
            return Ok(false);
        }
        queries::delete_publisher(&mut *tx, id).await?;

        tx.commit().await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::models::{NewBook, NewBookAuthor};
    use crate::storage::seed::seed_sample_catalog;

    #[tokio::test]
    async fn test_book_authors_groups_rows_per_book() {
        let db = Database::new_in_memory().await.expect("Failed to create database");
        seed_sample_catalog(db.pool()).await.expect("Failed to seed");
        let repository = SqlitePublisherRepository::new(db);

        let views = repository.book_authors(1).await.expect("Failed to load book authors");

        assert_eq!(
            views,
            vec![
                BookAuthorsView {
                    book_name: "Book Title 1".to_string(),
                    book_authors: vec!["Author 1".to_string(), "Author 2".to_string()],
                },
                BookAuthorsView {
                    book_name: "Book Title 2".to_string(),
                    book_authors: vec!["Author 2".to_string()],
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_book_without_authors_has_empty_list() {
        let db = Database::new_in_memory().await.expect("Failed to create database");
        let repository = SqlitePublisherRepository::new(db.clone());

        let publisher = repository
            .insert(&NewPublisher::new("Small Press"))
            .await
            .expect("Failed to insert publisher");
        let lonely = queries::insert_book(db.pool(), &NewBook::new("Lonely", publisher.id))
            .await
            .expect("Failed to insert book");
        let other = queries::insert_book(db.pool(), &NewBook::new("Other", publisher.id))
            .await
            .expect("Failed to insert book");
        let author = queries::insert_author(db.pool(), &crate::storage::NewAuthor::new("Solo"))
            .await
            .expect("Failed to insert author");
        queries::insert_book_author(db.pool(), &NewBookAuthor::new(other, author))
            .await
            .expect("Failed to link");

        let views = repository.book_authors(publisher.id).await.expect("Failed to load");

        assert_eq!(views.len(), 2);
        assert!(lonely < other);
        assert_eq!(views[0].book_name, "Lonely");
        assert!(views[0].book_authors.is_empty());
        assert_eq!(views[1].book_authors, vec!["Solo".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_reports_missing_rows() {
        let db = Database::new_in_memory().await.expect("Failed to create database");
        let repository = SqlitePublisherRepository::new(db);

        let publisher = repository
            .insert(&NewPublisher::new("Short Lived"))
            .await
            .expect("Failed to insert publisher");

        assert!(repository.delete(publisher.id).await.expect("Failed to delete"));
        assert!(!repository.delete(publisher.id).await.expect("Failed to delete"));
        assert!(repository.get_by_id(publisher.id).await.expect("Failed to get").is_none());
    }
}
