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


use std::sync::Arc;

use tracing::{debug, info};

use super::repository::{PublisherRepositoryArc, SqlitePublisherRepository};
use super::views::{PaginatedView, PublisherBookAuthorsView, PublisherView};
use crate::error::{CatalogError, Result};
use crate::storage::{
    Database, NewPublisher, PageRequest, Publisher, PublisherListQuery, PublisherSort,
    PublisherSortField, SortDirection,
};

/// Publisher use-cases: listing, lookup with projection, create and delete.
#[derive(Debug, Clone)]
pub struct PublisherService {
    repository: PublisherRepositoryArc,
}

impl PublisherService {
    pub fn new(repository: PublisherRepositoryArc) -> Self {
        Self { repository }
    }

    /// Service over the SQLite repository.
    pub fn sqlite(db: Database) -> Self {
        Self::new(Arc::new(SqlitePublisherRepository::new(db)))
    }

    /// Lists publishers from raw request parameters.
    ///
    /// Empty `sort_field` keeps the default id ordering and empty `search`
    /// disables filtering. See [`build_list_query`] for the exact rules.
    #[tracing::instrument(skip(self))]
    pub async fn get_publishers(
        &self,
        sort_field: &str,
        sort_direction: &str,
        search: &str,
        page_number: i64,
        page_size: i64,
    ) -> Result<PaginatedView<Publisher>> {
        let query = build_list_query(sort_field, sort_direction, search, page_number, page_size)?;
        self.list(&query).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list(&self, query: &PublisherListQuery) -> Result<PaginatedView<Publisher>> {
        let page = self.repository.list(query).await?;
        debug!(
            returned = page.items.len(),
            total = page.total_items,
            "listed publishers"
        );

        Ok(PaginatedView::new(page.items, query.page, page.total_items))
    }

    /// Loads a publisher with its books and their authors.
    #[tracing::instrument(skip(self))]
    pub async fn get_publisher_by_id(&self, id: i64) -> Result<PublisherBookAuthorsView> {
        let publisher = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::PublisherNotFound(id))?;

        let book_authors = self.repository.book_authors(publisher.id).await?;

        Ok(PublisherBookAuthorsView {
            name: publisher.name,
            book_authors,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn add_publisher(&self, publisher: PublisherView) -> Result<Publisher> {
        let created = self
            .repository
            .insert(&NewPublisher::new(publisher.name))
            .await?;

        info!(id = created.id, "created publisher");
        Ok(created)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_publisher(&self, id: i64) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(CatalogError::PublisherNotFound(id));
        }

        info!(id, "deleted publisher");
        Ok(())
    }
}

/// Turns raw list parameters into a [`PublisherListQuery`].
///
/// - blank `search` means no filter, otherwise it is matched as given
/// - blank `sort_field` means default ordering; unknown fields are rejected
/// - `sort_direction` is descending only for `desc`
/// - page values are normalized by [`PageRequest::new`]
pub fn build_list_query(
    sort_field: &str,
    sort_direction: &str,
    search: &str,
    page_number: i64,
    page_size: i64,
) -> Result<PublisherListQuery> {
    let sort = if sort_field.trim().is_empty() {
        None
    } else {
        Some(PublisherSort {
            field: sort_field.parse::<PublisherSortField>()?,
            direction: SortDirection::parse(sort_direction),
        })
    };

    Ok(PublisherListQuery {
        search: (!search.trim().is_empty()).then(|| search.to_string()),
        sort,
        page: PageRequest::new(page_number, page_size),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed::seed_sample_catalog;

    async fn seeded_service() -> PublisherService {
        let db = Database::new_in_memory().await.expect("Failed to create database");
        seed_sample_catalog(db.pool()).await.expect("Failed to seed");
        PublisherService::sqlite(db)
    }

    #[test]
    fn test_build_list_query_defaults() {
        let query = build_list_query("", "", "  ", 0, 0).unwrap();
        assert_eq!(query, PublisherListQuery::default());
    }

    #[test]
    fn test_build_list_query_keeps_edge_spaces() {
        let query = build_list_query("", "", " Press", 1, 10).unwrap();
        assert_eq!(query.search.as_deref(), Some(" Press"));
    }

    #[tokio::test]
    async fn test_search_matches_leading_space_literally() {
        let service = seeded_service().await;
        service
            .add_publisher(PublisherView {
                name: "Press".to_string(),
            })
            .await
            .unwrap();
        service
            .add_publisher(PublisherView {
                name: "Free Press".to_string(),
            })
            .await
            .unwrap();

        let page = service.get_publishers("", "", " Press", 1, 10).await.unwrap();
        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Free Press"]);
    }

    #[test]
    fn test_build_list_query_rejects_unknown_field() {
        let err = build_list_query("Title", "asc", "", 1, 10).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_page_size_above_total_is_not_capped() {
        let db = Database::new_in_memory().await.expect("Failed to create database");
        let service = PublisherService::sqlite(db);
        for i in 0..150 {
            service
                .add_publisher(PublisherView {
                    name: format!("House {}", i),
                })
                .await
                .unwrap();
        }

        let page = service.get_publishers("", "", "", 1, 200).await.unwrap();

        assert_eq!(page.items.len(), 150);
        assert_eq!(page.total_items, 150);
        assert_eq!(page.page_size, 200);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next_page);
    }

    #[tokio::test]
    async fn test_out_of_range_page_is_empty() {
        let service = seeded_service().await;

        let page = service.get_publishers("", "", "", 5, 10).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 3);
        assert_eq!(page.page_number, 5);
    }

    #[tokio::test]
    async fn test_search_with_sort_and_paging() {
        let service = seeded_service().await;

        let page = service
            .get_publishers("name", "DESC", "publisher", 1, 2)
            .await
            .unwrap();
        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Publisher 3", "Publisher 2"]);
        assert!(page.has_next_page);
    }

    #[tokio::test]
    async fn test_publisher_without_books_has_empty_projection() {
        let service = seeded_service().await;

        let view = service.get_publisher_by_id(3).await.unwrap();
        assert_eq!(view.name, "Publisher 3");
        assert!(view.book_authors.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_publisher() {
        let service = seeded_service().await;

        let err = service.delete_publisher(44).await.unwrap_err();
        assert_eq!(err.to_string(), "Publisher with id : 44 does not exists");
    }
}
