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


//! File-backed database scenario: data and migrations survive a reopen.

use mybooks::service::{PublisherService, PublisherView};
use mybooks::storage::{queries, seed::seed_sample_catalog};
use mybooks::Database;

#[tokio::test]
async fn catalog_survives_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("catalog.db");

    let db = Database::new(&path).await.expect("Failed to create database");
    seed_sample_catalog(db.pool()).await.expect("Failed to seed");
    let service = PublisherService::sqlite(db.clone());
    let created = service
        .add_publisher(PublisherView {
            name: "Persistent Press".to_string(),
        })
        .await
        .unwrap();
    db.close().await.unwrap();

    let reopened = Database::new(&path).await.expect("Failed to reopen database");
    assert_eq!(reopened.path(), Some(path.as_path()));
    assert_eq!(queries::count_publishers(reopened.pool()).await.unwrap(), 4);

    let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _migrations")
        .fetch_one(reopened.pool())
        .await
        .unwrap();
    assert_eq!(migrations, 3);

    let service = PublisherService::sqlite(reopened);
    let view = service.get_publisher_by_id(1).await.unwrap();
    assert_eq!(view.book_authors.len(), 2);

    service.delete_publisher(created.id).await.unwrap();
    assert!(service.get_publisher_by_id(created.id).await.is_err());
}
