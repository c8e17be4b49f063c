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


//! Database migrations
//!
//! This module handles database schema creation and migrations.
//!
//! # Migration Strategy
//! Since sqlx's compile-time migration system requires build-time database connection,
//! we implement migrations as runtime SQL execution. Applied migrations are
//! recorded in `_migrations` so reopening a file database is a no-op.

use crate::error::Result;
use sqlx::{Executor, SqlitePool};
use tracing::{debug, info};

/// Run all database migrations
///
/// This function creates the database schema and applies any pending migrations.
/// Migrations are tracked in the `_migrations` table.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    // Create migrations tracking table
    create_migrations_table(pool).await?;

    // Run all migrations in order
    run_migration(pool, 1, "initial_schema", create_initial_schema(pool)).await?;
    run_migration(pool, 2, "relation_indexes", create_relation_indexes(pool)).await?;
    run_migration(pool, 3, "publisher_folded_names", add_publisher_folded_names(pool)).await?;

    Ok(())
}

/// Create migrations tracking table
async fn create_migrations_table(pool: &SqlitePool) -> Result<()> {
    pool.execute(
        r#"
        CREATE TABLE IF NOT EXISTS _migrations (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .await?;

    Ok(())
}

/// Run a single migration if it hasn't been applied yet
async fn run_migration(
    pool: &SqlitePool,
    id: i32,
    name: &str,
    migration_fn: impl std::future::Future<Output = Result<()>>,
) -> Result<()> {
    let applied: Option<i32> = sqlx::query_scalar("SELECT id FROM _migrations WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    if applied.is_some() {
        debug!(migration = name, "migration already applied");
        return Ok(());
    }

    migration_fn.await?;

    sqlx::query("INSERT INTO _migrations (id, name) VALUES (?, ?)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await?;

    info!(migration = name, id, "applied migration");
    Ok(())
}

/// Create initial database schema
///
/// Deleting a publisher cascades to its books, and deleting a book or an
/// author cascades to the junction rows that reference it.
async fn create_initial_schema(pool: &SqlitePool) -> Result<()> {
    pool.execute(
        r#"
-- Publishers table: owners of books
CREATE TABLE IF NOT EXISTS Publishers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

-- Authors table
CREATE TABLE IF NOT EXISTS Authors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name TEXT NOT NULL
);

-- Books table: every book belongs to exactly one publisher
CREATE TABLE IF NOT EXISTS Books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    is_read INTEGER NOT NULL DEFAULT 0,
    genre TEXT NOT NULL DEFAULT '',
    cover_url TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    publisher_id INTEGER NOT NULL,

    FOREIGN KEY (publisher_id) REFERENCES Publishers(id) ON DELETE CASCADE
);

-- BookAuthors junction table (many-to-many)
CREATE TABLE IF NOT EXISTS BookAuthors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    book_id INTEGER NOT NULL,
    author_id INTEGER NOT NULL,

    FOREIGN KEY (book_id) REFERENCES Books(id) ON DELETE CASCADE,
    FOREIGN KEY (author_id) REFERENCES Authors(id) ON DELETE CASCADE
);
        "#,
    )
    .await?;

    Ok(())
}

/// Index the foreign keys walked by the publisher projection
async fn create_relation_indexes(pool: &SqlitePool) -> Result<()> {
    pool.execute(
        r#"
CREATE INDEX IF NOT EXISTS idx_books_publisher ON Books(publisher_id);
CREATE INDEX IF NOT EXISTS idx_book_authors_book ON BookAuthors(book_id);
CREATE INDEX IF NOT EXISTS idx_book_authors_author ON BookAuthors(author_id);
        "#,
    )
    .await?;

    Ok(())
}

/// Add the lowercased publisher name used by search
///
/// SQLite's `lower()` only handles ASCII, so existing rows are backfilled
/// with Rust's Unicode lowercasing.
async fn add_publisher_folded_names(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("ALTER TABLE Publishers ADD COLUMN name_folded TEXT NOT NULL DEFAULT ''")
        .execute(&mut *tx)
        .await?;

    let rows: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM Publishers")
        .fetch_all(&mut *tx)
        .await?;
    for (id, name) in &rows {
        sqlx::query("UPDATE Publishers SET name_folded = ? WHERE id = ?")
            .bind(name.to_lowercase())
            .bind(id)
            .execute(&mut *tx)
            .await?;
    }

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_publishers_name_folded ON Publishers(name_folded)")
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    debug!(backfilled = rows.len(), "folded publisher names");
    Ok(())
}
