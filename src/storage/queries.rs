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


//! Database query functions
//!
//! Plain async functions, one per statement. Functions that may run inside a
//! transaction are generic over the sqlx `Executor`, so callers pass either
//! the pool or `&mut *tx` explicitly.
//!
//! # Query Patterns
//! - Filtering, ordering and paging are pushed down to SQLite
//! - Ordering columns come from closed enums, never from caller text
//! - Search text is bound as a parameter with LIKE wildcards escaped

use crate::error::{CatalogError, Result};
use crate::storage::models::*;
use serde::{Deserialize, Serialize};
use sqlx::{Executor, QueryBuilder, Sqlite, SqlitePool};
use std::fmt;
use std::str::FromStr;

/// Page size used when the caller gives none or an invalid one
pub const DEFAULT_PAGE_SIZE: i64 = 10;

// ============================================================================
// LIST QUERY TYPES
// ============================================================================

/// Column a publisher listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublisherSortField {
    Id,
    Name,
}

impl PublisherSortField {
    fn column(self) -> &'static str {
        match self {
            PublisherSortField::Id => "id",
            PublisherSortField::Name => "name",
        }
    }
}

impl FromStr for PublisherSortField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(PublisherSortField::Id),
            "name" => Ok(PublisherSortField::Name),
            other => Err(CatalogError::invalid_input(format!(
                "unknown sort field '{}'",
                other
            ))),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// `desc` in any case means descending, anything else ascending
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        })
    }
}

/// Requested ordering for a publisher listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublisherSort {
    pub field: PublisherSortField,
    pub direction: SortDirection,
}

/// 1-based page request
///
/// Page numbers below 1 become 1 and sizes below 1 fall back to
/// `DEFAULT_PAGE_SIZE`. Any positive size is kept as requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: i64,
    size: i64,
}

impl PageRequest {
    pub fn new(number: i64, size: i64) -> Self {
        let number = number.max(1);
        let size = if size < 1 { DEFAULT_PAGE_SIZE } else { size };
        Self { number, size }
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    /// Rows to skip before this page starts
    pub fn offset(&self) -> i64 {
        (self.number - 1).saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// Filter, ordering and page for a publisher listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublisherListQuery {
    /// Case-insensitive substring match on `name`
    pub search: Option<String>,
    /// `None` orders by id ascending
    pub sort: Option<PublisherSort>,
    pub page: PageRequest,
}

/// One page of publishers plus the number of rows matching the filter
#[derive(Debug, Clone)]
pub struct PublisherPage {
    pub items: Vec<Publisher>,
    pub total_items: i64,
}

// ============================================================================
// PUBLISHER QUERIES
// ============================================================================

/// Insert a publisher
///
/// When `publisher.id` is `None` SQLite assigns the next id. The lowercased
/// name is stored alongside for search.
pub async fn insert_publisher<'e, E>(executor: E, publisher: &NewPublisher) -> Result<Publisher>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("INSERT INTO Publishers (id, name, name_folded) VALUES (?, ?, ?)")
        .bind(publisher.id)
        .bind(&publisher.name)
        .bind(publisher.name.to_lowercase())
        .execute(executor)
        .await?;

    Ok(Publisher {
        id: result.last_insert_rowid(),
        name: publisher.name.clone(),
    })
}

/// Find publisher by ID
pub async fn find_publisher_by_id<'e, E>(executor: E, publisher_id: i64) -> Result<Option<Publisher>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let publisher = sqlx::query_as::<_, Publisher>("SELECT id, name FROM Publishers WHERE id = ?")
        .bind(publisher_id)
        .fetch_optional(executor)
        .await?;

    Ok(publisher)
}

/// Check whether a publisher row exists
pub async fn publisher_exists<'e, E>(executor: E, publisher_id: i64) -> Result<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM Publishers WHERE id = ?)")
        .bind(publisher_id)
        .fetch_one(executor)
        .await?;

    Ok(exists)
}

/// Delete a publisher (books and their author links go with it via CASCADE)
///
/// Returns the number of rows removed.
pub async fn delete_publisher<'e, E>(executor: E, publisher_id: i64) -> Result<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM Publishers WHERE id = ?")
        .bind(publisher_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected())
}

/// List publishers with search, ordering and pagination
pub async fn list_publishers(pool: &SqlitePool, query: &PublisherListQuery) -> Result<PublisherPage> {
    let pattern = query
        .search
        .as_deref()
        .map(|search| like_pattern(&search.to_lowercase()));

    let mut count_query = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM Publishers");
    push_search_filter(&mut count_query, pattern.as_deref());
    let total_items: i64 = count_query
        .build_query_scalar::<i64>()
        .fetch_one(pool)
        .await?;

    let mut list_query = QueryBuilder::<Sqlite>::new("SELECT id, name FROM Publishers");
    push_search_filter(&mut list_query, pattern.as_deref());

    match query.sort {
        Some(PublisherSort { field: PublisherSortField::Id, direction }) => {
            list_query.push(format!(" ORDER BY id {}", direction.keyword()));
        }
        Some(PublisherSort { field, direction }) => {
            list_query.push(format!(
                " ORDER BY {} {}, id ASC",
                field.column(),
                direction.keyword()
            ));
        }
        None => {
            list_query.push(" ORDER BY id ASC");
        }
    }

    list_query
        .push(" LIMIT ")
        .push_bind(query.page.size())
        .push(" OFFSET ")
        .push_bind(query.page.offset());

    let items = list_query
        .build_query_as::<Publisher>()
        .fetch_all(pool)
        .await?;

    Ok(PublisherPage { items, total_items })
}

/// Count total publishers
pub async fn count_publishers(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Publishers")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

fn push_search_filter(builder: &mut QueryBuilder<'_, Sqlite>, pattern: Option<&str>) {
    if let Some(pattern) = pattern {
        // SQLite only folds ASCII in LIKE, so match the stored lowercase copy
        builder
            .push(" WHERE name_folded LIKE ")
            .push_bind(pattern.to_string())
            .push(" ESCAPE '\\'");
    }
}

/// Wrap search text in `%…%`, escaping LIKE metacharacters
fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// ============================================================================
// BOOK / AUTHOR QUERIES
// ============================================================================

/// Insert a new book
///
/// Returns the id of the inserted book.
pub async fn insert_book<'e, E>(executor: E, book: &NewBook) -> Result<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        r#"
        INSERT INTO Books (
            id, title, description, is_read, genre, cover_url, created_at, publisher_id
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(book.id)
    .bind(&book.title)
    .bind(&book.description)
    .bind(book.is_read)
    .bind(&book.genre)
    .bind(&book.cover_url)
    .bind(book.created_at)
    .bind(book.publisher_id)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Find books owned by a publisher, ordered by id
pub async fn find_books_by_publisher<'e, E>(executor: E, publisher_id: i64) -> Result<Vec<Book>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let books = sqlx::query_as::<_, Book>(
        "SELECT * FROM Books WHERE publisher_id = ? ORDER BY id",
    )
    .bind(publisher_id)
    .fetch_all(executor)
    .await?;

    Ok(books)
}

/// Insert a new author
pub async fn insert_author<'e, E>(executor: E, author: &NewAuthor) -> Result<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("INSERT INTO Authors (id, full_name) VALUES (?, ?)")
        .bind(author.id)
        .bind(&author.full_name)
        .execute(executor)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Find authors of a book, in link order
pub async fn find_authors_by_book<'e, E>(executor: E, book_id: i64) -> Result<Vec<Author>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let authors = sqlx::query_as::<_, Author>(
        r#"
        SELECT a.id, a.full_name FROM Authors a
        INNER JOIN BookAuthors ba ON a.id = ba.author_id
        WHERE ba.book_id = ?
        ORDER BY ba.id
        "#,
    )
    .bind(book_id)
    .fetch_all(executor)
    .await?;

    Ok(authors)
}

/// Link book to author
pub async fn insert_book_author<'e, E>(executor: E, link: &NewBookAuthor) -> Result<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("INSERT INTO BookAuthors (id, book_id, author_id) VALUES (?, ?, ?)")
        .bind(link.id)
        .bind(link.book_id)
        .bind(link.author_id)
        .execute(executor)
        .await?;

    Ok(result.last_insert_rowid())
}

/// One (book, author) pair under a publisher
///
/// `author_name` is `None` for books without any author link.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PublisherBookAuthorRow {
    pub book_id: i64,
    pub title: String,
    pub author_name: Option<String>,
}

/// All books of a publisher joined with their authors
///
/// Rows are ordered by book id, then by link id, so grouping consecutive
/// rows by `book_id` yields each book's authors in link order.
pub async fn find_publisher_book_authors<'e, E>(
    executor: E,
    publisher_id: i64,
) -> Result<Vec<PublisherBookAuthorRow>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query_as::<_, PublisherBookAuthorRow>(
        r#"
        SELECT
            b.id AS book_id,
            b.title,
            a.full_name AS author_name
        FROM Books b
        LEFT JOIN BookAuthors ba ON ba.book_id = b.id
        LEFT JOIN Authors a ON a.id = ba.author_id
        WHERE b.publisher_id = ?
        ORDER BY b.id, ba.id
        "#,
    )
    .bind(publisher_id)
    .fetch_all(executor)
    .await?;

    Ok(rows)
}
