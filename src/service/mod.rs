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


//! Publisher query service
//!
//! The service owns every read and write against publishers. It applies
//! sorting, search filtering and pagination through the repository, builds
//! the publisher → books → authors projection, and reports missing rows as
//! [`CatalogError::PublisherNotFound`](crate::error::CatalogError).

pub mod publisher_service;
pub mod repository;
pub mod views;

pub use publisher_service::{build_list_query, PublisherService};
pub use repository::{PublisherRepository, PublisherRepositoryArc, SqlitePublisherRepository};
pub use views::{BookAuthorsView, PaginatedView, PublisherBookAuthorsView, PublisherView};
