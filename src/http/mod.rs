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


//! HTTP controller for the catalog, built on axum.
//!
//! ## Routes
//!
//! - `GET /api/publishers` — paginated listing (`sortField`, `sortDirection`,
//!   `search`, `pageNumber`, `pageSize`)
//! - `GET /api/publishers/:id` — publisher with its books and authors
//! - `POST /api/publishers` — create from `{ "name": ... }`, answers 201
//! - `DELETE /api/publishers/:id` — delete, answers 200
//!
//! Failures are answered as `{ "error": "<message>" }` with the status from
//! [`CatalogError::status_code`]. Server-side failures hide their message and
//! are logged instead.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use mybooks::{http, service::PublisherService, storage::Database};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::new_in_memory().await?;
//! let service = Arc::new(PublisherService::sqlite(db));
//! http::serve(service, "127.0.0.1:8080".parse()?).await?;
//! # Ok(())
//! # }
//! ```

mod publishers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::{error, info};

use crate::error::CatalogError;
use crate::service::PublisherService;

pub use publishers::ListPublishersParams;

/// Build an axum `Router` serving the publisher endpoints.
pub fn router(service: Arc<PublisherService>) -> Router {
    Router::new()
        .route(
            "/api/publishers",
            get(publishers::get_publishers).post(publishers::add_publisher),
        )
        .route(
            "/api/publishers/:id",
            get(publishers::get_publisher).delete(publishers::delete_publisher),
        )
        .with_state(service)
}

/// Serve the catalog over HTTP until Ctrl-C is received.
pub async fn serve(service: Arc<PublisherService>, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %listener.local_addr()?, "catalog HTTP server listening");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if status.is_server_error() {
            error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = CatalogError::PublisherNotFound(7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_server_errors_map_to_500() {
        let response = CatalogError::MigrationFailed("disk full".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = CatalogError::invalid_input("bad").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
