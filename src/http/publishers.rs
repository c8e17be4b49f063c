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


//! Publisher endpoints.
//!
//! Handlers only translate between HTTP and [`PublisherService`] calls.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Deserializer};

use crate::error::Result;
use crate::service::{PublisherService, PublisherView};
use crate::storage::queries::DEFAULT_PAGE_SIZE;

/// Query string of `GET /api/publishers`.
///
/// Every parameter is optional. Empty values behave like missing ones.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListPublishersParams {
    pub sort_field: String,
    pub sort_direction: String,
    pub search: String,
    #[serde(deserialize_with = "empty_as_none")]
    pub page_number: Option<i64>,
    #[serde(deserialize_with = "empty_as_none")]
    pub page_size: Option<i64>,
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// `GET /api/publishers`
pub(super) async fn get_publishers(
    State(service): State<Arc<PublisherService>>,
    Query(params): Query<ListPublishersParams>,
) -> Result<impl IntoResponse> {
    let page = service
        .get_publishers(
            &params.sort_field,
            &params.sort_direction,
            &params.search,
            params.page_number.unwrap_or(1),
            params.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .await?;

    Ok(Json(page))
}

/// `GET /api/publishers/:id`
pub(super) async fn get_publisher(
    State(service): State<Arc<PublisherService>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let view = service.get_publisher_by_id(id).await?;
    Ok(Json(view))
}

/// `POST /api/publishers`
pub(super) async fn add_publisher(
    State(service): State<Arc<PublisherService>>,
    Json(publisher): Json<PublisherView>,
) -> Result<impl IntoResponse> {
    let created = service.add_publisher(publisher).await?;
    let location = format!("/api/publishers/{}", created.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

/// `DELETE /api/publishers/:id`
pub(super) async fn delete_publisher(
    State(service): State<Arc<PublisherService>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    service.delete_publisher(id).await?;
    Ok(StatusCode::OK)
}
