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


//! Error types for MyBooks
//!
//! This module defines the catalog error type using thiserror. Errors are
//! grouped by domain (lookup, validation, storage) so the HTTP layer can map
//! them onto status codes without inspecting messages.
//!
//! ## Status code mapping
//!
//! - `PublisherNotFound` → 404
//! - `InvalidInput` → 400
//! - everything else → 500

use thiserror::Error;

/// Result type alias using our CatalogError type
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Main error type for the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    // ===== Lookup Errors =====

    /// No publisher row matches the requested id.
    ///
    /// The message wording is part of the public contract and is asserted
    /// by clients, so it must not change.
    #[error("Publisher with id : {0} does not exists")]
    PublisherNotFound(i64),

    // ===== Validation Errors =====

    /// Request parameters could not be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ===== Database Errors =====

    /// Database schema migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Filesystem operation around the database file failed
    #[error("File I/O error: {0}")]
    FileIoError(String),

    // ===== External Library Errors =====

    /// Database driver error from sqlx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CatalogError {
    /// Create an InvalidInput error with a message
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        CatalogError::InvalidInput(message.into())
    }

    /// Check if error means the addressed row does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::PublisherNotFound(_))
    }

    /// Check if error was caused by the caller rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CatalogError::PublisherNotFound(_) | CatalogError::InvalidInput(_)
        )
    }

    /// HTTP status code this error should be reported with
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::PublisherNotFound(_) => 404,
            CatalogError::InvalidInput(_) => 400,
            _ => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CatalogError::PublisherNotFound(4);
        assert_eq!(err.to_string(), "Publisher with id : 4 does not exists");
        assert!(err.is_not_found());
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(CatalogError::invalid_input("bad sort").status_code(), 400);
        assert!(CatalogError::invalid_input("bad sort").is_client_error());

        let err = CatalogError::MigrationFailed("boom".to_string());
        assert_eq!(err.status_code(), 500);
        assert!(!err.is_client_error());
        assert!(!err.is_not_found());
    }
}
