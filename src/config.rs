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


//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::Result;
use crate::storage::Database;

/// Default listen address of the HTTP server.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Where the catalog database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// Private in-memory database, lost on shutdown
    Memory,
    /// SQLite file, created if missing
    File(PathBuf),
}

impl DatabaseLocation {
    /// File location when `path` is given, else the platform default file.
    pub fn file_or_default(path: Option<PathBuf>) -> Self {
        DatabaseLocation::File(path.unwrap_or_else(Database::default_path))
    }

    /// Opens (and migrates) the database at this location.
    pub async fn open(&self) -> Result<Database> {
        match self {
            DatabaseLocation::Memory => Database::new_in_memory().await,
            DatabaseLocation::File(path) => Database::new(path).await,
        }
    }
}

/// Settings of the `serve` command.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub database: DatabaseLocation,
    /// Insert the sample catalog before serving
    pub seed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_parses() {
        let addr: SocketAddr = DEFAULT_BIND.parse().unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_file_or_default() {
        let explicit = DatabaseLocation::file_or_default(Some(PathBuf::from("/tmp/x.db")));
        assert_eq!(explicit, DatabaseLocation::File(PathBuf::from("/tmp/x.db")));

        let fallback = DatabaseLocation::file_or_default(None);
        assert_eq!(fallback, DatabaseLocation::File(Database::default_path()));
    }

    #[tokio::test]
    async fn test_open_memory() {
        let db = DatabaseLocation::Memory.open().await.unwrap();
        assert!(db.path().is_none());
    }
}
