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


use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mybooks::config::{DatabaseLocation, ServerConfig, DEFAULT_BIND};
use mybooks::logging::init_logging;
use mybooks::storage::seed::seed_sample_catalog;
use mybooks::{http, PublisherService};
use tracing::info;

#[derive(Parser)]
#[command(name = "mybooks")]
#[command(about = "MyBooks catalog server", long_about = None, version)]
struct Cli {
    /// Log filter directive, e.g. "debug" or "mybooks=debug,sqlx=warn"
    #[arg(long, global = true, env = "MYBOOKS_LOG")]
    log_filter: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the catalog HTTP API
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "MYBOOKS_BIND", default_value = DEFAULT_BIND)]
        bind: SocketAddr,
        /// SQLite database file (defaults to the platform data directory)
        #[arg(short, long, env = "MYBOOKS_DATABASE", conflicts_with = "in_memory")]
        database: Option<PathBuf>,
        /// Use a throwaway in-memory database
        #[arg(long)]
        in_memory: bool,
        /// Insert the sample catalog before serving
        #[arg(long)]
        seed: bool,
    },
    /// Create or upgrade the database schema
    Migrate {
        #[arg(short, long, env = "MYBOOKS_DATABASE")]
        database: Option<PathBuf>,
    },
    /// Insert the sample catalog
    Seed {
        #[arg(short, long, env = "MYBOOKS_DATABASE")]
        database: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_filter.as_deref());

    match cli.command {
        Commands::Serve {
            bind,
            database,
            in_memory,
            seed,
        } => {
            let database = if in_memory {
                DatabaseLocation::Memory
            } else {
                DatabaseLocation::file_or_default(database)
            };
            serve(ServerConfig {
                bind,
                database,
                seed,
            })
            .await
        }
        Commands::Migrate { database } => {
            let location = DatabaseLocation::file_or_default(database);
            let db = location.open().await.context("failed to open database")?;
            info!(?location, "database schema is up to date");
            db.close().await?;
            Ok(())
        }
        Commands::Seed { database } => {
            let location = DatabaseLocation::file_or_default(database);
            let db = location.open().await.context("failed to open database")?;
            seed_sample_catalog(db.pool())
                .await
                .context("failed to seed sample catalog")?;
            db.close().await?;
            Ok(())
        }
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    info!(version = mybooks::version(), "starting MyBooks");

    let db = config
        .database
        .open()
        .await
        .with_context(|| format!("failed to open database {:?}", config.database))?;

    if config.seed {
        seed_sample_catalog(db.pool())
            .await
            .context("failed to seed sample catalog")?;
    }

    let service = Arc::new(PublisherService::sqlite(db.clone()));
    http::serve(service, config.bind)
        .await
        .with_context(|| format!("HTTP server on {} failed", config.bind))?;

    db.close().await?;
    Ok(())
}
