//! PageKV Server Binary
//!
//! Starts the HTTP server for PageKV.

use std::sync::Arc;

use clap::Parser;
use pagekv::network::Server;
use pagekv::{Config, Engine, SnapshotConsistency, StorageBackend};
use tracing_subscriber::{fmt, EnvFilter};

/// PageKV Server
#[derive(Parser, Debug)]
#[command(name = "pagekv-server")]
#[command(about = "HTTP key-value store with paginated listing and search")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./pagekv_data")]
    data_dir: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    listen: String,

    /// Listen port; replaces the port of --listen
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Keep all data in memory (nothing is written to --data-dir)
    #[arg(long)]
    in_memory: bool,

    /// Entries pulled from the store per enumeration batch
    #[arg(long, default_value = "100")]
    prefetch: usize,

    /// Count and fetch each page in separate snapshots
    #[arg(long)]
    independent_snapshots: bool,
}

impl Args {
    fn listen_addr(&self) -> String {
        match self.port {
            Some(port) => {
                let host = self
                    .listen
                    .rsplit_once(':')
                    .map(|(host, _)| host)
                    .unwrap_or("0.0.0.0");
                format!("{}:{}", host, port)
            }
            None => self.listen.clone(),
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pagekv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();
    let listen_addr = args.listen_addr();

    tracing::info!("PageKV Server v{}", pagekv::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);
    tracing::info!("Listen address: {}", listen_addr);

    // Build config from args
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .storage(if args.in_memory {
            StorageBackend::InMemory
        } else {
            StorageBackend::Disk
        })
        .listen_addr(listen_addr)
        .prefetch_size(args.prefetch)
        .consistency(if args.independent_snapshots {
            SnapshotConsistency::IndependentSnapshots
        } else {
            SnapshotConsistency::SingleSnapshot
        })
        .build();

    // Open engine
    let engine = match Engine::open(config.clone()) {
        Ok(e) => Arc::new(e),
        Err(e) => {
            tracing::error!("Failed to open engine: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Engine initialized successfully");

    let server = Server::new(config, Arc::clone(&engine));
    if let Err(e) = server.run(shutdown_signal()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    // The router and its state are gone once `run` returns.
    match Arc::try_unwrap(engine) {
        Ok(engine) => {
            if let Err(e) = engine.close() {
                tracing::error!("Failed to close engine: {}", e);
                std::process::exit(1);
            }
        }
        Err(_) => tracing::warn!("Engine still referenced at shutdown; skipping close"),
    }

    tracing::info!("Server stopped");
}

/// Resolves on Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, initiating shutdown...");
}
