//! PageKV CLI
//!
//! Runs commands directly against a data directory. The server must not be
//! running on the same directory: the database file is opened exclusively.

use clap::{Parser, Subcommand};
use pagekv::protocol::{Command, EntryBody, Reply};
use pagekv::{Config, Engine, PageRequest};
use tracing_subscriber::{fmt, EnvFilter};

/// PageKV CLI
#[derive(Parser, Debug)]
#[command(name = "pagekv-cli")]
#[command(about = "CLI for the PageKV key-value store")]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./pagekv_data")]
    data_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Set {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,
    },

    /// List entries in key order
    List {
        #[arg(short, long, default_value = "1")]
        page: usize,

        #[arg(short = 's', long, default_value = "10")]
        page_size: usize,
    },

    /// List entries whose key contains a keyword
    Search {
        /// Substring to look for in keys
        keyword: String,

        #[arg(short, long, default_value = "1")]
        page: usize,

        #[arg(short = 's', long, default_value = "10")]
        page_size: usize,
    },
}

impl Commands {
    fn into_command(self) -> Command {
        match self {
            Commands::Get { key } => Command::Get { key: key.into_bytes() },
            Commands::Set { key, value } => Command::Set {
                key: key.into_bytes(),
                value: value.into_bytes(),
            },
            Commands::Del { key } => Command::Delete { key: key.into_bytes() },
            Commands::List { page, page_size } => Command::List {
                page: PageRequest::new(page, page_size),
            },
            Commands::Search {
                keyword,
                page,
                page_size,
            } => Command::Search {
                keyword: keyword.into_bytes(),
                page: PageRequest::new(page, page_size),
            },
        }
    }
}

fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder().data_dir(&args.data_dir).build();
    let engine = match Engine::open(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let outcome = engine.execute(args.command.into_command());
    let close = engine.close();

    match outcome {
        Ok(reply) => print_reply(reply),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = close {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn print_reply(reply: Reply) {
    match reply {
        Reply::Value(value) => println!("{}", String::from_utf8_lossy(&value)),
        Reply::Page(page) => {
            for entry in &page.items {
                let body = EntryBody::from(entry);
                println!("{}\t{}", body.key, body.value);
            }
            println!(
                "-- page {} (size {}), {} of {} total",
                page.page,
                page.page_size,
                page.items.len(),
                page.total
            );
        }
        reply @ (Reply::Stored { .. } | Reply::Deleted { .. }) => {
            println!("{}", reply.message().unwrap_or_default())
        }
    }
}
