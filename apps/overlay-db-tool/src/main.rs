//! CLI tool for dataset inspection and translated queries.
//!
//! Provides commands for:
//! - Listing records of a language with fallback and ordering
//! - Counting records in a storage scope
//! - Looking a record up by uid

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use overlay_db_core::config::DbConfig;
use overlay_db_core::dataset::Dataset;
use overlay_db_core::language::LanguageMode;
use overlay_db_core::query::Ordering;
use overlay_db_core::{Database, LanguageId, PageId, RecordUid};

/// Command-line arguments for the tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON dataset files, merged in the given order
    #[arg(short, long, required = true, num_args = 1..)]
    dataset: Vec<PathBuf>,

    /// Storage pages to query
    #[arg(short, long, value_delimiter = ',', default_value = "1")]
    pages: Vec<PageId>,

    /// Requested language (0 = default)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    language: i32,

    /// Omit records without an overlay in the requested language
    #[arg(long)]
    strict: bool,

    /// Ignore overlays and return default-language records
    #[arg(long)]
    no_overlays: bool,

    /// Query every page instead of the storage scope
    #[arg(long)]
    all_pages: bool,

    /// Maximum dataset size in bytes
    #[arg(long, default_value_t = 64 * 1024 * 1024)]
    max_dataset_size: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List records with their attachments
    Query {
        /// Orderings like `title` or `title:desc`, applied in order
        #[arg(short, long)]
        order_by: Vec<Ordering>,

        #[arg(long)]
        limit: Option<usize>,

        #[arg(long)]
        offset: Option<usize>,
    },
    /// Count records in scope
    Count,
    /// Look a record or overlay up by uid
    Find {
        #[arg(short, long)]
        uid: RecordUid,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = DbConfig {
        storage_page_ids: args.pages.iter().copied().collect(),
        respect_sys_language: !args.no_overlays,
        respect_storage_page: !args.all_pages,
        language_mode: if args.strict {
            LanguageMode::Strict
        } else {
            LanguageMode::ContentFallback
        },
        max_dataset_size: args.max_dataset_size,
    };
    let db = Database::new(config);
    let language = LanguageId(args.language);

    let mut dataset = Dataset::default();
    for path in &args.dataset {
        let part = Dataset::from_path(path, args.max_dataset_size)
            .with_context(|| format!("Failed to read dataset {}", path.display()))?;
        dataset = dataset.merge(part);
    }
    db.import(dataset).context("Failed to import dataset")?;

    let repository = db.repository();
    let output = match args.command {
        Command::Query {
            order_by,
            limit,
            offset,
        } => {
            let mut query = repository.create_query();
            query.settings_mut().set_language_uid(language);
            query.set_orderings(order_by);
            if let Some(limit) = limit {
                query.set_limit(limit);
            }
            if let Some(offset) = offset {
                query.set_offset(offset);
            }
            let result = query.execute();
            tracing::info!("Query returned {} records", result.count());
            serde_json::to_value(&result)?
        }
        Command::Count => serde_json::json!({ "count": repository.count_all(language) }),
        Command::Find { uid } => match repository.find_by_uid(uid, language) {
            Some(record) => serde_json::to_value(&record)?,
            None => {
                tracing::warn!("Record {} not found", uid);
                serde_json::Value::Null
            }
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
