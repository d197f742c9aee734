//! Contact Book - Main entry point
//!
//! Loads the configured snapshot and prints the book page by page, followed
//! by the birthdays coming up in the configured window.

use anyhow::Result;
use chrono::Local;
use contact_book::{Config, Directory, LoadStatus};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let fallback_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    // Logging goes to stderr; stdout is reserved for the listing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut book = Directory::new();
    match book.load_from_file(&config.book_path)? {
        LoadStatus::Loaded(count) => info!("Loaded {} contacts", count),
        LoadStatus::Missing => {
            println!(
                "File '{}' not found. Starting with an empty address book.",
                config.book_path.display()
            );
        }
    }

    for (page, batch) in book.batches(config.page_size)?.enumerate() {
        println!("--- Page {} ---", page + 1);
        for record in batch {
            println!("{}", record);
        }
    }

    let today = Local::now().date_naive();
    let upcoming = book.upcoming_birthdays(today, config.birthday_window_days);
    if !upcoming.is_empty() {
        println!(
            "--- Birthdays in the next {} days ---",
            config.birthday_window_days
        );
        for (record, days) in upcoming {
            match days {
                0 => println!("{}: today", record.name()),
                1 => println!("{}: tomorrow", record.name()),
                n => println!("{}: in {} days", record.name(), n),
            }
        }
    }

    Ok(())
}
