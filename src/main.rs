//! Form builder - inspect the locally stored forms
//!
//! Opens the persisted store and prints one line per form with its field,
//! step and response counts and its share link.

use anyhow::Result;
use form_builder::{share, BuilderConfig, FileStorage, FormStore, MemoryStorage, StorageBackend};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "form_builder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = BuilderConfig::load()?;

    let storage: Box<dyn StorageBackend> = match config.resolved_storage_path() {
        Some(path) => {
            tracing::info!("Using storage at {}", path.display());
            Box::new(FileStorage::new(path))
        }
        None => {
            tracing::warn!("No data directory available, using in-memory storage");
            Box::new(MemoryStorage::new())
        }
    };

    let store = FormStore::open(storage)?.with_history_limit(config.history_limit());
    print_summary(&store, &config);

    Ok(())
}

fn print_summary(store: &FormStore, config: &BuilderConfig) {
    if store.forms().is_empty() {
        println!("No forms yet. {} template(s) available:", store.templates().len());
        for template in store.templates() {
            println!("  {:<16} {} ({})", template.id, template.name, template.category);
        }
        return;
    }

    for form in store.forms() {
        let steps = if form.is_multi_step { form.steps } else { 1 };
        println!(
            "{}\n  fields: {}  steps: {}  responses: {}\n  link: {}",
            form.title,
            form.fields.len(),
            steps,
            store.form_responses(&form.id).len(),
            share::form_url(config.share_base_url(), &form.id),
        );
    }
}
