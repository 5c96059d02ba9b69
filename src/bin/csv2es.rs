//! Bulk-loads a CSV file into an Elasticsearch index.
//!
//! Usage: `csv2es --file <path> --index <name> [--elastic <url>] [--chunk <n>]`

use anyhow::Context;
use es_autocomplete::config::{ElasticConfig, flag_value};
use es_autocomplete::elastic::client::ElasticClient;
use es_autocomplete::ingestion::bulk::{DEFAULT_CHUNK_SIZE, ingest};
use es_autocomplete::ingestion::loader::read_csv_file;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut file: Option<PathBuf> = None;
    let mut index: Option<String> = None;
    let mut chunk_size = DEFAULT_CHUNK_SIZE;
    let mut elastic = ElasticConfig::from_lookup(|key| std::env::var(key).ok())?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--file" => {
                file = Some(PathBuf::from(flag_value(&args, i)?));
                i += 2;
            }
            "--index" => {
                index = Some(flag_value(&args, i)?.to_string());
                i += 2;
            }
            "--elastic" => {
                elastic.url = flag_value(&args, i)?.to_string();
                i += 2;
            }
            "--chunk" => {
                chunk_size = flag_value(&args, i)?
                    .parse()
                    .context("--chunk expects a positive integer")?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let (Some(file), Some(index)) = (file, index) else {
        eprintln!(
            "Usage: {} --file <path> --index <name> [--elastic <url>] [--chunk <n>]",
            args[0]
        );
        std::process::exit(1);
    };

    let docs = read_csv_file(&file)?;
    tracing::info!("Read {} documents from {}", docs.len(), file.display());

    let client = ElasticClient::new(&elastic)?;
    let summary = ingest(&client, &index, &docs, chunk_size).await?;

    tracing::info!(
        "Done: {} indexed, {} failed into '{}' at {}",
        summary.indexed,
        summary.failed,
        index,
        client.base_url()
    );
    Ok(())
}
