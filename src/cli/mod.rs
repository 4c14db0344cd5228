pub mod health;

use clap::Parser;

/// Query an Elasticsearch cluster's health and print a readable report
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Elastic Cloud ID, overrides ELASTIC_CLOUD_ID
    #[arg(long)]
    pub cloud_id: Option<String>,
    /// API key, overrides ELASTIC_API_KEY
    #[arg(long)]
    pub api_key: Option<String>,
    /// Request timeout in seconds (no timeout by default)
    #[arg(long)]
    pub timeout: Option<u64>,
}
