use crate::cli::Args;
use clap::Parser;
use log::info;

mod cli;
mod client;
mod cloud_id;
mod config;
mod errors;
mod logger;
mod models;
mod report;
mod vars;

fn main() {
    let args = Args::parse();
    // Load environment variables from .env file if it exists, before RUST_LOG is read
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    // Initialize the logger
    logger::init();
    if dotenv_loaded {
        info!("loaded .env file");
    }

    if let Err(e) = cli::health::run(args) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
