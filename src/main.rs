use contact_manager::prelude::run_app;
use std::process::exit;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        exit(1);
    }
}
