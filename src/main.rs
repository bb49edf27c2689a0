use std::process::ExitCode;

use tracing::error;
use voice_orders::{config::Config, lifecycle::setup_tracing, start_server};

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = start_server(config).await {
        error!("Server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
