//! tuneline server binary

use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tuneline::server::builder::run_server;
use tuneline::utils::logging::init_tracing;
use tuneline::Config;

#[derive(Parser, Debug)]
#[command(name = "server", version, about = "Tagline and voice command backend")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, env = "TUNELINE_CONFIG", default_value = "config/service.yaml")]
    config: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the environment may be set directly.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::load(&cli.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.logging());
    config.log_summary(Path::new(&cli.config));

    match run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
