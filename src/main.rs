use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use kyc_analyzer::config::load_or_default;
use kyc_analyzer::lifecycle::{signals, RuntimeMode, Shutdown};
use kyc_analyzer::observability::{logging, metrics};
use kyc_analyzer::{HttpServer, RekognitionConnector};

#[derive(Parser)]
#[command(name = "kyc-analyzer")]
#[command(about = "Compare a selfie against an identity document with AWS Rekognition", long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long, env = "KYC_ANALYZER_CONFIG")]
    config: Option<PathBuf>,

    /// Hosting mode. Detected from the environment when omitted.
    #[arg(short, long, value_enum)]
    mode: Option<RuntimeMode>,
}

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;
    let mode = RuntimeMode::detect(cli.mode);

    logging::init(
        &config.observability,
        mode == RuntimeMode::Lambda || config.observability.json_logs,
    );

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        mode = ?mode,
        region = %config.rekognition.region,
        "kyc-analyzer starting"
    );

    let connector = Arc::new(RekognitionConnector::new(config.rekognition.clone()));

    match mode {
        RuntimeMode::Lambda => {
            let server = HttpServer::new(config, connector);
            lambda_http::run(server.into_router()).await?;
        }
        RuntimeMode::Local => {
            if config.observability.metrics_enabled {
                match config.observability.metrics_address.parse() {
                    Ok(addr) => {
                        if let Err(e) = metrics::init_metrics(addr) {
                            tracing::error!(error = %e, "Failed to start metrics endpoint");
                        }
                    }
                    Err(_) => tracing::error!(
                        metrics_address = %config.observability.metrics_address,
                        "Failed to parse metrics address"
                    ),
                }
            }

            let listener = TcpListener::bind(&config.listener.bind_address).await?;
            let shutdown = Arc::new(Shutdown::new());
            signals::spawn_signal_listener(shutdown.clone());

            let server = HttpServer::new(config, connector);
            server.run(listener, shutdown.signalled()).await?;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
