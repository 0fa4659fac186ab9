use anyhow::Result;
use clap::{Parser, Subcommand};
use clarify_common::{logger, AppConfig};

#[derive(Parser)]
#[command(name = "clarify")]
#[command(about = "Clarify - text simplification service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "5000")]
        port: u16,

        /// Simplification policy (local or remote)
        #[arg(long)]
        mode: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables before any config reads
    dotenv::dotenv().ok();

    match cli.command {
        Some(Commands::Serve { host, port, mode }) => {
            // CLI arguments override the environment
            std::env::set_var("SERVER_HOST", &host);
            std::env::set_var("SERVER_PORT", port.to_string());
            if let Some(mode) = &mode {
                std::env::set_var("SIMPLIFY_MODE", mode);
            }

            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_level)?;

            tracing::info!("Clarify starting...");
            tracing::info!("  Mode: {:?}", config.mode);
            tracing::info!("  Model: {}", config.llm_model);

            // The browser extension scans stdout for this line
            println!("Server listening on http://{}:{}", host, port);

            clarify_server::start_server(config).await?;
        }
        None => {
            let config = AppConfig::from_env()?;
            logger::setup_logging(&config.log_level)?;

            tracing::info!("Clarify starting with default configuration...");

            let bind_addr = config.server_bind_address();
            println!("Server listening on http://{}", bind_addr);

            clarify_server::start_server(config).await?;
        }
    }

    Ok(())
}
