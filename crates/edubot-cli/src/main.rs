mod config;
mod repl;

use clap::{Parser, Subcommand};
use config::EdubotConfig;
use edubot_core::ProviderId;
use edubot_gateway::GatewayServer;
use edubot_providers::ProviderResolver;
use edubot_session::{
    FileTranscriptStore, HttpChatApi, SessionClient, SessionConfig, SessionMode, STORAGE_KEY,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "edubot", about = "EduBot: a study assistant backed by free AI providers")]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "edubot.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Chat from the terminal
    Chat {
        /// Server to talk to (overrides config)
        #[arg(long)]
        server: Option<String>,
        /// Never contact a server; answer from the built-in knowledge base
        #[arg(long)]
        offline: bool,
        /// Model to ask (overrides config)
        #[arg(short, long)]
        model: Option<String>,
    },
    /// List providers and whether they are configured
    Providers,
}

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt().with_env_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    );
    if json {
        builder.json().init();
    } else {
        builder.compact().with_writer(std::io::stderr).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(matches!(cli.command, Commands::Serve { .. }));

    let config = EdubotConfig::load(&cli.config).await?;

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);

            info!("Starting EduBot server on {host}:{port}");

            let resolver = Arc::new(ProviderResolver::from_config(&config.providers)?);
            let ready = resolver.configured().values().filter(|ok| **ok).count();
            info!(configured = ready, "Providers loaded");

            let app = GatewayServer::build(resolver);

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("EduBot server listening on {addr}");
            axum::serve(listener, app).await?;
        }
        Commands::Chat {
            server,
            offline,
            model,
        } => {
            let model = model
                .unwrap_or_else(|| config.client.model.clone())
                .parse::<ProviderId>()?
                .as_str()
                .to_string();

            let mode = if offline {
                SessionMode::Standalone
            } else {
                let url = server.unwrap_or_else(|| config.client.server_url.clone());
                SessionMode::Networked(Arc::new(HttpChatApi::new(
                    url,
                    HttpChatApi::DEFAULT_TIMEOUT,
                )?))
            };
            let store = Arc::new(
                FileTranscriptStore::new(config.client.data_dir.join("transcripts")).await?,
            );
            let session = SessionClient::create(
                SessionConfig {
                    poll_interval: config.client.poll_interval(),
                    storage_key: STORAGE_KEY.to_string(),
                },
                store,
                mode,
            )
            .await;

            let result = repl::run(&session, model).await;
            session.dispose();
            result?;
        }
        Commands::Providers => {
            let resolver = ProviderResolver::from_config(&config.providers)?;
            let configured = resolver.configured();
            println!("Providers:");
            for id in ProviderId::ALL {
                let ready = configured.get(id.as_str()).copied().unwrap_or(false);
                let key = id.credential_env().unwrap_or("no key needed");
                println!(
                    "  {:<12} {:<22} {:<5} {:<14} {}",
                    id.as_str(),
                    id.display_name(),
                    format!("{:?}", id.cost_tier()).to_uppercase(),
                    if ready { "configured" } else { "not configured" },
                    key
                );
            }
            let free: Vec<&str> = ProviderId::free_tier().map(ProviderId::as_str).collect();
            println!("\nFree tier: {}", free.join(", "));
        }
    }

    Ok(())
}
