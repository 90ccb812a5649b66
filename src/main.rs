use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "loopboard")]
#[command(version, about = "Kanban dashboard server for agent-driven issue queues")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard HTTP server
    Serve {
        /// Port to serve on
        #[arg(short, long, default_value = "4400")]
        port: u16,

        /// Bind on all interfaces and allow cross-origin requests
        #[arg(long)]
        dev: bool,
    },
    /// Compute the board once and print it as JSON
    Snapshot {
        /// Pretty-print the JSON document
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { port, dev } => cmd::cmd_serve(port, dev).await?,
        Commands::Snapshot { pretty } => cmd::cmd_snapshot(pretty).await?,
    }

    Ok(())
}
