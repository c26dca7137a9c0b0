use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;

use compass_rs::config::Settings;
use compass_rs::server;
use compass_rs::workflow::CareerWorkflow;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the routing workflow for a single query
    Run {
        /// The user query
        #[arg(short, long)]
        query: String,
    },
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let settings = Settings::from_env().context("failed to load configuration")?;

    match args.command {
        Commands::Run { query } => {
            let workflow =
                CareerWorkflow::from_settings(&settings).context("failed to build workflow")?;

            let outcome = workflow.run(&query).await?;
            println!("Category: {}", outcome.category);
            println!("Response: {}", outcome.response);
        }
        Commands::Serve { port } => {
            server::serve(&settings, port)
                .await
                .context("server failed")?;
        }
    }

    Ok(())
}
