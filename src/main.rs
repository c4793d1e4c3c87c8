mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Serve) => {
            cli::serve(&cli.data_file, &cli.addr).await?;
        }
        Some(Commands::List { json }) => {
            cli::list(&cli.data_file, json)?;
        }
        Some(Commands::Add {
            title,
            author,
            completed,
            rating,
        }) => {
            cli::add(&cli.data_file, title, author, completed, rating)?;
        }
        Some(Commands::Delete { id }) => {
            cli::delete(&cli.data_file, id)?;
        }
    }

    Ok(())
}
