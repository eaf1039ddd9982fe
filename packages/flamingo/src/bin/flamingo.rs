//! Command-line front-end: runs one bot command and prints the reply.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flamingo_core::{Config, Embed, Flamingo};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "flamingo")]
#[command(about = "Birding bot commands from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Birds seen recently near a location
    Recent {
        location: String,
        /// Reverse the alphabetical order
        #[arg(long)]
        reversed: bool,
    },

    /// Notable (rare, out of season) sightings near a location
    Notable {
        location: String,
        #[arg(long)]
        reversed: bool,
    },

    /// Species profile from All About Birds
    Bird {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Print the embed as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available commands
    Help {
        #[arg(long)]
        json: bool,
    },
}

fn print_embed(embed: &Embed, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(embed).context("Failed to serialize embed")?
        );
    } else {
        print!("{embed}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,flamingo_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let bot = Flamingo::new(config).context("Failed to build HTTP clients")?;

    match cli.command {
        Commands::Recent { location, reversed } => {
            println!("{}", Flamingo::reply(bot.recent(&location, reversed).await));
        }
        Commands::Notable { location, reversed } => {
            println!("{}", Flamingo::reply(bot.notable(&location, reversed).await));
        }
        Commands::Bird { name, json } => {
            let embed = bot.bird(&name.join(" ")).await;
            print_embed(&embed, json)?;
        }
        Commands::Help { json } => print_embed(&bot.help(), json)?,
    }

    Ok(())
}
