use anyhow::Result;
use clap::{Parser, Subcommand};

/// wsid - What Should I Drink
#[derive(Parser)]
#[command(name = "wsid")]
#[command(about = "Cocktail suggestions ranked by what you like", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Revert all migrations and apply them again
    Reset,
    /// Print ranked drink suggestions as JSON
    Generate {
        /// Number of candidates (defaults to the configured count)
        #[arg(long)]
        count: Option<usize>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = wsid::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    wsid::observability::init_observability(
        "wsid",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => wsid::cli::serve(config, host, port).await,
        Commands::Migrate => wsid::cli::migrate(&config).await,
        Commands::Reset => wsid::cli::reset(&config).await,
        Commands::Generate { count, seed } => wsid::cli::generate(&config, count, seed),
    }
}
