//! Service entry point.
//!
//! `serve` starts the HTTP server; `migrate` manages the schema against the
//! `./migrations` directory with `up`, `down` and `create <name>` verbs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use contacts_api::config::{self, Config};
use contacts_api::server;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Parser)]
#[command(name = "contacts-api")]
#[command(about = "Contact book REST API server and migration runner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[derive(Subcommand)]
enum MigrateAction {
    /// Apply all pending migrations
    Up,

    /// Revert all applied migrations
    Down,

    /// Create a new empty reversible migration pair
    Create { name: String },
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn connect(config: &Config) -> Result<sqlx::PgPool> {
    PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

fn create_migration(name: &str) -> Result<()> {
    let version = chrono::Utc::now().format("%Y%m%d%H%M%S");
    for direction in ["up", "down"] {
        let path = format!("migrations/{version}_{name}.{direction}.sql");
        std::fs::write(&path, "")
            .with_context(|| format!("Failed to create migration file {path}"))?;
        println!("created {path}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;
    init_tracing(&config);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            config.print_summary();
            server::run(config).await
        }
        Commands::Migrate { action } => match action {
            MigrateAction::Up => {
                let pool = connect(&config).await?;
                MIGRATOR.run(&pool).await.context("Migration failed")?;
                tracing::info!("Migrations applied");
                Ok(())
            }
            MigrateAction::Down => {
                let pool = connect(&config).await?;
                MIGRATOR.undo(&pool, 0).await.context("Migration revert failed")?;
                tracing::info!("Migrations reverted");
                Ok(())
            }
            MigrateAction::Create { name } => create_migration(&name),
        },
    }
}
