//! Recipe Catalog CLI - serve the in-memory catalog over HTTP

use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;
use recipe_catalog::config::{self, CatalogConfig};
use recipe_catalog::schema::SCHEMA_SDL;
use recipe_catalog::store::{CascadePolicy, Catalog};
use recipe_catalog::ui::{self, Icons};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "recipe-catalog")]
#[command(version)]
#[command(about = "In-memory recipe catalog with a query/mutation API")]
#[command(long_about = r#"
Serves recipes, authors and ingredients from process memory.
State lives until the process exits.

Example usage:
  recipe-catalog serve --port 3003
  curl -X POST localhost:3003/api -H 'content-type: application/json' \
       -d '{"operation": "authorRecipes", "name": "Luis"}'
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind to
        #[arg(short, long)]
        bind: Option<IpAddr>,

        /// Start with an empty catalog
        #[arg(long)]
        no_seed: bool,

        /// How author/ingredient deletion matches recipes (literal, resolve_name)
        #[arg(long)]
        cascade: Option<CascadePolicy>,
    },

    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Print the schema of the API
    Schema,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Serve { port, bind, no_seed, cascade } => {
            let mut settings = config::load_config(cli.config.as_deref())?.unwrap_or_default();
            if port.is_some() {
                settings.port = port;
            }
            if bind.is_some() {
                settings.bind = bind;
            }
            if no_seed {
                settings.seed = Some(false);
            }
            if cascade.is_some() {
                settings.cascade = cascade;
            }

            let catalog = if settings.seed() {
                Catalog::seeded(settings.cascade())
            } else {
                Catalog::new(settings.cascade())
            };
            let addr = settings.addr();

            ui::header("Recipe catalog");
            ui::info("Listening", &format!("http://{}/api", addr));
            ui::info("Cascade", settings.cascade().as_str());
            ui::section(&format!("{} Catalog", Icons::STATS));
            let stats = catalog.stats();
            ui::summary_row("Recipes:", &stats.recipes.to_string());
            ui::summary_row("Authors:", &stats.authors.to_string());
            ui::summary_row("Ingredients:", &stats.ingredients.to_string());

            if let Err(e) = recipe_catalog::server::start_server(addr, catalog).await {
                ui::error(&format!("Server stopped: {}", e));
                return Err(e);
            }
        }

        Commands::Init { force } => {
            let path = cli.config.unwrap_or_else(config::default_config_path);
            config::write_config(&path, &CatalogConfig::with_defaults(), force)?;
            tracing::debug!("Wrote config to {}", path.display());
            ui::success(&format!("{} Config written to {}", Icons::GEAR, path.display()));
        }

        Commands::Schema => {
            print!("{}", SCHEMA_SDL);
        }
    }

    Ok(())
}
