//! Shop CLI - storefront cart from the command line.
//!
//! Every invocation is one session: the catalog is fetched, the saved cart
//! is restored, the command runs, and the cart is written back.
//!
//! Commands:
//! - `shop catalog` - List products
//! - `shop cart` - Show cart contents and totals
//! - `shop add <id> [qty]` - Add a quantity of a product
//! - `shop inc <id>` - Add one unit
//! - `shop remove <id>` - Remove one unit
//! - `shop delete <id>` - Drop a product from the cart
//! - `shop search <term>` - Search the catalog
//! - `shop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{AddArgs, CatalogArgs, ConfigArgs, ProductArgs, SearchArgs};

/// Shop CLI - browse the catalog and manage a persistent cart
#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products in the catalog
    Catalog(CatalogArgs),

    /// Show cart contents and totals
    Cart,

    /// Add a quantity of a product
    Add(AddArgs),

    /// Add one unit of a product
    Inc(ProductArgs),

    /// Remove one unit of a product
    Remove(ProductArgs),

    /// Drop a product from the cart
    Delete(ProductArgs),

    /// Search the catalog
    Search(SearchArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Cart => commands::cart::show(&ctx).await,
        Commands::Add(args) => commands::cart::add(args, &ctx).await,
        Commands::Inc(args) => commands::cart::inc(args, &ctx).await,
        Commands::Remove(args) => commands::cart::remove(args, &ctx).await,
        Commands::Delete(args) => commands::cart::delete(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
