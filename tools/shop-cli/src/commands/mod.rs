//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod search;

use clap::{Args, Subcommand};
use shop_commerce::ProductId;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Show at most this many products.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product id.
    pub id: ProductId,

    /// Quantity to add.
    #[arg(default_value_t = 1, allow_negative_numbers = true)]
    pub quantity: i64,
}

/// Arguments for commands acting on a single product.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id.
    pub id: ProductId,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in product titles and descriptions.
    pub term: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,

    /// Write a default shop.toml in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}
