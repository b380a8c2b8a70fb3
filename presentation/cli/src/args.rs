use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Product catalog browser - fetch, filter, favorites", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the catalog and list products, optionally filtered
    List {
        /// Keep only products in this category (exact match; "All" lists everything)
        #[arg(long)]
        category: Option<String>,
        /// Keep only products within this price ceiling
        #[arg(long)]
        max_price: Option<f64>,
        /// Keep only favorited products
        #[arg(long)]
        favorites_only: bool,
    },
    /// Toggle the favorite flag for a product id
    Favorite {
        /// Product id as reported by `list`
        id: i64,
    },
    /// Fetch the catalog and list only favorited products
    Favorites,
}
