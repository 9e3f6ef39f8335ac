use std::path::PathBuf;

use clap::{Parser, Subcommand};
use roamer::sort::SortOrder;
use roamer::types::KindFilter;

/// Browse and filter the Green Roamer content catalog
#[derive(Parser)]
#[command(name = "roamer")]
#[command(about = "Filter travel videos and shorts from the Green Roamer catalog", long_about = None)]
pub struct Cli {
    /// Catalog JSON file (defaults to the bundled catalog)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Config file (defaults to the per-user config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List items matching the given filters
    List {
        /// all, long-form or short-form
        #[arg(short, long, default_value = "all")]
        kind: KindFilter,
        /// Country name, or "all"
        #[arg(short, long, default_value = "all")]
        country: String,
        /// Tag filter; repeat to match any of several
        #[arg(short, long = "tag")]
        tags: Vec<String>,
        /// Free text matched against titles and tags
        #[arg(short, long, default_value = "")]
        search: String,
        /// catalog, newest, views, likes or longest
        #[arg(long, default_value = "catalog")]
        sort: SortOrder,
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Items per page (defaults to the configured value)
        #[arg(long)]
        per_page: Option<usize>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Countries present in the catalog
    Countries,
    /// Most frequent tags
    Tags {
        /// How many tags to show (defaults to the configured value)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Catalog statistics
    Stats,
}
