use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this configuration file instead of the one in the config directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Free-text search over title, excerpt and tags
    #[arg(short, long, default_value = "")]
    pub q: String,
    /// Page number (1-based, clamped to the last page)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List blog posts
    Blog {
        #[command(flatten)]
        list: ListArgs,
        /// Only posts carrying exactly this tag
        #[arg(short, long)]
        tag: Option<String>,
        /// fecha-desc, fecha-asc or titulo-asc
        #[arg(short, long, default_value = "fecha-desc")]
        sort: String,
    },
    /// List catalog products
    Catalog {
        #[command(flatten)]
        list: ListArgs,
        /// Only products in exactly this category
        #[arg(short, long)]
        cat: Option<String>,
        /// Price ceiling; 0 means no ceiling
        #[arg(short = 'r', long)]
        max_price: Option<f64>,
        /// relevancia, precio-asc, precio-desc or nombre-asc
        #[arg(short, long, default_value = "relevancia")]
        sort: String,
    },
    /// Show one post by slug, with page metadata
    Post {
        slug: String,
    },
    /// List the tags (or catalog categories) in use
    Tags {
        #[arg(long)]
        catalog: bool,
    },
    /// Validate and submit a job application
    Apply {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        vacante: String,
        #[arg(long, default_value = "")]
        telefono: String,
        #[arg(long, default_value = "")]
        mensaje: String,
        #[arg(long, default_value = "", hide = true)]
        empresa: String,
    },
    /// Wishlist kept on disk
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum CartAction {
    /// Add a product by SKU
    Add { sku: String },
    /// Show saved entries
    List,
}
