// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};

use crate::recipe::DataSource;

#[derive(Parser, Debug)]
#[command(name = "recipe-search")]
#[command(about = "Recipe Search - find recipes by ingredient, offline or online", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceArg {
    Offline,
    Online,
}

impl From<SourceArg> for DataSource {
    fn from(value: SourceArg) -> Self {
        match value {
            SourceArg::Offline => DataSource::Offline,
            SourceArg::Online => DataSource::Online,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Search for recipes and print one page of results
    Search {
        /// Ingredient (or cuisine with --cuisine)
        query: String,

        /// Where to search
        #[arg(long, value_enum, default_value_t = SourceArg::Offline)]
        source: SourceArg,

        /// Match the cuisine column instead of ingredients (offline only)
        #[arg(long)]
        cuisine: bool,

        /// Offset of the first result to show
        #[arg(long, default_value_t = 0)]
        start: usize,
    },

    /// Show a single recipe
    Show {
        /// Offline row id, or external id with --online
        id: String,

        /// Fetch from the online source
        #[arg(long)]
        online: bool,
    },
}
