//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - browse: interactive list/detail browser (default)
//! - list: print one page of the filtered catalog
//! - categories: print categories with counts
//! - show: print one tool's detail view
//! - check: report catalog integrity problems

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tooldir::query::QueryState;

/// tooldir - browse a directory of tools
#[derive(Parser, Debug)]
#[command(name = "tooldir")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog location (URL or file path), overrides the config
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the catalog interactively
    Browse {
        /// Open the detail view for this slug
        #[arg(long)]
        slug: Option<String>,
    },

    /// Print one page of the catalog
    List {
        /// Search name, description and tagline
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Only show this category
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Print categories with tool counts
    Categories,

    /// Show a single tool
    Show {
        /// Tool slug
        slug: String,
    },

    /// Report duplicate ids and unreachable slugs
    Check,
}

impl Commands {
    /// Query state for `list`. Filters go first: changing one resets the page.
    pub fn list_query(&self) -> Option<QueryState> {
        let Commands::List { search, category, page } = self else {
            return None;
        };
        let mut query = QueryState::new();
        if let Some(search) = search {
            query = query.with_search(search.as_str());
        }
        if let Some(category) = category {
            query = query.with_category(category.as_str());
        }
        Some(query.with_page(*page))
    }
}
