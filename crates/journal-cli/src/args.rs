use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "journal")]
#[command(about = "A local-first journaling tool for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the data directory holding the journal
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new entry
    #[command(alias = "n")]
    Create {
        /// Title of the entry (required, at most 100 characters)
        title: String,

        /// Content of the entry
        content: String,

        /// Mood: happy, sad, anxious, productive or neutral
        #[arg(short, long)]
        mood: Option<String>,

        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// List entries (filtered, sorted, paginated)
    #[command(alias = "ls")]
    List {
        /// Search term matched against title or content
        #[arg(short, long)]
        search: Option<String>,

        /// Only entries with this mood
        #[arg(short, long)]
        mood: Option<String>,

        /// Only entries with a tag containing this text
        #[arg(short, long)]
        tag: Option<String>,

        /// Sort key: created, title or mood
        #[arg(long, default_value = "created")]
        sort: String,

        /// Sort order: asc or desc
        #[arg(long, default_value = "desc")]
        order: String,

        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Entries per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// View a single entry
    #[command(alias = "v")]
    View {
        /// Position as shown by `journal list` (1-based)
        position: usize,
    },

    /// Edit an entry; omitted fields keep their current value
    #[command(alias = "e")]
    Edit {
        /// Position as shown by `journal list` (1-based)
        position: usize,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        #[arg(short, long)]
        mood: Option<String>,

        /// Comma-separated tags (replaces the current tags)
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Position as shown by `journal list` (1-based)
        position: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show journal statistics
    Stats,
}
