use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manage CBZ comic books
#[derive(Parser, Debug)]
#[command(name = "cbzbook", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new, empty book
    Create {
        /// Path of the container file to create
        book: PathBuf,

        #[arg(short, long, default_value = "")]
        title: String,

        #[arg(short, long, default_value = "")]
        artist: String,

        #[arg(short, long, default_value = "")]
        language: String,
    },

    /// Append page images to a book, in the order given
    Add {
        book: PathBuf,

        /// Image files to append (.png, .jpeg or .jpg)
        #[arg(required = true)]
        sources: Vec<PathBuf>,
    },

    /// Remove pages by index (first page is 0)
    Remove {
        book: PathBuf,

        #[arg(required = true)]
        indices: Vec<usize>,
    },

    /// Print a book's metadata and page list
    Info { book: PathBuf },

    /// Extract one page's bytes to a file, or stdout if no output is given
    Extract {
        book: PathBuf,

        index: usize,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
