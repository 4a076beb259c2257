use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addressbook", version)]
#[command(
    about = "In-memory address book with keyword search and favorites",
    long_about = "Reads one command per line from standard input. Type `help` for the list of commands."
)]
pub struct Cli {
    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Print command results as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line of input, parsed without a binary name.
#[derive(Parser, Debug)]
#[command(
    name = "addressbook",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct Line {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a person
    Add {
        /// Name of the person (one or more words)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Phone number (digits only)
        #[arg(short, long)]
        phone: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Address (one or more words)
        #[arg(short, long, required = true, num_args = 1..)]
        address: Vec<String>,
    },

    /// Delete the person at an index of the person list
    #[command(alias = "rm")]
    Delete {
        /// Index of the person (e.g. 3)
        index: String,
    },

    /// List all persons
    #[command(alias = "ls")]
    List,

    /// List persons whose names contain any of the keywords
    Find {
        /// Case-sensitive keywords
        #[arg(required = true, num_args = 1..)]
        keywords: Vec<String>,
    },

    /// Add the first person whose name contains any of the keywords to the favorites
    #[command(alias = "fav")]
    Favorite {
        /// Case-sensitive keywords
        #[arg(required = true, num_args = 1..)]
        keywords: Vec<String>,
    },

    /// List the favorites
    Favorites,

    /// Remove all persons
    Clear,

    /// Show usage of every command
    Help,

    /// End the session
    #[command(alias = "quit")]
    Exit,
}
