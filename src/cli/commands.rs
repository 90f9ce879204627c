//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagmark")]
#[command(about = "Manage tag configuration embedded in markdown readme files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every tag the readme defines
    Tags {
        /// Readme file, or a directory to search upward from
        readme: PathBuf,
    },

    /// List input files, for one tag or for all of them
    Files {
        /// Readme file, or a directory to search upward from
        readme: PathBuf,

        /// Restrict to a single tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show which tags are affected by a set of changed file paths
    Changed {
        /// Readme file, or a directory to search upward from
        readme: PathBuf,

        /// Changed file paths
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Point the Basic Information section at a new tag
    SetTag {
        /// Readme file, or a directory to search upward from
        readme: PathBuf,

        /// Tag name to set as latest
        new_tag: String,
    },

    /// Insert a new tag section ahead of the existing ones
    AddTag {
        /// Readme file, or a directory to search upward from
        readme: PathBuf,

        /// Name of the new tag
        new_tag: String,

        /// Input file for the new tag (repeatable)
        #[arg(short = 'f', long = "input-file", required = true)]
        input_files: Vec<String>,
    },

    /// Append a suppression directive, creating the section if needed
    Suppress {
        /// Readme file, or a directory to search upward from
        readme: PathBuf,

        /// Rule to suppress
        #[arg(long)]
        suppress: String,

        /// Document location the suppression applies to (repeatable)
        #[arg(long = "where", required = true)]
        locations: Vec<String>,

        /// Why the rule is suppressed
        #[arg(long)]
        reason: Option<String>,

        /// Source file the suppression applies to (repeatable)
        #[arg(long)]
        from: Vec<String>,

        /// Only suppress occurrences matching this pattern
        #[arg(long = "text-matches")]
        text_matches: Option<String>,
    },
}
