//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::permutation::PermutationStrategy;
use crate::unique::UniquenessStrategy;

#[derive(Parser, Debug)]
#[command(name = "strgrid")]
#[command(about = "Classic string and grid checks")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether two strings are at most one edit apart
    OneAway {
        /// First string (absent when omitted)
        first: Option<String>,

        /// Second string (absent when omitted)
        second: Option<String>,
    },

    /// Check whether two strings are permutations of each other
    Permutation {
        /// First string (absent when omitted)
        first: Option<String>,

        /// Second string (absent when omitted)
        second: Option<String>,

        /// Algorithm to use (defaults to the configured strategy)
        #[arg(short, long)]
        strategy: Option<PermutationStrategy>,
    },

    /// Check whether the second string is a rotation of the first
    Rotation {
        /// Base string (absent when omitted)
        first: Option<String>,

        /// Candidate rotation (absent when omitted)
        second: Option<String>,
    },

    /// Check whether every character of a string is distinct
    Unique {
        /// String to check (absent when omitted)
        input: Option<String>,

        /// Algorithm to use (defaults to the configured strategy)
        #[arg(short, long)]
        strategy: Option<UniquenessStrategy>,
    },

    /// Zero every row and column of a matrix that contains a zero
    ZeroMatrix {
        /// Inline matrix, rows separated by ';' (e.g. "1 2 0; 3 0 4")
        #[arg(short, long, conflicts_with = "file")]
        matrix: Option<String>,

        /// JSON file holding an array of integer rows
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show or update persistent settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Restore default settings
    Reset,

    /// Update one or more settings
    Set {
        /// Default permutation strategy
        #[arg(long)]
        permutation_strategy: Option<PermutationStrategy>,

        /// Default uniqueness strategy
        #[arg(long)]
        uniqueness_strategy: Option<UniquenessStrategy>,

        /// Print JSON by default
        #[arg(long)]
        json_output: Option<bool>,
    },
}
