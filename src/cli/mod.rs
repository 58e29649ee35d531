// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! `search` runs a query against a posts directory or an exported corpus file,
//! `export` writes the corpus transport file, and `tags`, `categories`, and
//! `posts` print the listing views. Every command that reads a corpus accepts
//! either a directory of markdown posts or a `.json` / `.json.br` export.

pub mod display;
pub mod export;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio", about = "Fuzzy search for a blog corpus", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus and display ranked results
    Search {
        /// Posts directory, or an exported corpus (.json / .json.br)
        corpus: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results (0 uses the configured default)
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Match threshold from 0.0 (exact only) to 1.0 (anything)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// JSON file with search options
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Export the published corpus as a JSON transport file
    Export {
        /// Posts directory
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for the corpus file
        #[arg(short, long)]
        output: PathBuf,

        /// Brotli-compress the output (.json.br)
        #[arg(long)]
        compress: bool,
    },

    /// List every tag in use
    Tags {
        /// Posts directory, or an exported corpus (.json / .json.br)
        corpus: PathBuf,
    },

    /// List every category in use
    Categories {
        /// Posts directory, or an exported corpus (.json / .json.br)
        corpus: PathBuf,
    },

    /// List posts a page at a time, newest first
    Posts {
        /// Posts directory, or an exported corpus (.json / .json.br)
        corpus: PathBuf,

        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Posts per page
        #[arg(long, default_value = "6")]
        per_page: usize,

        /// Only posts with this tag
        #[arg(long, conflicts_with = "category")]
        tag: Option<String>,

        /// Only posts in this category
        #[arg(long)]
        category: Option<String>,
    },
}
