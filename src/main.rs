// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use folio::{
    load_corpus, ContentStore, Corpus, Document, JsonCorpus, PostsDirectory, SearchIndex,
    SearchOptions, SearchResult,
};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{
    field_label, highlight, print_error, row, score_value, section_bot, section_top, themed,
    truncate, truncate_with_spans, BOLD, CYAN, GRAY, GREEN,
};
use cli::{Cli, Commands};

/// Log filter variable, e.g. `FOLIO_LOG=folio=debug`.
const LOG_ENV: &str = "FOLIO_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            corpus,
            query,
            limit,
            threshold,
            config,
            json,
        } => run_search(&corpus, &query, limit, threshold, config.as_deref(), json),
        Commands::Export {
            input,
            output,
            compress,
        } => cli::export::run_export(&input, &output, compress).map(|_| ()),
        Commands::Tags { corpus } => open_corpus(&corpus).map(|c| print_labels(&c.tags())),
        Commands::Categories { corpus } => {
            open_corpus(&corpus).map(|c| print_labels(&c.categories()))
        }
        Commands::Posts {
            corpus,
            page,
            per_page,
            tag,
            category,
        } => run_posts(&corpus, page, per_page, tag, category),
    };

    if let Err(e) = outcome {
        print_error(&e);
        std::process::exit(1);
    }
}

/// A directory is read as markdown posts; anything else as a corpus export.
fn open_store(path: &Path) -> Box<dyn ContentStore> {
    if path.is_dir() {
        Box::new(PostsDirectory::new(path))
    } else {
        Box::new(JsonCorpus::from_path(path))
    }
}

fn open_corpus(path: &Path) -> Result<Corpus, String> {
    load_corpus(&open_store(path)).map_err(|e| e.to_string())
}

fn run_search(
    corpus_path: &Path,
    query: &str,
    limit: usize,
    threshold: Option<f64>,
    config: Option<&Path>,
    json: bool,
) -> Result<(), String> {
    let mut options = match config {
        Some(path) => SearchOptions::from_path(path).map_err(|e| e.to_string())?,
        None => SearchOptions::default(),
    };
    if let Some(threshold) = threshold {
        options = options.with_threshold(threshold);
    }

    let corpus = open_corpus(corpus_path)?;
    let index = SearchIndex::build(corpus, options).map_err(|e| e.to_string())?;
    let results = index.search(query, limit);

    if json {
        let out = serde_json::to_string_pretty(&results)
            .map_err(|e| format!("Failed to serialize results: {}", e))?;
        println!("{}", out);
    } else {
        print_results(query, &results, index.len());
    }
    Ok(())
}

fn print_results(query: &str, results: &[SearchResult], total: usize) {
    section_top(&format!("\"{}\" · {} of {} posts", query, results.len(), total));
    if results.is_empty() {
        row(&themed(GRAY, &[], " no matches"));
    }
    for (rank, result) in results.iter().enumerate() {
        let doc = &result.document;
        let heading = if doc.title.is_empty() {
            doc.id.clone()
        } else {
            truncate(&doc.title, 56)
        };
        row(&format!(
            " {:>2}. {}  {}  {}",
            rank + 1,
            score_value(result.score),
            themed(CYAN, &[BOLD], &heading),
            themed(GRAY, &[], &doc.date)
        ));
        for m in result.matches.iter().flatten() {
            let (value, spans) = truncate_with_spans(&m.value, &m.spans, 60);
            row(&format!(
                "       {} {}",
                field_label(m.field),
                highlight(&value, &spans)
            ));
        }
    }
    section_bot();
}

fn print_labels(labels: &[String]) {
    for label in labels {
        println!("{}", label);
    }
}

fn run_posts(
    corpus_path: &Path,
    page: usize,
    per_page: usize,
    tag: Option<String>,
    category: Option<String>,
) -> Result<(), String> {
    let corpus = open_corpus(corpus_path)?;
    let corpus = match (tag, category) {
        (Some(tag), _) => filtered(corpus.by_tag(&tag))?,
        (None, Some(category)) => filtered(corpus.by_category(&category))?,
        (None, None) => corpus,
    };

    let listing = corpus.page(page, per_page);
    let p = &listing.pagination;
    section_top(&format!(
        "page {} of {} · {} posts",
        p.current_page,
        p.total_pages.max(1),
        p.total_posts
    ));
    for doc in &listing.posts {
        let marker = if doc.featured {
            themed(GREEN, &[BOLD], "★")
        } else {
            " ".to_string()
        };
        row(&format!(
            " {} {}  {}",
            marker,
            themed(GRAY, &[], &doc.date),
            truncate(&doc.title, 60)
        ));
    }
    section_bot();
    Ok(())
}

fn filtered(docs: Vec<Arc<Document>>) -> Result<Corpus, String> {
    Corpus::new(docs.iter().map(|d| d.as_ref().clone()).collect()).map_err(|e| e.to_string())
}
