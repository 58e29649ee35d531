// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `folio export`: posts directory in, content-addressed corpus file out.
//!
//! The file name carries the CRC32 of its bytes (`corpus-1a2b3c4d.json`), so a
//! client can cache it forever and a changed corpus gets a new URL.

use super::display::{format_size, themed, BOLD, GREEN};
use folio::corpus::store::compress;
use folio::{load_corpus, PostsDirectory};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[cfg(feature = "parallel")]
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

#[cfg(feature = "parallel")]
fn stage(multi: &MultiProgress, prefix: &'static str, message: &'static str) -> ProgressBar {
    let pb = multi.add(ProgressBar::new_spinner());
    pb.set_style(create_progress_style());
    pb.set_prefix(prefix);
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// File name for an exported corpus.
pub fn export_file_name(bytes: &[u8], compressed: bool) -> String {
    let hash = crc32fast::hash(bytes);
    if compressed {
        format!("corpus-{:08x}.json.br", hash)
    } else {
        format!("corpus-{:08x}.json", hash)
    }
}

/// Write the published corpus under `input_dir` to `output_dir`.
///
/// Returns the path written.
pub fn run_export(
    input_dir: &Path,
    output_dir: &Path,
    compressed: bool,
) -> Result<PathBuf, String> {
    #[cfg(feature = "parallel")]
    let multi = MultiProgress::new();

    // 1. Load posts
    #[cfg(feature = "parallel")]
    let load_pb = stage(&multi, "Loading", "posts...");

    let corpus = load_corpus(&PostsDirectory::new(input_dir)).map_err(|e| e.to_string())?;

    #[cfg(feature = "parallel")]
    load_pb.finish_with_message(format!("loaded {} posts", corpus.len()));

    if corpus.is_empty() {
        eprintln!("warning: no published posts under {}", input_dir.display());
    }

    // 2. Serialize (and compress)
    #[cfg(feature = "parallel")]
    let encode_pb = stage(&multi, "Encoding", "corpus...");

    let json = corpus
        .to_json()
        .map_err(|e| format!("Failed to serialize corpus: {}", e))?;
    let bytes = if compressed {
        compress(json.as_bytes()).map_err(|e| format!("Failed to compress corpus: {}", e))?
    } else {
        json.into_bytes()
    };

    #[cfg(feature = "parallel")]
    encode_pb.finish_with_message(format_size(bytes.len()));

    // 3. Write
    fs::create_dir_all(output_dir)
        .map_err(|e| format!("Failed to create output dir: {}", e))?;
    let path = output_dir.join(export_file_name(&bytes, compressed));
    fs::write(&path, &bytes).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

    info!(path = %path.display(), posts = corpus.len(), bytes = bytes.len(), "exported corpus");
    println!(
        "{} {} ({} posts, {})",
        themed(GREEN, &[BOLD], "wrote"),
        path.display(),
        corpus.len(),
        format_size(bytes.len())
    );

    Ok(path)
}
