// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The corpus transport format: one JSON array of document records.
//!
//! This is what a server hands to a client that runs search locally, fetched
//! once per session with no paging. Files ending in `.br` are brotli-compressed.

use super::ContentStore;
use crate::error::LoadError;
use crate::types::Document;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Brotli window size (log2) used for exported corpora.
pub const BROTLI_WINDOW: u32 = 22;

/// Brotli quality used for exported corpora.
pub const BROTLI_QUALITY: u32 = 11;

#[derive(Debug, Clone)]
enum Source {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// A corpus serialized as JSON, on disk or already in memory.
#[derive(Debug, Clone)]
pub struct JsonCorpus {
    source: Source,
}

impl JsonCorpus {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        JsonCorpus {
            source: Source::Path(path.into()),
        }
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        JsonCorpus {
            source: Source::Bytes(bytes.into()),
        }
    }

    fn read_path(path: &Path) -> io::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let mut file = File::open(path)?;
        if path.extension().is_some_and(|ext| ext == "br") {
            brotli::Decompressor::new(file, 4096).read_to_end(&mut bytes)?;
        } else {
            file.read_to_end(&mut bytes)?;
        }
        Ok(bytes)
    }
}

impl ContentStore for JsonCorpus {
    fn list_documents(&self) -> Result<Vec<Document>, LoadError> {
        match &self.source {
            Source::Path(path) => {
                let bytes = Self::read_path(path).map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_records(&bytes, &path.display().to_string())
            }
            Source::Bytes(bytes) => parse_records(bytes, "<memory>"),
        }
    }
}

fn parse_records(bytes: &[u8], origin: &str) -> Result<Vec<Document>, LoadError> {
    serde_json::from_slice(bytes).map_err(|source| LoadError::Json {
        origin: origin.to_string(),
        source,
    })
}

/// Brotli-compress a serialized corpus for export.
pub fn compress(json: &[u8]) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut reader = brotli::CompressorReader::new(json, 4096, BROTLI_QUALITY, BROTLI_WINDOW);
    reader.read_to_end(&mut out)?;
    Ok(out)
}
