// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Markdown posts with YAML front matter.
//!
//! ```text
//! content/posts/
//! ├── hello-world.mdx      ← slug "hello-world"
//! └── ownership.md         ← slug "ownership"
//! ```
//!
//! Each file starts with a `---` delimited YAML block. Only the fields search
//! and the loader care about are read; anything else in the block is ignored.
//! The slug always comes from the file name.

use super::excerpt::reading_time;
use super::ContentStore;
use crate::error::LoadError;
use crate::types::Document;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// File extensions treated as posts.
pub const POST_EXTENSIONS: [&str; 2] = ["md", "mdx"];

#[derive(Deserialize, Default, Debug)]
#[serde(default)]
struct FrontMatter {
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    author: Option<String>,
    tags: Option<Vec<String>>,
    categories: Option<Vec<String>>,
    image: Option<String>,
    featured: Option<bool>,
    draft: Option<bool>,
}

/// A directory of markdown posts.
#[derive(Debug, Clone)]
pub struct PostsDirectory {
    root: PathBuf,
}

impl PostsDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        PostsDirectory { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Post files directly under the root, sorted by path.
    ///
    /// A missing directory simply has no posts.
    pub fn post_paths(&self) -> Result<Vec<PathBuf>, LoadError> {
        if !self.root.exists() {
            debug!(root = %self.root.display(), "posts directory does not exist");
            return Ok(Vec::new());
        }

        let io_err = |source| LoadError::Io {
            path: self.root.clone(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            let is_post = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| POST_EXTENSIONS.contains(&ext));
            if is_post && path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

fn load_post(path: &Path) -> Result<Document, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_post(path, &content)
}

impl ContentStore for PostsDirectory {
    fn list_documents(&self) -> Result<Vec<Document>, LoadError> {
        let paths = self.post_paths()?;

        #[cfg(feature = "parallel")]
        let documents = paths
            .par_iter()
            .map(|path| load_post(path))
            .collect::<Result<Vec<_>, _>>()?;

        #[cfg(not(feature = "parallel"))]
        let documents = paths
            .iter()
            .map(|path| load_post(path))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(root = %self.root.display(), posts = documents.len(), "read posts");
        Ok(documents)
    }
}

/// Parse one post file into a [`Document`].
///
/// `path` supplies the slug (file stem) and error context.
pub fn parse_post(path: &Path, content: &str) -> Result<Document, LoadError> {
    let front_matter_err = |message: String| LoadError::FrontMatter {
        path: path.to_path_buf(),
        message,
    };

    let normalized = content.replace("\r\n", "\n");
    let mut lines = normalized.lines();

    if lines.next().map(str::trim) != Some("---") {
        return Err(front_matter_err(
            "missing opening front matter delimiter (`---`)".to_string(),
        ));
    }

    let mut yaml_lines = Vec::new();
    let mut found_end = false;
    for line in lines.by_ref() {
        if line.trim() == "---" {
            found_end = true;
            break;
        }
        yaml_lines.push(line);
    }
    if !found_end {
        return Err(front_matter_err(
            "missing closing front matter delimiter (`---`)".to_string(),
        ));
    }

    let yaml = yaml_lines.join("\n");
    let fm: FrontMatter = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str(&yaml).map_err(|e| front_matter_err(e.to_string()))?
    };

    let slug = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or(LoadError::MissingField {
            path: path.to_path_buf(),
            field: "slug",
        })?;

    let title = fm.title.map(|t| t.trim().to_string()).unwrap_or_default();
    if title.is_empty() {
        warn!(path = %path.display(), "post has no title; it will only match on other fields");
    }

    let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();
    let stats = reading_time(&body);

    Ok(Document {
        id: slug,
        title,
        description: fm.description.unwrap_or_default(),
        date: fm.date.unwrap_or_default(),
        author: fm.author.filter(|a| !a.trim().is_empty()),
        tags: clean_labels(fm.tags.unwrap_or_default()),
        categories: clean_labels(fm.categories.unwrap_or_default()),
        image: fm.image,
        featured: fm.featured.unwrap_or_default(),
        draft: fm.draft.unwrap_or_default(),
        reading_time: Some(stats),
        body,
    })
}

fn clean_labels(labels: Vec<String>) -> Vec<String> {
    labels
        .into_iter()
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
        .collect()
}
