//! Index of the markdown documents under the source directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

/// Set of documents a link target may resolve to.
#[derive(Debug, Clone, Default)]
pub struct DocumentIndex {
    /// Relative paths with `/` separators, e.g. `guide/intro.md`
    documents: BTreeSet<String>,
}

/// Errors that can occur while scanning the source directory.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Source directory not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Failed to scan {path}: {message}")]
    Scan { path: PathBuf, message: String },
}

impl DocumentIndex {
    /// Build an index from known relative document paths.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            documents: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Scan a source directory for `.md` documents.
    ///
    /// Hidden directories and anything under `exclude` are skipped.
    pub fn scan(source_dir: &Path, exclude: &[PathBuf]) -> Result<Self, CheckError> {
        if !source_dir.is_dir() {
            return Err(CheckError::SourceNotFound(source_dir.to_path_buf()));
        }

        let mut documents = BTreeSet::new();

        let walker = WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || !(is_hidden(e) || exclude.iter().any(|x| e.path() == x))
            });

        for entry in walker {
            let entry = entry.map_err(|e| CheckError::Scan {
                path: source_dir.to_path_buf(),
                message: e.to_string(),
            })?;
            let path = entry.path();

            if !entry.file_type().is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "md" {
                continue;
            }

            let relative = path.strip_prefix(source_dir).unwrap_or(path);
            let key = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            documents.insert(key);
        }

        tracing::debug!(
            "Indexed {} documents under {}",
            documents.len(),
            source_dir.display()
        );

        Ok(Self { documents })
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn contains(&self, document: &str) -> bool {
        self.documents.contains(document)
    }

    /// Find the document an internal link target points to.
    ///
    /// Accepts targets with or without `.md`, with a leading `/` or `./`, with
    /// a `#fragment` or `?query`, and directory targets ending in `/` (which
    /// map to `index.md`). `.html` targets map to their `.md` source. `.` and
    /// `..` segments are normalized; a target escaping the source root never
    /// resolves.
    pub fn resolve(&self, target: &str) -> Option<&str> {
        let raw = target.split(['#', '?']).next().unwrap_or("");
        let Some((path, is_dir)) = normalize(raw) else {
            tracing::debug!("Target {:?} escapes the source directory", target);
            return None;
        };

        let candidates: Vec<String> = if is_dir {
            if path.is_empty() {
                vec!["index.md".to_string()]
            } else {
                vec![format!("{}/index.md", path)]
            }
        } else if path.ends_with(".md") {
            vec![path]
        } else if let Some(stem) = path.strip_suffix(".html") {
            vec![format!("{}.md", stem)]
        } else {
            vec![format!("{}.md", path), format!("{}/index.md", path)]
        };

        let found = candidates
            .iter()
            .find_map(|c| self.documents.get(c.as_str()).map(String::as_str));
        tracing::debug!("Resolved {:?} -> {:?}", target, found);
        found
    }
}

/// Collapse `.`, `..` and empty segments of a `/`-separated path.
///
/// Returns the normalized path and whether it names a directory, or `None`
/// when `..` climbs above the root.
fn normalize(path: &str) -> Option<(String, bool)> {
    let mut segments: Vec<&str> = Vec::new();
    let mut is_dir = true;

    for segment in path.split('/') {
        match segment {
            "" | "." => is_dir = true,
            ".." => {
                segments.pop()?;
                is_dir = true;
            }
            name => {
                segments.push(name);
                is_dir = false;
            }
        }
    }

    Some((segments.join("/"), is_dir))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}
