//! Content loader - loads one directory of front-matter files into records

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentKind, Fields, FrontMatter};
use crate::error::{ContentError, Result};

/// One source file, split but not yet validated
#[derive(Debug, Clone)]
pub struct Document {
    /// Source path, used as the record key
    pub path: PathBuf,
    pub front_matter: FrontMatter,
    /// Markdown body after the front-matter block
    pub body: String,
}

impl Document {
    /// Read and split a single file
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Split already-read text
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let (front_matter, body) =
            FrontMatter::parse(content).map_err(|source| ContentError::FrontMatter {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            front_matter,
            body: body.to_string(),
        })
    }

    pub fn fields(&self) -> Fields<'_> {
        Fields::new(&self.path, &self.front_matter)
    }

    /// The record key: the source path as text
    pub fn key(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// A content kind that can be built from a front-matter file
pub trait Record: Sized {
    const KIND: ContentKind;

    /// Validate one document against the kind's schema and apply its transforms
    fn from_document(doc: Document) -> Result<Self>;

    /// Collection-wide pass run after every document has been validated
    fn finish(_records: &mut [Self]) {}
}

/// Load every record of kind `R` found directly inside `dir`.
///
/// Files are visited in file-name order. A missing directory is an empty
/// collection; the first invalid file aborts the load.
pub fn load_collection<R: Record>(dir: &Path) -> Result<Vec<R>> {
    let files = content_files(dir)?;

    let mut records = Vec::with_capacity(files.len());
    for path in files {
        let doc = Document::read(&path)?;
        tracing::debug!("Loading {} from {:?}", R::KIND, path);
        records.push(R::from_document(doc)?);
    }

    R::finish(&mut records);

    tracing::debug!("Loaded {} {} records from {:?}", records.len(), R::KIND, dir);
    Ok(records)
}

/// List the markdown files directly inside `dir`, sorted by file name
pub fn content_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        tracing::debug!("Content directory {:?} does not exist", dir);
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            ContentError::Io {
                path,
                source: e.into(),
            }
        })?;

        let path = entry.path();
        if entry.file_type().is_file() && is_markdown_file(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
