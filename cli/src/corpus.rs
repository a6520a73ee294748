use anyhow::{bail, Context, Result};
use rustipedia_core::Document;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Load every `.txt` article under `dir`. Each file holds one article:
/// first line is the title, the remainder is the body. Files are read in
/// sorted path order so startup indexing is deterministic. Any unreadable
/// or empty file fails the whole load; the index never serves queries
/// against a partially loaded corpus.
pub fn load_corpus(dir: &Path) -> Result<Vec<Document>> {
    if !dir.is_dir() {
        bail!("article directory {} does not exist", dir.display());
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("failed to walk {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("txt") {
            paths.push(path.to_path_buf());
        }
    }
    paths.sort();

    let mut docs = Vec::with_capacity(paths.len());
    for path in &paths {
        let doc = parse_article(path)
            .with_context(|| format!("failed to load article {}", path.display()))?;
        docs.push(doc);
    }
    tracing::info!(articles = docs.len(), dir = %dir.display(), "corpus loaded");
    Ok(docs)
}

fn parse_article(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path)?;
    let mut lines = text.lines();
    let title = lines.next().context("article file is empty")?;
    let body = lines.collect::<Vec<_>>().join("\n");
    Ok(Document::new(title, body))
}
