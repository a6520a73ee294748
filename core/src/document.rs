use serde::{Deserialize, Serialize};

/// An encyclopedia article. The title is the document's identity: the index
/// treats two documents with equal titles as the same entry. Ranking scores
/// are never stored on the document itself; they travel alongside a
/// reference in the per-query candidate (see `search::RankedMatch`), so
/// query state cannot leak into the shared corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub body: String,
}

impl Document {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { title: title.into(), body: body.into() }
    }
}
