use serde::{Deserialize, Serialize};

/// Source label used when a document carries no source, title or id.
pub const UNKNOWN_SOURCE: &str = "unknown_source";

/// A caller-owned input document. Treated as an immutable snapshot for the
/// duration of one `answer` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

impl Document {
    pub fn new(title: impl Into<String>, content: impl Into<String>, source: impl Into<String>) -> Self {
        Self { id: None, title: Some(title.into()), content: content.into(), source: Some(source.into()), source_url: None }
    }

    /// First present of `source`, `source_url`, `title`, `id`, else [`UNKNOWN_SOURCE`].
    /// Blank strings count as absent.
    pub fn source_label(&self) -> &str {
        fn present(s: &Option<String>) -> Option<&str> {
            s.as_deref().filter(|v| !v.trim().is_empty())
        }
        present(&self.source)
            .or_else(|| present(&self.source_url))
            .or_else(|| present(&self.title))
            .or_else(|| present(&self.id))
            .unwrap_or(UNKNOWN_SOURCE)
    }
}

/// An offset-tagged excerpt: `content[start..end] == text` for its document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Passage {
    pub text: String,
    pub source: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPassage {
    pub passage: Passage,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub source: String,
    pub start: usize,
    pub end: usize,
}

impl From<&Passage> for Citation {
    fn from(p: &Passage) -> Self {
        Self { source: p.source.clone(), start: p.start, end: p.end }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "answer")]
    pub text: String,
    pub citations: Vec<Citation>,
}
