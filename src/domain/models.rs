use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(pub String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A sidebar item. Its id names an anchor in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub label: String,
}

/// One searchable record. Several entries may point at the same section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub section_id: SectionId,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub section_id: SectionId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Code(String),
    Strong(String),
    Link(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { inlines: Vec<Inline> },
    Code { text: String },
    Note { inlines: Vec<Inline> },
}

/// A run of blocks that starts at an anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocSection {
    pub anchor: SectionId,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub site_name: String,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub entries: Vec<SearchEntry>,
    #[serde(default)]
    pub toc: Vec<TocEntry>,
    #[serde(default)]
    pub document: Vec<DocSection>,
}

impl Content {
    #[must_use]
    pub fn section_label(&self, id: &SectionId) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| &s.id == id)
            .map(|s| s.label.as_str())
    }

    #[must_use]
    pub fn has_anchor(&self, id: &SectionId) -> bool {
        self.document.iter().any(|d| &d.anchor == id)
    }
}
