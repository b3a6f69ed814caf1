use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Span information for source location tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    /// 1-based line number
    pub line: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize) -> Self {
        Self { start, end, line }
    }
}

/// Root document node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub conferences: Vec<Conference>,
    pub year_counts: YearCounts,
}

/// A conference and the best papers it awarded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conference {
    /// Lowercase slug used for anchors and grouping
    pub key: String,
    /// First word of `name`, shown in the conference index
    pub short_name: String,
    /// Display name and topic, e.g. "NeurIPS (Machine Learning)"
    pub name: String,
    pub papers: Vec<Paper>,
    pub span: Span,
}

/// An awarded paper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub year: String,
    pub url: Option<String>,
    pub title: String,
    pub authors: Vec<Author>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub institution: String,
    pub span: Span,
}

/// Number of papers per year within each conference.
///
/// The renderer uses these counts as the row-span of the year cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearCounts {
    counts: BTreeMap<String, BTreeMap<String, usize>>,
}

impl Conference {
    pub fn new(key: impl Into<String>, name: impl Into<String>, span: Span) -> Self {
        let name = name.into();
        let short_name = name.split(' ').next().unwrap_or_default().to_string();
        Self {
            key: key.into(),
            short_name,
            name,
            papers: Vec::new(),
            span,
        }
    }

    pub fn author_count(&self) -> usize {
        self.papers.iter().map(|paper| paper.authors.len()).sum()
    }
}

impl Paper {
    pub fn first_author(&self) -> Option<&Author> {
        self.authors.first()
    }

    /// Last space-delimited token of the first author's name
    pub fn first_author_surname(&self) -> Option<&str> {
        self.first_author()
            .and_then(|author| author.name.split(' ').next_back())
    }
}

impl YearCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh, empty tally for a conference (replacing any previous one)
    pub fn reset(&mut self, key: &str) {
        self.counts.insert(key.to_string(), BTreeMap::new());
    }

    pub fn increment(&mut self, key: &str, year: &str) {
        *self
            .counts
            .entry(key.to_string())
            .or_default()
            .entry(year.to_string())
            .or_insert(0) += 1;
    }

    pub fn get(&self, key: &str, year: &str) -> usize {
        self.counts
            .get(key)
            .and_then(|years| years.get(year))
            .copied()
            .unwrap_or(0)
    }

    pub fn years(&self, key: &str) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .get(key)
            .into_iter()
            .flat_map(|years| years.iter().map(|(year, count)| (year.as_str(), *count)))
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            conferences: Vec::new(),
            year_counts: YearCounts::new(),
        }
    }

    pub fn paper_count(&self) -> usize {
        self.conferences.iter().map(|c| c.papers.len()).sum()
    }

    pub fn author_count(&self) -> usize {
        self.conferences.iter().map(Conference::author_count).sum()
    }

    /// Comma-joined short names, in document order
    pub fn conference_list(&self) -> String {
        self.conferences
            .iter()
            .map(|c| c.short_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn papers(&self) -> impl Iterator<Item = (&Conference, &Paper)> {
        self.conferences
            .iter()
            .flat_map(|conference| conference.papers.iter().map(move |paper| (conference, paper)))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
