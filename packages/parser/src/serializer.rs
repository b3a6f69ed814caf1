use crate::ast::*;

/// Serializer converts a Document back to the indented listing format
///
/// Output follows the document's (sorted) order, so serializing a parsed
/// file yields a normalized copy of it. Truncated titles stay truncated.
pub struct Serializer {
    paper_indent: String,
    author_indent: String,
}

impl Serializer {
    pub fn new() -> Self {
        Self {
            paper_indent: " ".to_string(),
            author_indent: "  ".to_string(),
        }
    }

    /// Serialize a Document to listing source
    pub fn serialize(&self, doc: &Document) -> String {
        let mut output = String::new();

        for conference in &doc.conferences {
            self.serialize_conference(conference, &mut output);
        }

        output
    }

    fn serialize_conference(&self, conference: &Conference, output: &mut String) {
        output.push_str(&conference.key);
        output.push_str(", ");
        output.push_str(&conference.name);
        output.push('\n');

        for paper in &conference.papers {
            self.serialize_paper(paper, output);
        }
    }

    fn serialize_paper(&self, paper: &Paper, output: &mut String) {
        output.push_str(&self.paper_indent);
        output.push_str(&paper.year);
        output.push_str(", ");
        output.push_str(paper.url.as_deref().unwrap_or_default());
        output.push_str(", ");
        output.push_str(&paper.title);
        output.push('\n');

        for author in &paper.authors {
            self.serialize_author(author, output);
        }
    }

    fn serialize_author(&self, author: &Author, output: &mut String) {
        output.push_str(&self.author_indent);
        output.push_str(&author.name);
        output.push_str(", ");
        output.push_str(&author.institution);
        output.push('\n');
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to serialize a document
pub fn serialize(doc: &Document) -> String {
    Serializer::new().serialize(doc)
}
