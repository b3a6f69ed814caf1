use crate::ast::Span;
use std::fmt;

/// Indentation level of a source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    /// No leading space: `key, Name (Topic)`
    Conference(&'src str),
    /// Exactly one leading space: ` year, url, title`
    Paper(&'src str),
    /// Two or more leading spaces: `  name, institution`
    Author(&'src str),
}

impl<'src> Token<'src> {
    /// Line content with the indentation removed.
    ///
    /// Paper lines lose their single leading space; author lines lose exactly
    /// the first two characters, so any deeper indentation stays in the name.
    pub fn content(&self) -> &'src str {
        match self {
            Token::Conference(text) => text,
            Token::Paper(text) => &text[1..],
            Token::Author(text) => &text[2..],
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Token::Conference(_) => "conference",
            Token::Paper(_) => "paper",
            Token::Author(_) => "author",
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} line `{}`", self.kind(), self.content())
    }
}

/// Classify one line (already stripped of its line terminator).
///
/// Returns `None` for lines that are blank once trailing whitespace is removed.
pub fn classify(line: &str) -> Option<Token<'_>> {
    let line = line.trim_end();
    if line.is_empty() {
        return None;
    }

    if line.starts_with("  ") {
        Some(Token::Author(line))
    } else if line.starts_with(' ') {
        Some(Token::Paper(line))
    } else {
        Some(Token::Conference(line))
    }
}

/// Split source into classified lines with their spans
pub fn tokenize(source: &str) -> Vec<(Token<'_>, Span)> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    for (index, raw) in source.split_inclusive('\n').enumerate() {
        let start = offset;
        offset += raw.len();

        if let Some(token) = classify(raw) {
            let end = start + raw.trim_end().len();
            tokens.push((token, Span::new(start, end, index + 1)));
        }
    }

    tokens
}
