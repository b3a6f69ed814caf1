//! Error types for the award listing parser

use crate::ast::Span;
use thiserror::Error;

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Missing separator on line {}: expected {expected}", span.line)]
    MissingSeparator { span: Span, expected: String },

    #[error("Too few fields on line {}: expected `year, url, title`, found {found}", span.line)]
    MissingPaperFields { span: Span, found: usize },

    #[error("Paper on line {} appears before any conference", span.line)]
    PaperOutsideConference { span: Span },

    #[error("Author on line {} appears before any paper", span.line)]
    AuthorOutsidePaper { span: Span },
}

impl ParseError {
    pub fn missing_separator(span: Span, expected: impl Into<String>) -> Self {
        Self::MissingSeparator {
            span,
            expected: expected.into(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::MissingSeparator { span, .. }
            | ParseError::MissingPaperFields { span, .. }
            | ParseError::PaperOutsideConference { span }
            | ParseError::AuthorOutsidePaper { span } => *span,
        }
    }

    /// Short label shown under the offending line
    pub fn label(&self) -> String {
        match self {
            ParseError::MissingSeparator { expected, .. } => format!("expected {}", expected),
            ParseError::MissingPaperFields { found, .. } => {
                format!("found {} field(s), need at least 3", found)
            }
            ParseError::PaperOutsideConference { .. } => "no conference line above".to_string(),
            ParseError::AuthorOutsidePaper { .. } => "no paper line above".to_string(),
        }
    }

    /// Make the span relative to a slice that starts `offset` bytes and
    /// `lines` lines into the parsed source.
    pub fn rebased(mut self, offset: usize, lines: usize) -> Self {
        let span = match &mut self {
            ParseError::MissingSeparator { span, .. }
            | ParseError::MissingPaperFields { span, .. }
            | ParseError::PaperOutsideConference { span }
            | ParseError::AuthorOutsidePaper { span } => span,
        };
        span.start = span.start.saturating_sub(offset);
        span.end = span.end.saturating_sub(offset);
        span.line = span.line.saturating_sub(lines);
        self
    }
}

#[cfg(feature = "pretty-errors")]
pub mod pretty {
    use super::ParseError;

    /// Pretty-print an error with source context using ariadne
    pub fn format_error(error: &ParseError, filename: &str, source: &str) -> String {
        use ariadne::{Color, Config, Label, Report, ReportKind, Source};

        let span = error.span();
        let end = span.end.max(span.start + 1).min(source.len());
        let start = span.start.min(end);

        let mut output = Vec::new();
        let report = Report::build(ReportKind::Error, filename, start)
            .with_config(Config::default().with_color(false))
            .with_message(error.to_string())
            .with_label(
                Label::new((filename, start..end))
                    .with_color(Color::Red)
                    .with_message(error.label()),
            )
            .finish();

        if report
            .write((filename, Source::from(source)), &mut output)
            .is_err()
        {
            return error.to_string();
        }

        String::from_utf8(output).unwrap_or_else(|_| error.to_string())
    }
}
