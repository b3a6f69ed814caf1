use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::tokenizer::{tokenize, Token};
use tracing::{debug, instrument};

/// Longest title kept verbatim, in characters
pub const MAX_TITLE_CHARS: usize = 99;

/// Appended to truncated titles
pub const ELLIPSIS: &str = "...";

const SEPARATOR: &str = ", ";

/// Where the parser is in the conference / paper / author nesting
#[derive(Debug)]
enum State {
    AwaitingConference,
    InConference(Conference),
    InPaper(Conference, Paper),
}

/// Parser for award listings
pub struct Parser<'src> {
    tokens: Vec<(Token<'src>, Span)>,
    state: State,
    conferences: Vec<Conference>,
    year_counts: YearCounts,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            tokens: tokenize(source),
            state: State::AwaitingConference,
            conferences: Vec::new(),
            year_counts: YearCounts::new(),
        }
    }

    /// Parse a complete document
    #[instrument(skip_all)]
    pub fn parse_document(mut self) -> ParseResult<Document> {
        let tokens = std::mem::take(&mut self.tokens);
        debug!(lines = tokens.len(), "classified lines");

        for (token, span) in tokens {
            match token {
                Token::Conference(_) => {
                    let conference = parse_conference(token.content(), span)?;
                    self.begin_conference(conference);
                }
                Token::Paper(_) => {
                    let paper = parse_paper(token.content(), span)?;
                    self.begin_paper(paper)?;
                }
                Token::Author(_) => {
                    let author = parse_author(token.content(), span)?;
                    self.add_author(author)?;
                }
            }
        }

        self.finish_conference();

        let mut conferences = self.conferences;
        conferences.sort_by(|a, b| a.key.cmp(&b.key));
        for conference in &mut conferences {
            // Stable: papers sharing a year keep their listing order
            conference.papers.sort_by(|a, b| b.year.cmp(&a.year));
        }

        debug!(conferences = conferences.len(), "parsed award listing");

        Ok(Document {
            conferences,
            year_counts: self.year_counts,
        })
    }

    fn begin_conference(&mut self, conference: Conference) {
        self.finish_conference();
        self.year_counts.reset(&conference.key);
        self.state = State::InConference(conference);
    }

    fn begin_paper(&mut self, paper: Paper) -> ParseResult<()> {
        let conference = match std::mem::replace(&mut self.state, State::AwaitingConference) {
            State::AwaitingConference => {
                return Err(ParseError::PaperOutsideConference { span: paper.span })
            }
            State::InConference(conference) => conference,
            State::InPaper(mut conference, pending) => {
                conference.papers.push(pending);
                conference
            }
        };

        self.year_counts.increment(&conference.key, &paper.year);
        self.state = State::InPaper(conference, paper);
        Ok(())
    }

    fn add_author(&mut self, author: Author) -> ParseResult<()> {
        match &mut self.state {
            State::InPaper(_, paper) => {
                paper.authors.push(author);
                Ok(())
            }
            State::AwaitingConference | State::InConference(_) => {
                Err(ParseError::AuthorOutsidePaper { span: author.span })
            }
        }
    }

    /// Flush the pending paper and conference, if any
    fn finish_conference(&mut self) {
        match std::mem::replace(&mut self.state, State::AwaitingConference) {
            State::AwaitingConference => {}
            State::InConference(conference) => self.conferences.push(conference),
            State::InPaper(mut conference, paper) => {
                conference.papers.push(paper);
                self.conferences.push(conference);
            }
        }
    }
}

/// `key, Name (Topic)`
fn parse_conference(content: &str, span: Span) -> ParseResult<Conference> {
    let (key, name) = content
        .split_once(SEPARATOR)
        .ok_or_else(|| ParseError::missing_separator(span, "`key, Name`"))?;

    Ok(Conference::new(key, name, span))
}

/// `year, url, title` where the title may itself contain `", "`
fn parse_paper(content: &str, span: Span) -> ParseResult<Paper> {
    let fields: Vec<&str> = content.split(SEPARATOR).collect();
    if fields.len() < 3 {
        return Err(ParseError::MissingPaperFields {
            span,
            found: fields.len(),
        });
    }

    let url = match fields[1] {
        "" => None,
        url => Some(url.to_string()),
    };

    Ok(Paper {
        year: fields[0].to_string(),
        url,
        title: truncate_title(&fields[2..].join(",")),
        authors: Vec::new(),
        span,
    })
}

/// `name, institution`
fn parse_author(content: &str, span: Span) -> ParseResult<Author> {
    let (name, institution) = content
        .split_once(SEPARATOR)
        .ok_or_else(|| ParseError::missing_separator(span, "`name, institution`"))?;

    Ok(Author {
        name: name.to_string(),
        institution: institution.to_string(),
        span,
    })
}

/// Cut titles longer than [`MAX_TITLE_CHARS`] and mark them with [`ELLIPSIS`]
pub fn truncate_title(title: &str) -> String {
    match title.char_indices().nth(MAX_TITLE_CHARS) {
        Some((cut, _)) => format!("{}{}", &title[..cut], ELLIPSIS),
        None => title.to_string(),
    }
}

/// Parse an award listing
pub fn parse(source: &str) -> ParseResult<Document> {
    Parser::new(source).parse_document()
}
