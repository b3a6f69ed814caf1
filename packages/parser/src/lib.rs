pub mod tokenizer;
pub mod parser;
pub mod ast;
pub mod error;
pub mod serializer;

#[cfg(test)]
mod tests_serializer;

pub use tokenizer::{Token, tokenize, classify};
pub use parser::{Parser, parse, truncate_title, MAX_TITLE_CHARS};
pub use serializer::{Serializer, serialize};
pub use error::{ParseError, ParseResult};
