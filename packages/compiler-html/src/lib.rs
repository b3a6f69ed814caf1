mod compiler;
mod links;

#[cfg(test)]
mod tests;

pub use compiler::{
    compile_to_html, escape_html, CompileError, CompileOptions, CONFERENCE_LIST_PLACEHOLDER,
};
pub use links::{paper_link, scholar_search_url};
