pub mod build;
pub mod check;
pub mod init;
pub mod rank;

pub use build::{build, BuildArgs};
pub use check::{check, CheckArgs};
pub use init::{init, InitArgs};
pub use rank::{rank, RankArgs};

use crate::input::Sources;
use anyhow::anyhow;
use bestpaper_parser::{ast::Document, error::pretty, parse};

/// Parse the combined inputs, pointing errors at the file they came from
pub(crate) fn parse_sources(sources: &Sources) -> anyhow::Result<Document> {
    parse(sources.text()).map_err(|e| {
        let (name, text, local) = sources.locate(&e);
        anyhow!("\n{}", pretty::format_error(&local, name, text))
    })
}
