use anyhow::{anyhow, Context, Result};
use bestpaper_parser::ParseError;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

const STDIN_NAME: &str = "<stdin>";

/// One input file's place inside the combined source
#[derive(Debug, Clone, PartialEq)]
struct Segment {
    name: String,
    start: usize,
    /// Lines of the combined source before this segment
    line_offset: usize,
}

/// Listing inputs concatenated in order, as if they were one file
#[derive(Debug, Default)]
pub struct Sources {
    text: String,
    segments: Vec<Segment>,
    lines: usize,
}

impl Sources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, content: &str) {
        self.segments.push(Segment {
            name: name.into(),
            start: self.text.len(),
            line_offset: self.lines,
        });

        self.text.push_str(content);
        if !content.is_empty() && !content.ends_with('\n') {
            self.text.push('\n');
        }
        self.lines += content.lines().count();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|segment| segment.name.as_str())
    }

    /// Input name, that input's text and the error relative to it
    pub fn locate(&self, error: &ParseError) -> (&str, &str, ParseError) {
        let offset = error.span().start;
        let index = self
            .segments
            .iter()
            .rposition(|segment| segment.start <= offset)
            .unwrap_or(0);

        match self.segments.get(index) {
            Some(segment) => {
                let end = self
                    .segments
                    .get(index + 1)
                    .map(|next| next.start)
                    .unwrap_or(self.text.len());
                (
                    segment.name.as_str(),
                    &self.text[segment.start..end],
                    error.clone().rebased(segment.start, segment.line_offset),
                )
            }
            None => (STDIN_NAME, self.text.as_str(), error.clone()),
        }
    }
}

/// Read every input; no inputs (or `-`) means standard input.
///
/// Directories are walked for files ending in `.{extension}`, in path order.
pub fn read_inputs(inputs: &[PathBuf], extension: &str) -> Result<Sources> {
    let mut sources = Sources::new();

    if inputs.is_empty() {
        sources.push(STDIN_NAME, &read_stdin()?);
        return Ok(sources);
    }

    for input in inputs {
        if input.as_os_str() == "-" {
            sources.push(STDIN_NAME, &read_stdin()?);
        } else if input.is_dir() {
            let files = find_listing_files(input, extension);
            if files.is_empty() {
                return Err(anyhow!(
                    "No .{} files found in {}",
                    extension,
                    input.display()
                ));
            }
            for file in files {
                sources.push(file.display().to_string(), &read_file(&file)?);
            }
        } else if input.is_file() {
            sources.push(input.display().to_string(), &read_file(input)?);
        } else {
            return Err(anyhow!("Input path does not exist: {}", input.display()));
        }
    }

    debug!(inputs = sources.segments.len(), bytes = sources.text.len(), "read inputs");
    Ok(sources)
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Cannot read standard input")?;
    Ok(buffer)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))
}

fn find_listing_files(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && path.extension().map(|e| e == extension).unwrap_or(false))
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestpaper_parser::parse;
    use std::fs;

    #[test]
    fn test_concatenated_inputs_share_parser_state() {
        let mut sources = Sources::new();
        sources.push("a.txt", "acl, ACL (NLP)\n 2020, , T\n");
        sources.push("b.txt", "  Ada, MIT");

        assert_eq!(sources.text(), "acl, ACL (NLP)\n 2020, , T\n  Ada, MIT\n");
        let doc = parse(sources.text()).unwrap();
        assert_eq!(doc.conferences[0].papers[0].authors.len(), 1);
    }

    #[test]
    fn test_locate_error_in_second_input() {
        let mut sources = Sources::new();
        sources.push("a.txt", "acl, ACL (NLP)\n 2020, , T\n  Ada, MIT\n");
        sources.push("b.txt", "kdd, KDD (Data Mining)\n  Stray, Author\n");

        let err = parse(sources.text()).unwrap_err();
        assert_eq!(err.span().line, 5);

        let (name, text, local) = sources.locate(&err);
        assert_eq!(name, "b.txt");
        assert_eq!(text, "kdd, KDD (Data Mining)\n  Stray, Author\n");
        assert_eq!(local.span().line, 2);
        assert_eq!(&text[local.span().start..local.span().end], "  Stray, Author");
    }

    #[test]
    fn test_read_directory_in_path_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "kdd, KDD (Data Mining)\n").unwrap();
        fs::write(dir.path().join("a.txt"), "acl, ACL (NLP)\n").unwrap();
        fs::write(dir.path().join("notes.md"), "# ignored\n").unwrap();

        let sources = read_inputs(&[dir.path().to_path_buf()], "txt").unwrap();
        let names: Vec<_> = sources.names().collect();

        assert_eq!(names.len(), 2);
        assert!(names[0].ends_with("a.txt"));
        assert!(names[1].ends_with("b.txt"));
        assert_eq!(sources.text(), "acl, ACL (NLP)\nkdd, KDD (Data Mining)\n");
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        assert!(read_inputs(&[missing], "txt").is_err());

        let empty = tempfile::tempdir().unwrap();
        assert!(read_inputs(&[empty.path().to_path_buf()], "txt").is_err());
    }
}
