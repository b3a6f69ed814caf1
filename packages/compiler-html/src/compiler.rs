use crate::links::paper_link;
use bestpaper_parser::ast::*;
use bestpaper_ranking::Ranking;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, instrument};

/// Replaced with the comma-joined conference short names
pub const CONFERENCE_LIST_PLACEHOLDER: &str = "{conference_list}";

const STYLESHEET: &str = "body{font-family:sans-serif;font-size:13px}li{margin:5px 0 8px 0}a{text-decoration:none}h1{font-size:1.6em}\
table{font-size:13px;border-width:1px;border-spacing:0;border-style:none;border-color:grey;border-collapse:collapse}\
table td{border-width:1px;padding:2px 4px;border-style:solid;border-color:grey}thead td{text-align:center;font-weight:700;font-size:1.7em;background-color:#eee}\
div{display:none}";

const METHODOLOGY: &str = "Credit is given in decreasing author order as customary in many fields. \
First authors are given 1 point, second authors are given 0.5 points, third authors are given 0.33 points, etc. \
These points are then divided by the sum of points for that paper, i.e. normalizing it. \
This ranking may be inaccurate or incomplete, may not reflect the current state of best paper awards, \
and is not an official list. If you are not satisfied with the ranking listed here, please disregard it.";

const REVEAL_SCRIPT: &str =
    "this.nextSibling.style.display = 'block'; this.style.display = 'none'; return false;";

/// Errors that can occur during HTML compilation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Paper \"{title}\" ({conference}, line {line}) has no authors")]
    MissingAuthors {
        conference: String,
        title: String,
        line: usize,
    },
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Page `<title>`; may contain [`CONFERENCE_LIST_PLACEHOLDER`]
    pub title: String,
    /// Meta description; may contain [`CONFERENCE_LIST_PLACEHOLDER`]
    pub description: String,
    pub heading: String,
    /// Paragraphs shown above the awards table (escaped)
    pub intro: Vec<String>,
    /// Lines appended after the ranking (raw HTML)
    pub footer: Vec<String>,
    pub last_updated: Option<String>,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            title: "Best paper awards at {conference_list}".to_string(),
            description: "Best paper awards (since 1996) for top-tier computer science conferences: {conference_list}.".to_string(),
            heading: "Best Paper Awards in Computer Science (since 1996)".to_string(),
            intro: vec![
                "Best paper awards from the top-tier conference in each area of computer science. \
\"Distinguished paper award\" and \"outstanding paper award\" are included but not \"best student paper\" \
or \"best 10-year old paper\"."
                    .to_string(),
            ],
            footer: Vec::new(),
            last_updated: None,
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn open(&mut self, tag: &str) {
        self.add_line(tag);
        self.indent();
    }

    fn close(&mut self, tag: &str) {
        self.dedent();
        self.add_line(tag);
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile an award listing and its institution ranking to a single HTML page
#[instrument(skip_all, fields(conferences = document.conferences.len(), institutions = ranking.len()))]
pub fn compile_to_html(
    document: &Document,
    ranking: &Ranking,
    options: CompileOptions,
) -> Result<String, CompileError> {
    let conference_list = document.conference_list();
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.open("<html lang=\"en\">");

    compile_head(&conference_list, &mut ctx);

    ctx.open("<body>");
    compile_preamble(document, &conference_list, &mut ctx);
    compile_awards(document, &mut ctx)?;
    ctx.add_line("<br /><br />");
    compile_ranking(ranking, &mut ctx);
    compile_footer(&mut ctx);
    ctx.close("</body>");

    ctx.close("</html>");

    let html = ctx.get_output();
    debug!(bytes = html.len(), "compiled page");
    Ok(html)
}

fn compile_head(conference_list: &str, ctx: &mut Context) {
    let title = ctx.options.title.replace(CONFERENCE_LIST_PLACEHOLDER, conference_list);
    let description = ctx
        .options
        .description
        .replace(CONFERENCE_LIST_PLACEHOLDER, conference_list);

    ctx.open("<head>");
    ctx.add_line(&format!(
        "<meta name=\"description\" content=\"{}\" />",
        escape_html(&description)
    ));
    ctx.add_line("<meta http-equiv=\"Content-Type\" content=\"text/html;charset=utf-8\" />");
    ctx.add_line(&format!("<title>{}</title>", escape_html(&title)));
    ctx.add_line(&format!("<style type=\"text/css\">{}</style>", STYLESHEET));
    ctx.close("</head>");
}

fn compile_preamble(document: &Document, conference_list: &str, ctx: &mut Context) {
    let heading = ctx.options.heading.replace(CONFERENCE_LIST_PLACEHOLDER, conference_list);
    ctx.add_line(&format!("<h1>{}</h1>", escape_html(&heading)));

    let mut index = String::from("<p>By Conference:<b> &nbsp; ");
    for conference in &document.conferences {
        index.push_str(&format!(
            "<a href=\"#{}\">{}</a> &nbsp; ",
            escape_html(&conference.key),
            escape_html(&conference.short_name)
        ));
    }
    index.push_str("</b></p>");
    ctx.add_line(&index);

    ctx.add_line("<p><b><a href=\"#institutions\">Institutions with the most Best Papers</a></b></p>");

    let intro = ctx.options.intro.clone();
    for paragraph in &intro {
        let paragraph = paragraph.replace(CONFERENCE_LIST_PLACEHOLDER, conference_list);
        ctx.add_line(&format!("<p>{}</p>", escape_html(&paragraph)));
    }
}

fn compile_awards(document: &Document, ctx: &mut Context) -> Result<(), CompileError> {
    ctx.open("<table>");

    for conference in &document.conferences {
        ctx.add_line(&format!(
            "<thead><tr><td colspan=\"3\"><a name=\"{}\">{}</a></td></tr></thead>",
            escape_html(&conference.key),
            escape_html(&conference.name)
        ));

        ctx.open("<tbody>");
        let mut labelled_years = HashSet::new();
        for (position, paper) in conference.papers.iter().enumerate() {
            ctx.open("<tr>");

            if labelled_years.insert(paper.year.as_str()) {
                let rowspan = year_rowspan(document, conference, position);
                ctx.add_line(&format!(
                    "<td rowspan=\"{}\"><b>{}</b></td>",
                    rowspan,
                    escape_html(&paper.year)
                ));
            }

            ctx.add_line(&format!(
                "<td><a href=\"{}\">{}</a></td>",
                escape_html(&paper_link(paper)),
                escape_html(&paper.title)
            ));
            ctx.add_line(&format!("<td>{}</td>", compile_authors(conference, paper)?));

            ctx.close("</tr>");
        }
        ctx.close("</tbody>");
    }

    ctx.close("</table>");
    Ok(())
}

/// Rows sharing the year cell of the paper at `position`.
///
/// Falls back to the run of same-year papers when the counts have no entry.
fn year_rowspan(document: &Document, conference: &Conference, position: usize) -> usize {
    let year = &conference.papers[position].year;
    match document.year_counts.get(&conference.key, year) {
        0 => conference.papers[position..]
            .iter()
            .take_while(|paper| &paper.year == year)
            .count(),
        count => count,
    }
}

fn compile_authors(conference: &Conference, paper: &Paper) -> Result<String, CompileError> {
    let cell = match paper.authors.as_slice() {
        [] => {
            return Err(CompileError::MissingAuthors {
                conference: conference.key.clone(),
                title: paper.title.clone(),
                line: paper.span.line,
            })
        }
        [only] => author_entry(only),
        [a, b] if a.institution == b.institution => format!(
            "{} &amp; {}, {}",
            escape_html(&a.name),
            escape_html(&b.name),
            escape_html(&a.institution)
        ),
        [a, b] => format!("{}<br />{}", author_entry(a), author_entry(b)),
        [first, rest @ ..] => {
            // The hidden list must directly follow the link for `nextSibling`
            let mut cell = author_entry(first);
            cell.push_str(&format!(
                "<a href=\"#\" onclick=\"{}\">; et al.</a><div>",
                REVEAL_SCRIPT
            ));
            for author in rest {
                cell.push_str(&author_entry(author));
                cell.push_str("<br />");
            }
            cell.push_str("</div>");
            cell
        }
    };

    Ok(cell)
}

fn author_entry(author: &Author) -> String {
    format!(
        "{}, {}",
        escape_html(&author.name),
        escape_html(&author.institution)
    )
}

fn compile_ranking(ranking: &Ranking, ctx: &mut Context) {
    ctx.open("<table>");
    ctx.add_line(
        "<thead><tr><td colspan=\"2\"><a name=\"institutions\">Institutions with Best Papers</a></td></tr></thead>",
    );

    ctx.open("<tbody>");
    for entry in ranking.iter() {
        ctx.add_line(&format!(
            "<tr><td>{}</td><td>{:.1}</td></tr>",
            escape_html(&entry.institution),
            entry.score
        ));
    }
    ctx.close("</tbody>");

    ctx.close("</table>");
}

fn compile_footer(ctx: &mut Context) {
    ctx.add_line(&format!("<p>{}</p>", METHODOLOGY));

    let footer = ctx.options.footer.clone();
    for line in &footer {
        ctx.add_line(line);
    }

    if let Some(date) = ctx.options.last_updated.clone() {
        ctx.add_line(&format!(
            "<p><span style=\"color:gray\">Page last updated: {}</span></p>",
            escape_html(&date)
        ));
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
