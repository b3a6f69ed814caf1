use crate::{compile_to_html, escape_html, paper_link, scholar_search_url, CompileError, CompileOptions};
use bestpaper_parser::parse;
use bestpaper_ranking::{rank_institutions, RankOptions};

const LISTING: &str = "\
uist, UIST (User Interface)
 2018, , Fast Shape Changing Displays
  Ada Lovelace, MIT
  Bob Smith, MIT
 2018, http://example.org/haptics, Haptic Retargeting <Revisited>
  Carol Jones, Stanford University
  Dan Brown, CMU
 2017, , Solo Work
  Eve Adams, ETH Zurich
chi, CHI (Human-Computer Interaction)
 2019, , Crowded Paper
  Fay Green, University of Washington
  Gus Hill, Microsoft Research
  Hal Ives, Google
  Ivy King, Microsoft Research
";

fn compile(source: &str, options: CompileOptions) -> String {
    let document = parse(source).expect("Failed to parse");
    let ranking = rank_institutions(&document.conferences, RankOptions { min_score: 0.5 });
    compile_to_html(&document, &ranking, options).expect("Failed to compile")
}

#[test]
fn test_compile_page_chrome() {
    let html = compile(LISTING, CompileOptions::default());

    println!("Generated HTML:\n{}", html);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Best paper awards at CHI, UIST</title>"));
    assert!(html.contains("conferences: CHI, UIST.\""));
    assert!(html.contains("<a href=\"#chi\">CHI</a> &nbsp; <a href=\"#uist\">UIST</a>"));
    assert!(html.contains("<a href=\"#institutions\">"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_conference_headers_in_key_order() {
    let html = compile(LISTING, CompileOptions::default());

    let chi = html.find("<a name=\"chi\">CHI (Human-Computer Interaction)</a>").unwrap();
    let uist = html.find("<a name=\"uist\">UIST (User Interface)</a>").unwrap();
    assert!(chi < uist);
}

#[test]
fn test_year_cell_spans_same_year_papers() {
    let html = compile(LISTING, CompileOptions::default());

    assert_eq!(html.matches("<b>2018</b>").count(), 1);
    assert!(html.contains("<td rowspan=\"2\"><b>2018</b></td>"));
    assert!(html.contains("<td rowspan=\"1\"><b>2017</b></td>"));
}

#[test]
fn test_author_cell_variants() {
    let html = compile(LISTING, CompileOptions::default());

    // Two authors from one institution
    assert!(html.contains("<td>Ada Lovelace &amp; Bob Smith, MIT</td>"));
    // Two authors from different institutions
    assert!(html.contains("<td>Carol Jones, Stanford University<br />Dan Brown, CMU</td>"));
    // Single author
    assert!(html.contains("<td>Eve Adams, ETH Zurich</td>"));
    // Four authors: first shown, the rest hidden behind "et al."
    assert!(html.contains("<td>Fay Green, University of Washington<a href=\"#\""));
    assert!(html.contains(
        "; et al.</a><div>Gus Hill, Microsoft Research<br />Hal Ives, Google<br />Ivy King, Microsoft Research<br /></div></td>"
    ));
}

#[test]
fn test_paper_links() {
    let html = compile(LISTING, CompileOptions::default());

    assert!(html.contains("<a href=\"http://example.org/haptics\">Haptic Retargeting &lt;Revisited&gt;</a>"));
    assert!(html.contains("as_epq=Solo%20Work&amp;as_oq=&amp;as_eq=&amp;as_occt=any&amp;as_sauthors=Adams\">Solo Work</a>"));
}

#[test]
fn test_scholar_fallback_url() {
    let url = scholar_search_url("Deep Learning & You", "O'Neil");
    assert_eq!(
        url,
        "http://scholar.google.com/scholar?as_q=&num=10&btnG=Search+Scholar&as_epq=Deep%20Learning%20%26%20You&as_oq=&as_eq=&as_occt=any&as_sauthors=O%27Neil"
    );

    let document = parse("acl, ACL (NLP)\n 2020, , Title\n  Ada Byron Lovelace, MIT\n").unwrap();
    let link = paper_link(&document.conferences[0].papers[0]);
    assert!(link.ends_with("as_sauthors=Lovelace"));
}

#[test]
fn test_ranking_table() {
    let html = compile(LISTING, CompileOptions::default());

    assert!(html.contains("<a name=\"institutions\">Institutions with Best Papers</a>"));
    assert!(html.contains("<tr><td>MIT</td><td>1.0</td></tr>"));
    assert!(html.contains("<tr><td>ETH Zurich</td><td>1.0</td></tr>"));
    // Below the 0.5 threshold used here
    assert!(!html.contains("<tr><td>Google</td>"));
}

#[test]
fn test_custom_page_options() {
    let options = CompileOptions {
        title: "Awards ({conference_list})".to_string(),
        heading: "Our Awards".to_string(),
        intro: vec!["Covers {conference_list} & more".to_string()],
        footer: vec!["<p><a href=\"https://example.org\">Home</a></p>".to_string()],
        last_updated: Some("2019-02-21".to_string()),
        ..Default::default()
    };
    let html = compile(LISTING, options);

    assert!(html.contains("<title>Awards (CHI, UIST)</title>"));
    assert!(html.contains("<h1>Our Awards</h1>"));
    assert!(html.contains("<p>Covers CHI, UIST &amp; more</p>"));
    assert!(html.contains("<p><a href=\"https://example.org\">Home</a></p>"));
    assert!(html.contains("Page last updated: 2019-02-21"));
}

#[test]
fn test_compile_without_pretty_print() {
    let options = CompileOptions {
        pretty: false,
        ..Default::default()
    };
    let html = compile(LISTING, options);

    // Should be compact, no extra newlines
    assert!(!html.contains('\n'));
}

#[test]
fn test_paper_without_authors_fails() {
    let document = parse("acl, ACL (NLP)\n 2020, , Nobody Wrote This\n").unwrap();
    let ranking = rank_institutions(&document.conferences, RankOptions::default());
    let err = compile_to_html(&document, &ranking, CompileOptions::default()).unwrap_err();

    assert_eq!(
        err,
        CompileError::MissingAuthors {
            conference: "acl".to_string(),
            title: "Nobody Wrote This".to_string(),
            line: 2,
        }
    );
}

#[test]
fn test_escape_html_entities() {
    assert_eq!(escape_html("Hello <world> & \"friends\""), "Hello &lt;world&gt; &amp; &quot;friends&quot;");
}
