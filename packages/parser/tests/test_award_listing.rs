use bestpaper_parser::{parse, serialize, ParseError};

const LISTING: &str = "\
sigir, SIGIR (Information Retrieval)
 2016, , Fast and Compact Hamming Distance Index
  Simon Gog, Karlsruhe Institute of Technology
  Rossano Venturini, University of Pisa
 2018, , Should I Follow the Crowd? A Probabilistic Analysis of the Effectiveness of Popularity in Recommender Systems
  Rocío Cañamares, Universidad Autónoma de Madrid
  Pablo Castells, Universidad Autónoma de Madrid
aaai, AAAI (Artificial Intelligence)
 2019, , How to Combine Tree-Search Methods in Reinforcement Learning
  Yonathan Efroni, Technion
  Gal Dalal, Technion
  Bruno Scherrer, INRIA
  Shie Mannor, Technion

 2018, http://example.org/memory, Memory-Efficient Differentiable Programming
  Jane Doe, Stanford University
";

#[test]
fn test_parses_multi_conference_listing() {
    let doc = parse(LISTING).expect("Failed to parse");

    assert_eq!(doc.conferences.len(), 2);
    assert_eq!(doc.conferences[0].key, "aaai");
    assert_eq!(doc.conferences[1].key, "sigir");
    assert_eq!(doc.paper_count(), 4);
    assert_eq!(doc.author_count(), 9);
    assert_eq!(doc.conference_list(), "AAAI, SIGIR");
}

#[test]
fn test_blank_lines_do_not_split_conferences() {
    let doc = parse(LISTING).unwrap();
    let aaai = &doc.conferences[0];

    assert_eq!(aaai.papers.len(), 2);
    assert_eq!(aaai.papers[0].authors.len(), 4);
    assert_eq!(aaai.papers[1].first_author_surname(), Some("Doe"));
}

#[test]
fn test_non_ascii_titles_are_truncated_on_characters() {
    let doc = parse(LISTING).unwrap();
    let sigir = &doc.conferences[1];
    let title = &sigir.papers[0].title;

    assert_eq!(sigir.papers[0].year, "2018");
    assert_eq!(title.chars().count(), 102);
    assert!(title.starts_with("Should I Follow the Crowd?"));
    assert_eq!(sigir.papers[0].authors[0].institution, "Universidad Autónoma de Madrid");
}

#[test]
fn test_windows_line_endings() {
    let crlf = LISTING.replace('\n', "\r\n");
    let unix = parse(LISTING).unwrap();
    let windows = parse(&crlf).unwrap();

    // Spans differ by the carriage returns, content must not
    assert_eq!(serialize(&unix), serialize(&windows));
    assert_eq!(unix.year_counts, windows.year_counts);
}

#[test]
fn test_error_points_at_offending_line() {
    let source = format!("{}  Stray Author\n", LISTING);
    let err = parse(&source).unwrap_err();

    assert!(matches!(err, ParseError::MissingSeparator { .. }));
    assert_eq!(err.span().line, 17);
    assert_eq!(&source[err.span().start..err.span().end], "  Stray Author");
}
