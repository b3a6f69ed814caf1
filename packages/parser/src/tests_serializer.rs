use crate::*;

#[test]
fn test_serialize_normalizes_order() {
    let source = "\
zeta, ZETA (Last)
 2001, , Older
  Ada Lovelace, MIT
 2003, http://example.org/p, Newer
  Bob, CMU
  Carol, MIT
alpha, ALPHA (First)
 1999, , Alpha
  Dan, ETH Zurich
";
    let doc = parse(source).unwrap();
    let serialized = serialize(&doc);

    assert_eq!(
        serialized,
        "\
alpha, ALPHA (First)
 1999, , Alpha
  Dan, ETH Zurich
zeta, ZETA (Last)
 2003, http://example.org/p, Newer
  Bob, CMU
  Carol, MIT
 2001, , Older
  Ada Lovelace, MIT
"
    );
}

#[test]
fn test_serialized_output_reparses_to_same_content() {
    let source = "\
chi, CHI (Human-Computer Interaction)
 2017, , Sketching, Prototyping, and Beyond
  Ada Lovelace, MIT
  Bob, Stanford University
";
    let doc = parse(source).unwrap();
    let reparsed = parse(&serialize(&doc)).unwrap();

    assert_eq!(doc.conferences.len(), reparsed.conferences.len());
    let (before, after) = (&doc.conferences[0].papers[0], &reparsed.conferences[0].papers[0]);
    assert_eq!(before.title, after.title);
    assert_eq!(before.authors.len(), after.authors.len());
    assert_eq!(doc.year_counts, reparsed.year_counts);
}
