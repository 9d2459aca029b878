use super::*;

#[test]
fn slugify_lowercases_and_joins_runs() {
    assert_eq!(slugify("Hello, World!", "-"), "hello-world");
    assert_eq!(slugify("  Multiple   Spaces  ", "-"), "multiple-spaces");
    assert_eq!(slugify("Already-Slugged", "-"), "already-slugged");
    assert_eq!(slugify("Posts & Pages", "_"), "posts_pages");
}

#[test]
fn slugify_trims_separators_at_both_ends() {
    assert_eq!(slugify("--trim me--", "-"), "trim-me");
    assert_eq!(slugify("...", "-"), "");
    assert_eq!(slugify("", "-"), "");
}

#[test]
fn slugify_drops_non_ascii_letters() {
    assert_eq!(slugify("Caffè Crema", "-"), "caff-crema");
}

#[test]
fn term_ref_converts_from_ids_and_terms() {
    assert!(matches!(TermRef::from(TermId(3)), TermRef::Id(TermId(3))));

    let term = TaxonomyTerm {
        id: TermId(9),
        parent: None,
        name: "News".to_string(),
        slug: "news".to_string(),
    };
    assert!(matches!(
        TermRef::from(term),
        TermRef::Term(TaxonomyTerm { id: TermId(9), .. })
    ));
}

#[test]
fn top_level_means_no_parent() {
    let mut term = TaxonomyTerm {
        id: TermId(1),
        parent: None,
        name: "Topics".to_string(),
        slug: "topics".to_string(),
    };
    assert!(term.is_top_level());

    term.parent = Some(TermId(2));
    assert!(!term.is_top_level());
}

#[test]
fn terms_serialize_with_bare_numeric_ids() {
    let term = TaxonomyTerm {
        id: TermId(5),
        parent: Some(TermId(2)),
        name: "Guides".to_string(),
        slug: "guides".to_string(),
    };
    let json = serde_json::to_string(&term).unwrap();
    assert_eq!(
        json,
        r#"{"id":5,"parent":2,"name":"Guides","slug":"guides"}"#
    );

    let root: TaxonomyTerm =
        serde_json::from_str(r#"{"id":1,"parent":null,"name":"Topics","slug":"topics"}"#).unwrap();
    assert!(root.is_top_level());
}
