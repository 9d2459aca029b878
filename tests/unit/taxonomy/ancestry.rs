use super::*;

use crate::taxonomy::term::slugify;

fn term(id: u64, parent: Option<u64>, name: &str) -> TaxonomyTerm {
    TaxonomyTerm {
        id: TermId(id),
        parent: parent.map(TermId),
        name: name.to_string(),
        slug: slugify(name, "-"),
    }
}

fn store(terms: impl IntoIterator<Item = TaxonomyTerm>) -> InMemoryTaxonomy {
    let mut out = InMemoryTaxonomy::new();
    for t in terms {
        out.insert(t);
    }
    out
}

#[test]
fn resolves_a_chain_to_the_top_level_term() {
    let store = store([
        term(1, None, "Topics"),
        term(2, Some(1), "Guides"),
        term(3, Some(2), "Setup Guides"),
    ]);

    let top = highest_ancestor(&store, TermId(3)).unwrap().unwrap();
    assert_eq!(top.id, TermId(1));
    assert_eq!(top.slug, "topics");
}

#[test]
fn a_top_level_term_resolves_to_itself() {
    let store = store([term(1, None, "Topics")]);

    let top = highest_ancestor(&store, TermId(1)).unwrap().unwrap();
    assert_eq!(top.id, TermId(1));
}

#[test]
fn preresolved_terms_skip_the_initial_lookup() {
    // The starting term is not in the store at all; only its ancestors are.
    let store = store([term(1, None, "Topics")]);
    let detached = term(42, Some(1), "Floating");

    let top = highest_ancestor(&store, detached).unwrap().unwrap();
    assert_eq!(top.id, TermId(1));

    let empty = InMemoryTaxonomy::new();
    let root = term(7, None, "Lone Root");
    let top = highest_ancestor(&empty, root.clone()).unwrap().unwrap();
    assert_eq!(top, root);
}

#[test]
fn unknown_start_ids_resolve_to_nothing() {
    let store = store([term(1, None, "Topics")]);
    assert!(highest_ancestor(&store, TermId(99)).unwrap().is_none());
}

#[test]
fn dangling_parent_links_resolve_to_nothing() {
    let store = store([term(2, Some(1), "Orphaned")]);
    assert!(highest_ancestor(&store, TermId(2)).unwrap().is_none());
}

#[test]
fn self_parenting_terms_are_reported_as_cycles() {
    let store = store([term(1, Some(1), "Ouroboros")]);

    let err = highest_ancestor(&store, TermId(1)).unwrap_err();
    assert!(matches!(err, MarqueeError::Taxonomy(_)), "{err}");
}

#[test]
fn two_term_cycles_are_reported() {
    let store = store([term(1, Some(2), "A"), term(2, Some(1), "B")]);

    let err = highest_ancestor(&store, TermId(1)).unwrap_err();
    assert!(err.to_string().contains("cycle"));
}

#[test]
fn chains_at_the_depth_cap_resolve_and_longer_ones_fail() {
    // Root at id 0, then a strand of MAX_ANCESTOR_DEPTH children below it.
    let mut terms = vec![term(0, None, "Root")];
    for id in 1..=MAX_ANCESTOR_DEPTH as u64 {
        terms.push(term(id, Some(id - 1), "Link"));
    }
    let deep = store(terms.clone());
    let top = highest_ancestor(&deep, TermId(MAX_ANCESTOR_DEPTH as u64))
        .unwrap()
        .unwrap();
    assert_eq!(top.id, TermId(0));

    // One more level pushes the walk past the cap.
    let extra = MAX_ANCESTOR_DEPTH as u64 + 1;
    terms.push(term(extra, Some(extra - 1), "Too Deep"));
    let deeper = store(terms);
    let err = highest_ancestor(&deeper, TermId(extra)).unwrap_err();
    assert!(matches!(err, MarqueeError::Taxonomy(_)), "{err}");
}

#[test]
fn store_failures_propagate() {
    struct DownStore;

    impl TaxonomyStore for DownStore {
        fn term(&self, _id: TermId) -> MarqueeResult<Option<TaxonomyTerm>> {
            Err(MarqueeError::validation("term backend unavailable"))
        }
    }

    assert!(highest_ancestor(&DownStore, TermId(1)).is_err());
}
