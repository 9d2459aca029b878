use std::collections::{HashMap, HashSet};

use crate::{
    foundation::error::{MarqueeError, MarqueeResult},
    taxonomy::term::{TaxonomyTerm, TermId, TermRef},
};

/// Upper bound on parent hops before a walk is treated as runaway.
pub const MAX_ANCESTOR_DEPTH: usize = 32;

/// Read access to a term hierarchy.
///
/// Absence is first-class: an unknown id is `Ok(None)`, not an error, so
/// consumers can fail closed on missing data while store-level failures
/// (a backing service going away) still surface as errors.
pub trait TaxonomyStore {
    /// Look up a term by id.
    fn term(&self, id: TermId) -> MarqueeResult<Option<TaxonomyTerm>>;
}

#[derive(Clone, Debug, Default)]
/// Map-backed [`TaxonomyStore`] for tests and statically known hierarchies.
pub struct InMemoryTaxonomy {
    terms: HashMap<TermId, TaxonomyTerm>,
}

impl InMemoryTaxonomy {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a term, keyed by its id.
    pub fn insert(&mut self, term: TaxonomyTerm) {
        self.terms.insert(term.id, term);
    }
}

impl TaxonomyStore for InMemoryTaxonomy {
    fn term(&self, id: TermId) -> MarqueeResult<Option<TaxonomyTerm>> {
        Ok(self.terms.get(&id).cloned())
    }
}

#[tracing::instrument(skip(store, start))]
/// Walk parent links from `start` to the top-level ancestor.
///
/// A term that is already top-level resolves to itself. An unknown starting
/// id and a parent link pointing at a term the store does not know both
/// resolve to `Ok(None)`. A parent cycle or a chain longer than
/// [`MAX_ANCESTOR_DEPTH`] is a [`MarqueeError::Taxonomy`]: corrupt graphs are
/// reported, never looped over.
pub fn highest_ancestor(
    store: &impl TaxonomyStore,
    start: impl Into<TermRef>,
) -> MarqueeResult<Option<TaxonomyTerm>> {
    let mut current = match start.into() {
        TermRef::Term(term) => term,
        TermRef::Id(id) => match store.term(id)? {
            Some(term) => term,
            None => return Ok(None),
        },
    };

    let mut seen = HashSet::new();
    seen.insert(current.id);
    let mut hops = 0usize;

    loop {
        let Some(parent_id) = current.parent else {
            return Ok(Some(current));
        };
        hops += 1;
        if hops > MAX_ANCESTOR_DEPTH {
            return Err(MarqueeError::taxonomy(format!(
                "ancestor chain from term {} exceeds {MAX_ANCESTOR_DEPTH} levels",
                current.id.0
            )));
        }
        if !seen.insert(parent_id) {
            return Err(MarqueeError::taxonomy(format!(
                "parent cycle through term {}",
                parent_id.0
            )));
        }
        current = match store.term(parent_id)? {
            Some(parent) => parent,
            None => return Ok(None),
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/taxonomy/ancestry.rs"]
mod tests;
