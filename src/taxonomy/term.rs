#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Identifier of a taxonomy term as assigned by the backing CMS.
pub struct TermId(pub u64);

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A single term in a hierarchical taxonomy.
pub struct TaxonomyTerm {
    /// Term identifier.
    pub id: TermId,
    /// Parent term, or `None` for a top-level term.
    ///
    /// Stores backed by a CMS that encodes "no parent" as id `0` map that
    /// sentinel to `None` at the boundary.
    pub parent: Option<TermId>,
    /// Human-readable term name.
    pub name: String,
    /// URL-safe term slug.
    pub slug: String,
}

impl TaxonomyTerm {
    /// Whether this term sits at the top of its hierarchy.
    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }
}

#[derive(Clone, Debug)]
/// A term input: either an identifier to resolve or an already-loaded term.
pub enum TermRef {
    /// Resolve the term through the store before walking.
    Id(TermId),
    /// Use the given term directly without an initial lookup.
    Term(TaxonomyTerm),
}

impl From<TermId> for TermRef {
    fn from(id: TermId) -> Self {
        Self::Id(id)
    }
}

impl From<TaxonomyTerm> for TermRef {
    fn from(term: TaxonomyTerm) -> Self {
        Self::Term(term)
    }
}

/// Reduce free-form text to a URL-safe slug.
///
/// Lowercases, maps every non-alphanumeric run to a single `separator`, and
/// trims separators from both ends.
pub fn slugify(text: &str, separator: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut gap = false;
    for ch in text.chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_alphanumeric() {
            if gap && !out.is_empty() {
                out.push_str(separator);
            }
            gap = false;
            out.push(ch);
        } else {
            gap = true;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/taxonomy/term.rs"]
mod tests;
