pub(crate) mod inline;
