pub(crate) mod library;
pub(crate) mod model;
pub(crate) mod resolver;
pub(crate) mod responsive;
