pub(crate) mod ancestry;
pub(crate) mod term;
