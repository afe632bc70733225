pub(crate) mod discretize;
pub(crate) mod grid;
