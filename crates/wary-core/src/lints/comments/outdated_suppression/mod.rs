pub(crate) mod outdated_suppression;
