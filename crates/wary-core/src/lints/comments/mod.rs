pub mod outdated_suppression;
