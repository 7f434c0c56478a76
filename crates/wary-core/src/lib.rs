pub mod analyze;
pub mod check;
pub mod checker;
pub mod config;
pub mod context;
pub mod diagnostic;
pub mod directive;
pub mod error;
pub mod fix;
pub mod fs;
pub mod lints;
pub mod location;
pub mod parser;
pub mod rule_options;
pub mod rule_set;
pub mod scope;
pub mod suppression;
pub mod syntax;
pub mod toml;
pub mod utils;

#[cfg(test)]
pub mod utils_test;
