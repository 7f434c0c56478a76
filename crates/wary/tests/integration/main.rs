mod helpers;

mod exclude;
mod fixes;
mod output_format;
mod rules;
mod statistics;
mod toml;
mod wary;
