pub mod max_complexity;
pub mod no_console_spaces;
