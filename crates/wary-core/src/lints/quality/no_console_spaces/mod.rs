pub(crate) mod no_console_spaces;
