pub mod dynamic_require;
pub mod missing_csrf;
pub mod no_document_cookie;
pub mod no_eval;
pub mod object_injection;
pub mod redos_regex;
pub mod unsafe_regex;
