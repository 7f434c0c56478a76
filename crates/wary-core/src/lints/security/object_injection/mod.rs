pub(crate) mod object_injection;
