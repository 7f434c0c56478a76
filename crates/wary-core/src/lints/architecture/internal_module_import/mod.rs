pub(crate) mod internal_module_import;
