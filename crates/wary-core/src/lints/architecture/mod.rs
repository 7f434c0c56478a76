pub mod deep_relative_import;
pub mod internal_module_import;
