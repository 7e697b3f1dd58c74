pub mod check_field_names;
pub mod convert;
pub mod parse_field;
pub mod parse_headers;
pub mod selector;
pub mod show_result_with_table;
pub mod to_float;
