pub mod changed_fields;
pub mod form_state;
pub mod payload;
pub mod ports;
pub mod services;
pub mod use_cases;
