pub mod booking_form;
pub mod contact_section;
pub mod form_field;
pub mod hero;
pub mod location_input;
pub mod rate_table;
