//! Booking domain logic.
//!
//! The UI only renders state and forwards events; every booking rule lives here.

pub mod booking_form;
pub mod deep_links;
pub mod map_selection;
