pub mod use_booking_form;
