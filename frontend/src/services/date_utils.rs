use chrono::{Local, NaiveDate};

/// Format a date as YYYY-MM-DD, the value format of `<input type="date">`
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's date, used as the `min` hint on the booking date input
pub fn today_iso() -> String {
    format_iso_date(Local::now().date_naive())
}
