use chrono::NaiveDate;

/// Today's date in the browser's local time zone
pub fn today() -> Option<NaiveDate> {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Check if a date is today in the browser's local time zone
pub fn is_today(date: NaiveDate) -> bool {
    today() == Some(date)
}
