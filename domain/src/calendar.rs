//! Calendar domain logic for the attendance dialog.
//!
//! Lays out a month as a Sunday-first grid and attaches the attendance
//! records that fall on each day. The component only renders the result.

use chrono::{Datelike, NaiveDate};
use shared::{Attendance, AttendanceStatus, CalendarDay, CalendarDayType, CalendarFocusDate, CalendarMonth, Locale};

use crate::dates;
use crate::error::AttendanceError;

/// Calendar service that handles all calendar-related business logic
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarService {
    locale: Locale,
}

impl CalendarService {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Build a focus date from a 1-based month, rejecting months outside 1..=12
    pub fn focus_date(&self, month: u32, year: i32) -> Result<CalendarFocusDate, AttendanceError> {
        if !(1..=12).contains(&month) {
            return Err(AttendanceError::InvalidMonth { month });
        }
        Ok(CalendarFocusDate { year, month })
    }

    /// Generate the grid for one month with the records that fall on each day
    pub fn generate_calendar_month(
        &self,
        focus: CalendarFocusDate,
        attendance: &[Attendance],
    ) -> CalendarMonth {
        let CalendarFocusDate { year, month } = focus;
        let days_in_month = self.days_in_month(month, year);
        let first_day = self.first_day_of_month(month, year);

        log::debug!(
            "Generating calendar for {}/{}: {} days, first weekday {}",
            month,
            year,
            days_in_month,
            first_day
        );

        let mut calendar_days: Vec<CalendarDay> = (0..first_day).map(|_| CalendarDay::padding()).collect();

        for day in 1..=days_in_month {
            let records = match NaiveDate::from_ymd_opt(year, month, day) {
                Some(date) => self.records_for_date(date, attendance),
                None => Vec::new(),
            };

            calendar_days.push(CalendarDay {
                day,
                day_type: CalendarDayType::MonthDay,
                records,
            });
        }

        CalendarMonth {
            month,
            year,
            days: calendar_days,
            first_day_of_week: first_day,
        }
    }

    /// All records on the given date, in input order
    pub fn records_for_date(&self, date: NaiveDate, attendance: &[Attendance]) -> Vec<Attendance> {
        attendance
            .iter()
            .filter(|record| record.date == date)
            .cloned()
            .collect()
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: i32) -> u32 {
        match month {
            2 => if self.is_leap_year(year) { 29 } else { 28 },
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: i32) -> u32 {
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(date) => date.weekday().num_days_from_sunday(),
            None => 0,
        }
    }

    pub fn month_name(&self, month: u32) -> &'static str {
        dates::month_name(month, self.locale)
    }

    /// Title shown above the grid, e.g. "March 2025"
    pub fn title(&self, focus: CalendarFocusDate) -> String {
        format!("{} {}", self.month_name(focus.month), focus.year)
    }

    /// Statuses shown in the legend, in display order
    pub fn status_legend(&self) -> Vec<AttendanceStatus> {
        AttendanceStatus::KNOWN.to_vec()
    }

    /// Navigate to the previous month
    pub fn previous_month(&self, focus: CalendarFocusDate) -> CalendarFocusDate {
        if focus.month <= 1 {
            CalendarFocusDate { year: focus.year - 1, month: 12 }
        } else {
            CalendarFocusDate { year: focus.year, month: focus.month - 1 }
        }
    }

    /// Navigate to the next month
    pub fn next_month(&self, focus: CalendarFocusDate) -> CalendarFocusDate {
        if focus.month >= 12 {
            CalendarFocusDate { year: focus.year + 1, month: 1 }
        } else {
            CalendarFocusDate { year: focus.year, month: focus.month + 1 }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, status: AttendanceStatus) -> Attendance {
        Attendance {
            student_name: "Budi Santoso".to_string(),
            class_name: "XII IPA 1".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            status,
        }
    }

    fn focus(month: u32, year: i32) -> CalendarFocusDate {
        CalendarFocusDate { year, month }
    }

    #[test]
    fn test_days_in_month() {
        let service = CalendarService::default();

        assert_eq!(service.days_in_month(1, 2025), 31); // January
        assert_eq!(service.days_in_month(4, 2025), 30); // April
        assert_eq!(service.days_in_month(2, 2023), 28); // February (non-leap)
        assert_eq!(service.days_in_month(2, 2024), 29); // February (leap year)
        assert_eq!(service.days_in_month(2, 1900), 28);
        assert_eq!(service.days_in_month(2, 2000), 29);
    }

    #[test]
    fn test_is_leap_year() {
        let service = CalendarService::default();

        assert!(!service.is_leap_year(2025));
        assert!(service.is_leap_year(2024));
        assert!(!service.is_leap_year(1900));
        assert!(service.is_leap_year(2000));
    }

    #[test]
    fn test_first_day_of_month() {
        let service = CalendarService::default();

        assert_eq!(service.first_day_of_month(6, 2025), 0); // June 1, 2025 is a Sunday
        assert_eq!(service.first_day_of_month(1, 2025), 3); // Wednesday
        assert_eq!(service.first_day_of_month(2, 2024), 4); // Thursday
        assert_eq!(service.first_day_of_month(3, 2025), 6); // Saturday
    }

    #[test]
    fn test_grid_day_count_matches_calendar() {
        let service = CalendarService::default();

        let february_2024 = service.generate_calendar_month(focus(2, 2024), &[]);
        assert_eq!(february_2024.month_days().count(), 29);

        let february_2023 = service.generate_calendar_month(focus(2, 2023), &[]);
        assert_eq!(february_2023.month_days().count(), 28);

        let april = service.generate_calendar_month(focus(4, 2025), &[]);
        assert_eq!(april.month_days().count(), 30);
    }

    #[test]
    fn test_grid_padding_matches_first_weekday() {
        let service = CalendarService::default();

        for month in 1..=12 {
            let calendar = service.generate_calendar_month(focus(month, 2025), &[]);
            assert_eq!(calendar.padding_count() as u32, calendar.first_day_of_week);
            assert_eq!(calendar.first_day_of_week, service.first_day_of_month(month, 2025));
            assert!(calendar.days[..calendar.padding_count()]
                .iter()
                .all(|day| day.day_type == CalendarDayType::PaddingBefore));
        }

        let june = service.generate_calendar_month(focus(6, 2025), &[]);
        assert_eq!(june.padding_count(), 0);
        assert_eq!(june.days[0].day, 1);
    }

    #[test]
    fn test_records_attached_to_matching_day() {
        let service = CalendarService::default();
        let attendance = vec![
            record("2025-03-03", AttendanceStatus::Present),
            record("2025-03-04", AttendanceStatus::Sick),
            record("2025-03-04", AttendanceStatus::Extra),
            record("2025-04-03", AttendanceStatus::Present),
            record("2024-03-03", AttendanceStatus::Excused),
        ];

        let calendar = service.generate_calendar_month(focus(3, 2025), &attendance);
        let days: Vec<&CalendarDay> = calendar.month_days().collect();

        let third = days[2];
        assert_eq!(third.day, 3);
        assert_eq!(third.record_count(), 1);
        assert_eq!(third.status(), Some(&AttendanceStatus::Present));
        assert!(!third.has_badge());

        let fourth = days[3];
        assert_eq!(fourth.record_count(), 2);
        assert_eq!(fourth.status(), Some(&AttendanceStatus::Sick));
        assert!(fourth.has_badge());

        assert_eq!(days[4].status(), None);
        let total: usize = days.iter().map(|day| day.record_count()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_unknown_status_still_shown() {
        let service = CalendarService::default();
        let attendance = vec![record("2025-03-10", AttendanceStatus::Unknown("Alpha".to_string()))];

        let calendar = service.generate_calendar_month(focus(3, 2025), &attendance);
        let tenth = calendar.month_days().find(|day| day.day == 10).unwrap();
        assert_eq!(tenth.status(), Some(&AttendanceStatus::Unknown("Alpha".to_string())));
    }

    #[test]
    fn test_focus_date_validation() {
        let service = CalendarService::default();

        assert_eq!(service.focus_date(3, 2025), Ok(focus(3, 2025)));
        assert_eq!(service.focus_date(0, 2025), Err(AttendanceError::InvalidMonth { month: 0 }));
        assert_eq!(service.focus_date(13, 2025), Err(AttendanceError::InvalidMonth { month: 13 }));
    }

    #[test]
    fn test_navigation_wraps_year() {
        let service = CalendarService::default();

        assert_eq!(service.previous_month(focus(1, 2025)), focus(12, 2024));
        assert_eq!(service.previous_month(focus(7, 2025)), focus(6, 2025));
        assert_eq!(service.next_month(focus(12, 2024)), focus(1, 2025));
        assert_eq!(service.next_month(focus(7, 2025)), focus(8, 2025));
    }

    #[test]
    fn test_title_uses_locale() {
        assert_eq!(CalendarService::new(Locale::En).title(focus(5, 2025)), "May 2025");
        assert_eq!(CalendarService::new(Locale::Id).title(focus(8, 2025)), "Agustus 2025");
    }

    #[test]
    fn test_status_legend_lists_known_statuses() {
        let legend = CalendarService::default().status_legend();
        assert_eq!(legend.len(), 5);
        assert!(legend.iter().all(AttendanceStatus::is_known));
    }
}
