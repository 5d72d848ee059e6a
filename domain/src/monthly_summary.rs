use chrono::Datelike;
use shared::{Attendance, AttendanceStatus, Locale, MonthlyAttendance};
use std::collections::BTreeMap;

use crate::dates;

/// Groups attendance into per-month counts
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlySummaryService {
    locale: Locale,
}

impl MonthlySummaryService {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Per (year, month) counts, newest month first.
    ///
    /// Every record opens its month's bucket. Records with an unknown status
    /// add no count.
    pub fn monthly_attendance(&self, attendance: &[Attendance]) -> Vec<MonthlyAttendance> {
        let mut buckets: BTreeMap<(i32, u32), MonthlyAttendance> = BTreeMap::new();

        for record in attendance {
            let (year, month) = (record.date.year(), record.date.month());
            let bucket = buckets.entry((year, month)).or_insert_with(|| {
                MonthlyAttendance::empty(month, year, dates::month_name(month, self.locale))
            });

            match &record.status {
                AttendanceStatus::Present => bucket.present += 1,
                AttendanceStatus::Sick => bucket.sick += 1,
                AttendanceStatus::Excused => bucket.excused += 1,
                AttendanceStatus::Late => bucket.late += 1,
                AttendanceStatus::Extra => bucket.extra += 1,
                AttendanceStatus::Unknown(label) => {
                    log::debug!("Status {:?} on {} not counted", label, record.date);
                }
            }
        }

        log::debug!(
            "Aggregated {} attendance records into {} months",
            attendance.len(),
            buckets.len()
        );

        buckets.into_values().rev().collect()
    }
}
