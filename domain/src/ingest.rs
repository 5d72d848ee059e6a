//! Validation of supplied attendance rows.
//!
//! Rows whose date cannot be read are rejected here, before aggregation or
//! calendar layout, so they can never form a bucket of their own.

use shared::{Attendance, AttendanceRecord};

use crate::dates::parse_attendance_date;
use crate::error::AttendanceError;

/// A supplied row that could not be accepted
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    pub record: AttendanceRecord,
    pub error: AttendanceError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceIngest {
    pub accepted: Vec<Attendance>,
    pub rejected: Vec<RejectedRecord>,
}

/// Validate a single supplied row
pub fn validate_record(record: &AttendanceRecord) -> Result<Attendance, AttendanceError> {
    Ok(Attendance {
        student_name: record.student_name.clone(),
        class_name: record.class_name.clone(),
        date: parse_attendance_date(&record.date)?,
        status: record.status.clone(),
    })
}

/// Split supplied rows into accepted records and rejections, preserving order
pub fn ingest_attendance(records: &[AttendanceRecord]) -> AttendanceIngest {
    let mut ingest = AttendanceIngest::default();

    for record in records {
        match validate_record(record) {
            Ok(attendance) => ingest.accepted.push(attendance),
            Err(error) => {
                log::warn!(
                    "Skipping attendance for {} ({}): {}",
                    record.student_name,
                    record.class_name,
                    error
                );
                ingest.rejected.push(RejectedRecord {
                    record: record.clone(),
                    error,
                });
            }
        }
    }

    if !ingest.rejected.is_empty() {
        log::info!(
            "Accepted {} of {} attendance records",
            ingest.accepted.len(),
            records.len()
        );
    }

    ingest
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::AttendanceStatus;

    fn raw(date: &str, status: &str) -> AttendanceRecord {
        AttendanceRecord {
            student_name: "Budi Santoso".to_string(),
            class_name: "XII IPA 1".to_string(),
            date: date.to_string(),
            status: AttendanceStatus::from_label(status),
        }
    }

    #[test]
    fn test_accepts_valid_rows_in_order() {
        let records = vec![
            raw("2025-01-06", "Hadir"),
            raw("2025-01-07T07:00:00+07:00", "Sakit"),
            raw("2025-01-08 07:00:00", "Late"),
        ];

        let ingest = ingest_attendance(&records);
        assert!(ingest.rejected.is_empty());
        assert_eq!(ingest.accepted.len(), 3);
        assert_eq!(ingest.accepted[0].date, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        assert_eq!(ingest.accepted[1].status, AttendanceStatus::Sick);
        assert_eq!(ingest.accepted[2].date, NaiveDate::from_ymd_opt(2025, 1, 8).unwrap());
    }

    #[test]
    fn test_rejects_unparseable_dates() {
        let records = vec![
            raw("2025-01-06", "Hadir"),
            raw("Invalid Date", "Hadir"),
            raw("2025-02-30", "Izin"),
        ];

        let ingest = ingest_attendance(&records);
        assert_eq!(ingest.accepted.len(), 1);
        assert_eq!(ingest.rejected.len(), 2);
        assert_eq!(ingest.rejected[0].record.date, "Invalid Date");
        assert_eq!(
            ingest.rejected[1].error,
            AttendanceError::InvalidDate {
                value: "2025-02-30".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_status_is_accepted() {
        let ingest = ingest_attendance(&[raw("2025-01-06", "Dispensasi")]);
        assert_eq!(ingest.accepted.len(), 1);
        assert!(!ingest.accepted[0].status.is_known());
    }

    #[test]
    fn test_ingest_from_json_fixture() {
        let json = r#"[
            {"namaSiswa": "Budi", "kelas": "XII", "tanggal": "2025-01-06", "status": "Hadir"},
            {"namaSiswa": "Budi", "kelas": "XII", "tanggal": "", "status": "Sakit"}
        ]"#;
        let records: Vec<AttendanceRecord> = serde_json::from_str(json).unwrap();

        let ingest = ingest_attendance(&records);
        assert_eq!(ingest.accepted.len(), 1);
        assert_eq!(ingest.rejected.len(), 1);
    }
}
