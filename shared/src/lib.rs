use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attendance outcome for a single student on a single day.
///
/// Labels are matched case-insensitively and accept both the English names and
/// the Indonesian names used by the school's export (`Hadir`, `Sakit`, `Izin`,
/// `Tambahan`, `Terlambat`). Anything else is preserved as `Unknown` so it can
/// still be shown on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttendanceStatus {
    Present,
    Sick,
    Excused,
    Extra,
    Late,
    Unknown(String),
}

impl AttendanceStatus {
    /// Known categories in legend/display order
    pub const KNOWN: [AttendanceStatus; 5] = [
        AttendanceStatus::Present,
        AttendanceStatus::Sick,
        AttendanceStatus::Excused,
        AttendanceStatus::Late,
        AttendanceStatus::Extra,
    ];

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "present" | "hadir" => AttendanceStatus::Present,
            "sick" | "sakit" => AttendanceStatus::Sick,
            "excused" | "izin" => AttendanceStatus::Excused,
            "extra" | "tambahan" => AttendanceStatus::Extra,
            "late" | "terlambat" => AttendanceStatus::Late,
            _ => AttendanceStatus::Unknown(label.to_string()),
        }
    }

    /// Canonical label, or the original text for unknown statuses
    pub fn label(&self) -> &str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Sick => "Sick",
            AttendanceStatus::Excused => "Excused",
            AttendanceStatus::Extra => "Extra",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Unknown(label) => label,
        }
    }

    /// Localized label for display
    pub fn display_label(&self, locale: Locale) -> &str {
        match (locale, self) {
            (_, AttendanceStatus::Unknown(label)) => label,
            (Locale::En, status) => status.label(),
            (Locale::Id, AttendanceStatus::Present) => "Hadir",
            (Locale::Id, AttendanceStatus::Sick) => "Sakit",
            (Locale::Id, AttendanceStatus::Excused) => "Izin",
            (Locale::Id, AttendanceStatus::Extra) => "Tambahan",
            (Locale::Id, AttendanceStatus::Late) => "Terlambat",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, AttendanceStatus::Unknown(_))
    }
}

impl From<String> for AttendanceStatus {
    fn from(label: String) -> Self {
        AttendanceStatus::from_label(&label)
    }
}

impl From<AttendanceStatus> for String {
    fn from(status: AttendanceStatus) -> Self {
        status.label().to_string()
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Attendance row exactly as supplied by the data layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(alias = "namaSiswa", alias = "studentName")]
    pub student_name: String,
    #[serde(alias = "kelas", alias = "className")]
    pub class_name: String,
    #[serde(alias = "tanggal")]
    pub date: String,
    pub status: AttendanceStatus,
}

/// Attendance row whose date has been validated into a calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub student_name: String,
    pub class_name: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Per (year, month) attendance counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAttendance {
    pub month: u32, // 1-based
    pub year: i32,
    pub month_name: String,
    pub present: u32,
    pub sick: u32,
    pub excused: u32,
    pub late: u32,
    pub extra: u32,
}

impl MonthlyAttendance {
    pub fn empty(month: u32, year: i32, month_name: impl Into<String>) -> Self {
        Self {
            month,
            year,
            month_name: month_name.into(),
            present: 0,
            sick: 0,
            excused: 0,
            late: 0,
            extra: 0,
        }
    }

    /// Count for a known status; unknown statuses always report 0
    pub fn count_for(&self, status: &AttendanceStatus) -> u32 {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Sick => self.sick,
            AttendanceStatus::Excused => self.excused,
            AttendanceStatus::Late => self.late,
            AttendanceStatus::Extra => self.extra,
            AttendanceStatus::Unknown(_) => 0,
        }
    }

    pub fn total(&self) -> u32 {
        self.present + self.sick + self.excused + self.late + self.extra
    }
}

/// Note left by a homeroom teacher, displayed in list order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherNote {
    #[serde(alias = "namaSiswa", alias = "studentName")]
    pub student_name: String,
    #[serde(alias = "tanggal")]
    pub date: String,
    #[serde(alias = "catatan", alias = "noteText")]
    pub note: String,
    #[serde(
        default,
        alias = "waliKelas",
        alias = "homeroomTeacherName",
        skip_serializing_if = "Option::is_none"
    )]
    pub homeroom_teacher: Option<String>,
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CalendarDayType {
    /// Empty padding day before the start of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// A month laid out as a Sunday-first 7-column grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    pub days: Vec<CalendarDay>,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
}

impl CalendarMonth {
    pub fn month_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days
            .iter()
            .filter(|day| day.day_type == CalendarDayType::MonthDay)
    }

    pub fn padding_count(&self) -> usize {
        self.days
            .iter()
            .filter(|day| day.day_type == CalendarDayType::PaddingBefore)
            .count()
    }
}

/// Represents a single cell in the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    pub day: u32,
    pub day_type: CalendarDayType,
    pub records: Vec<Attendance>,
}

impl CalendarDay {
    pub fn padding() -> Self {
        Self {
            day: 0,
            day_type: CalendarDayType::PaddingBefore,
            records: Vec::new(),
        }
    }

    /// Status of the first record for this day, if any
    pub fn status(&self) -> Option<&AttendanceStatus> {
        self.records.first().map(|record| &record.status)
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Days with more than one record show a count badge
    pub fn has_badge(&self) -> bool {
        self.records.len() > 1
    }
}

/// Month/year the calendar is focused on (month is 1-based)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarFocusDate {
    pub year: i32,
    pub month: u32,
}

impl CalendarFocusDate {
    /// Converts a 0-based month index (0 = January) as used by component props.
    /// Indices past December clamp to December.
    pub fn from_zero_based(month0: u32, year: i32) -> Self {
        Self {
            year,
            month: month0.min(11) + 1,
        }
    }

    pub fn zero_based_month(&self) -> u32 {
        self.month - 1
    }
}

/// Display language for month names, weekday headers and labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Id,
}

impl Locale {
    pub fn month_names(self) -> [&'static str; 12] {
        match self {
            Locale::En => [
                "January", "February", "March", "April", "May", "June",
                "July", "August", "September", "October", "November", "December",
            ],
            Locale::Id => [
                "Januari", "Februari", "Maret", "April", "Mei", "Juni",
                "Juli", "Agustus", "September", "Oktober", "November", "Desember",
            ],
        }
    }

    /// Sunday-first weekday headers
    pub fn weekday_abbreviations(self) -> [&'static str; 7] {
        match self {
            Locale::En => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            Locale::Id => ["Min", "Sen", "Sel", "Rab", "Kam", "Jum", "Sab"],
        }
    }
}

/// Dashboard settings, every field optional in JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Monthly summaries shown per carousel page
    pub page_size: usize,
    pub locale: Locale,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: 4,
            locale: Locale::Id,
            log_level: "info".to_string(),
        }
    }
}

/// Everything the dashboard needs for one student
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardData {
    pub config: DashboardConfig,
    pub attendance: Vec<AttendanceRecord>,
    pub notes: Vec<TeacherNote>,
}
