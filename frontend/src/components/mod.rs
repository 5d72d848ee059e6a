pub mod attendance_calendar;
pub mod attendance_summary;
pub mod month_summary_card;
pub mod teacher_notes;

pub use attendance_calendar::AttendanceCalendar;
pub use attendance_summary::AttendanceSummary;
pub use month_summary_card::MonthSummaryCard;
pub use teacher_notes::TeacherNotes;
