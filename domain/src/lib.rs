//! Domain logic for the student dashboard.
//!
//! Everything here is pure and synchronous: the frontend hands in the records
//! it was given and renders whatever comes back. Keeping the calendar layout,
//! monthly aggregation and pagination out of the components lets them be
//! tested natively.

pub mod calendar;
pub mod dates;
pub mod error;
pub mod ingest;
pub mod monthly_summary;
pub mod notes;
pub mod pagination;

pub use calendar::CalendarService;
pub use error::AttendanceError;
pub use ingest::{ingest_attendance, validate_record, AttendanceIngest, RejectedRecord};
pub use monthly_summary::MonthlySummaryService;
pub use notes::{note_views, NoteView};
pub use pagination::Pager;
