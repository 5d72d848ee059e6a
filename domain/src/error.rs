use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttendanceError {
    #[error("invalid attendance date: {value:?}")]
    InvalidDate { value: String },

    #[error("invalid month: {month}. Must be between 1 and 12")]
    InvalidMonth { month: u32 },
}
