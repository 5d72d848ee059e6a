pub mod date_utils;
pub mod labels;
pub mod logging;
pub mod status_style;
