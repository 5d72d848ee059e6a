use shared::AttendanceStatus;

/// CSS modifier for a status chip, legend swatch or day cell
pub fn status_class(status: &AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "status-present",
        AttendanceStatus::Sick => "status-sick",
        AttendanceStatus::Excused => "status-excused",
        AttendanceStatus::Late => "status-late",
        AttendanceStatus::Extra => "status-extra",
        AttendanceStatus::Unknown(_) => "status-unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_status_class() {
        assert_eq!(status_class(&AttendanceStatus::Present), "status-present");
        assert_eq!(status_class(&AttendanceStatus::Late), "status-late");
        assert_eq!(status_class(&AttendanceStatus::Unknown("Alpha".into())), "status-unknown");
    }
}
