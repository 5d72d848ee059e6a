use shared::{Locale, TeacherNote};

use crate::dates;

/// A teacher note ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct NoteView {
    pub student_name: String,
    pub formatted_date: String,
    pub note: String,
    pub homeroom_teacher: Option<String>,
}

/// Display rows for the notes list, in the order given
pub fn note_views(notes: &[TeacherNote], locale: Locale) -> Vec<NoteView> {
    notes
        .iter()
        .map(|note| NoteView {
            student_name: note.student_name.clone(),
            formatted_date: dates::format_date_for_display(&note.date, locale),
            note: note.note.clone(),
            homeroom_teacher: note
                .homeroom_teacher
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(date: &str, text: &str, teacher: Option<&str>) -> TeacherNote {
        TeacherNote {
            student_name: "Budi Santoso".to_string(),
            date: date.to_string(),
            note: text.to_string(),
            homeroom_teacher: teacher.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_notes() {
        assert!(note_views(&[], Locale::En).is_empty());
    }

    #[test]
    fn test_formats_dates_and_keeps_order() {
        let notes = vec![
            note("2025-03-14", "Participates actively.", Some("Mrs. Sari")),
            note("2025-01-05T08:00:00+07:00", "Needs to improve punctuality.", None),
        ];

        let views = note_views(&notes, Locale::En);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].formatted_date, "March 14, 2025");
        assert_eq!(views[0].homeroom_teacher.as_deref(), Some("Mrs. Sari"));
        assert_eq!(views[1].formatted_date, "January 5, 2025");
        assert_eq!(views[1].note, "Needs to improve punctuality.");
        assert_eq!(views[1].homeroom_teacher, None);
    }

    #[test]
    fn test_indonesian_dates() {
        let views = note_views(&[note("2025-08-17", "Merdeka", None)], Locale::Id);
        assert_eq!(views[0].formatted_date, "17 Agustus 2025");
    }

    #[test]
    fn test_unparseable_date_shown_raw() {
        let views = note_views(&[note("next week", "Follow up", None)], Locale::En);
        assert_eq!(views[0].formatted_date, "next week");
    }

    #[test]
    fn test_blank_teacher_treated_as_absent() {
        let views = note_views(&[note("2025-03-14", "Ok", Some("   "))], Locale::En);
        assert_eq!(views[0].homeroom_teacher, None);
    }
}
