use shared::Locale;

/// Fixed interface text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    AttendanceTitle,
    NoAttendance,
    NotesTitle,
    NoNotes,
    NoDayData,
    Close,
    PreviousMonth,
    NextMonth,
    PreviousPage,
    NextPage,
    SkippedRecords,
    LoadFailed,
}

pub fn text(locale: Locale, label: Label) -> &'static str {
    match (locale, label) {
        (Locale::En, Label::AttendanceTitle) => "Attendance Summary",
        (Locale::En, Label::NoAttendance) => "No attendance data yet",
        (Locale::En, Label::NotesTitle) => "Homeroom Teacher Notes",
        (Locale::En, Label::NoNotes) => "No notes from the homeroom teacher yet",
        (Locale::En, Label::NoDayData) => "No data",
        (Locale::En, Label::Close) => "Close",
        (Locale::En, Label::PreviousMonth) => "Previous month",
        (Locale::En, Label::NextMonth) => "Next month",
        (Locale::En, Label::PreviousPage) => "Previous",
        (Locale::En, Label::NextPage) => "Next",
        (Locale::En, Label::SkippedRecords) => "attendance records skipped because their date could not be read",
        (Locale::En, Label::LoadFailed) => "Could not load dashboard data",
        (Locale::Id, Label::AttendanceTitle) => "Rekap Kehadiran",
        (Locale::Id, Label::NoAttendance) => "Belum ada data kehadiran",
        (Locale::Id, Label::NotesTitle) => "Catatan Wali Kelas",
        (Locale::Id, Label::NoNotes) => "Belum ada catatan dari wali kelas",
        (Locale::Id, Label::NoDayData) => "Tidak ada data",
        (Locale::Id, Label::Close) => "Tutup",
        (Locale::Id, Label::PreviousMonth) => "Bulan sebelumnya",
        (Locale::Id, Label::NextMonth) => "Bulan berikutnya",
        (Locale::Id, Label::PreviousPage) => "Sebelumnya",
        (Locale::Id, Label::NextPage) => "Berikutnya",
        (Locale::Id, Label::SkippedRecords) => "data kehadiran dilewati karena tanggalnya tidak terbaca",
        (Locale::Id, Label::LoadFailed) => "Gagal memuat data dasbor",
    }
}
