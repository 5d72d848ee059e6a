use dashboard_domain::note_views;
use shared::{Locale, TeacherNote};
use yew::prelude::*;

use crate::services::labels::{text, Label};

#[derive(Properties, PartialEq)]
pub struct TeacherNotesProps {
    pub notes: Vec<TeacherNote>,
    #[prop_or_default]
    pub locale: Locale,
}

#[function_component(TeacherNotes)]
pub fn teacher_notes(props: &TeacherNotesProps) -> Html {
    let locale = props.locale;
    let views = note_views(&props.notes, locale);

    html! {
        <section class="dashboard-card teacher-notes">
            <div class="dashboard-card-header">
                <span class="dashboard-card-icon">{"💬"}</span>
                <h3>{text(locale, Label::NotesTitle)}</h3>
            </div>

            if views.is_empty() {
                <div class="empty-state">{text(locale, Label::NoNotes)}</div>
            } else {
                <div class="notes-list">
                    {for views.into_iter().enumerate().map(|(index, view)| html! {
                        <div class="note" key={index}>
                            <div class="note-header">
                                <span class="note-date">{view.formatted_date}</span>
                                if let Some(teacher) = view.homeroom_teacher {
                                    <span class="note-teacher">{teacher}</span>
                                }
                            </div>
                            <p class="note-text">{view.note}</p>
                        </div>
                    })}
                </div>
            }
        </section>
    }
}
