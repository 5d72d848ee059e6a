use dashboard_domain::MonthlySummaryService;
use shared::{Attendance, CalendarFocusDate, Locale};
use yew::prelude::*;

use super::{AttendanceCalendar, MonthSummaryCard};
use crate::hooks::use_pagination::use_pagination;
use crate::services::labels::{text, Label};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct AttendanceSummaryProps {
    pub attendance: Vec<Attendance>,
    #[prop_or(4)]
    pub page_size: usize,
    #[prop_or_default]
    pub locale: Locale,
}

#[function_component(AttendanceSummary)]
pub fn attendance_summary(props: &AttendanceSummaryProps) -> Html {
    let locale = props.locale;
    let selected_month = use_state(|| Option::<CalendarFocusDate>::None);

    let monthly = use_memo((props.attendance.clone(), locale), |(attendance, locale)| {
        MonthlySummaryService::new(*locale).monthly_attendance(attendance)
    });

    let pagination = use_pagination(monthly.len(), props.page_size);

    let on_select_month = {
        let selected_month = selected_month.clone();
        Callback::from(move |focus: CalendarFocusDate| {
            Logger::debug_with_component(
                "AttendanceSummary",
                &format!("Opening calendar for {}/{}", focus.month, focus.year),
            );
            selected_month.set(Some(focus));
        })
    };

    let on_close_calendar = {
        let selected_month = selected_month.clone();
        Callback::from(move |_: ()| selected_month.set(None))
    };

    let content = if monthly.is_empty() {
        html! {
            <div class="empty-state">{text(locale, Label::NoAttendance)}</div>
        }
    } else {
        let state = &pagination.state;
        html! {
            <>
                <div
                    class="month-carousel"
                    ref={pagination.carousel_ref.clone()}
                    onscroll={pagination.actions.on_scroll.clone()}
                >
                    {for state.pages.iter().enumerate().map(|(page, range)| html! {
                        <div class="month-carousel-page" key={page}>
                            {for monthly[range.clone()].iter().map(|summary| html! {
                                <MonthSummaryCard
                                    key={format!("{}-{}", summary.year, summary.month)}
                                    summary={summary.clone()}
                                    locale={locale}
                                    on_select={on_select_month.clone()}
                                />
                            })}
                        </div>
                    })}
                </div>

                if state.page_count > 1 {
                    <div class="pagination-controls">
                        <button
                            type="button"
                            class="pagination-button"
                            disabled={!state.can_go_previous}
                            onclick={pagination.actions.previous_page.clone()}
                        >
                            {format!("◀ {}", text(locale, Label::PreviousPage))}
                        </button>
                        <span class="pagination-status">
                            {format!("{} / {}", state.current_page + 1, state.page_count)}
                        </span>
                        <button
                            type="button"
                            class="pagination-button"
                            disabled={!state.can_go_next}
                            onclick={pagination.actions.next_page.clone()}
                        >
                            {format!("{} ▶", text(locale, Label::NextPage))}
                        </button>
                    </div>
                }
            </>
        }
    };

    html! {
        <section class="dashboard-card attendance-summary">
            <div class="dashboard-card-header">
                <span class="dashboard-card-icon">{"📅"}</span>
                <h3>{text(locale, Label::AttendanceTitle)}</h3>
            </div>

            {content}

            if let Some(focus) = *selected_month {
                <AttendanceCalendar
                    is_open={true}
                    on_close={on_close_calendar}
                    month={focus.zero_based_month()}
                    year={focus.year}
                    attendance={props.attendance.clone()}
                    locale={locale}
                />
            }
        </section>
    }
}
