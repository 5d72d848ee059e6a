use dashboard_domain::CalendarService;
use shared::{Attendance, CalendarDay, CalendarDayType, CalendarFocusDate, Locale};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils;
use crate::services::labels::{text, Label};
use crate::services::logging::Logger;
use crate::services::status_style::status_class;

#[derive(Properties, PartialEq)]
pub struct AttendanceCalendarProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    /// 0-based month (0 = January)
    pub month: u32,
    pub year: i32,
    pub attendance: Vec<Attendance>,
    #[prop_or_default]
    pub locale: Locale,
}

/// Focus for a 0-based month prop; months past December fall back to December
pub fn prop_focus(service: &CalendarService, month0: u32, year: i32) -> CalendarFocusDate {
    match service.focus_date(month0.saturating_add(1), year) {
        Ok(focus) => focus,
        Err(error) => {
            Logger::warn_with_component("AttendanceCalendar", &format!("{}, showing December", error));
            CalendarFocusDate::from_zero_based(month0, year)
        }
    }
}

/// Hover text for a day: "Present (2x)" or the no-data label
pub fn day_tooltip(day: &CalendarDay, locale: Locale) -> String {
    match day.status() {
        Some(status) => format!("{} ({}x)", status.display_label(locale), day.record_count()),
        None => text(locale, Label::NoDayData).to_string(),
    }
}

fn render_day(day: &CalendarDay, focus: CalendarFocusDate, locale: Locale) -> Html {
    if day.day_type == CalendarDayType::PaddingBefore {
        return html! { <div class="calendar-day empty"></div> };
    }

    let status = day.status().map(status_class).unwrap_or("status-none");
    let today = chrono::NaiveDate::from_ymd_opt(focus.year, focus.month, day.day)
        .map(date_utils::is_today)
        .unwrap_or(false);

    html! {
        <div
            class={classes!("calendar-day", status, today.then_some("today"))}
            title={day_tooltip(day, locale)}
        >
            <span class="day-number">{day.day}</span>
            if day.has_badge() {
                <span class="day-badge">{format!("{}x", day.record_count())}</span>
            }
        </div>
    }
}

#[function_component(AttendanceCalendar)]
pub fn attendance_calendar(props: &AttendanceCalendarProps) -> Html {
    let locale = props.locale;
    let service = CalendarService::new(locale);
    let focus = use_state_eq(|| prop_focus(&service, props.month, props.year));

    // Reopening on another month replaces whatever was navigated to
    {
        let focus = focus.clone();
        use_effect_with((props.month, props.year), move |&(month, year)| {
            focus.set(prop_focus(&service, month, year));
            || ()
        });
    }

    let on_previous_month = {
        let focus = focus.clone();
        Callback::from(move |_: MouseEvent| focus.set(service.previous_month(*focus)))
    };

    let on_next_month = {
        let focus = focus.clone();
        Callback::from(move |_: MouseEvent| focus.set(service.next_month(*focus)))
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    let focus = *focus;
    let calendar = service.generate_calendar_month(focus, &props.attendance);

    html! {
        <div class="calendar-modal-backdrop" onclick={on_backdrop_click}>
            <div class="calendar-modal" role="dialog" aria-modal="true" onclick={on_modal_click}>
                <div class="calendar-modal-header">
                    <button
                        type="button"
                        class="calendar-nav"
                        title={text(locale, Label::PreviousMonth)}
                        onclick={on_previous_month}
                    >
                        {"◀"}
                    </button>
                    <h3 class="calendar-title">{service.title(focus)}</h3>
                    <button
                        type="button"
                        class="calendar-nav"
                        title={text(locale, Label::NextMonth)}
                        onclick={on_next_month}
                    >
                        {"▶"}
                    </button>
                    <button
                        type="button"
                        class="calendar-close"
                        title={text(locale, Label::Close)}
                        onclick={on_close_click}
                    >
                        {"✕"}
                    </button>
                </div>

                <div class="calendar-legend">
                    {for service.status_legend().iter().map(|status| html! {
                        <div class="legend-item">
                            <span class={classes!("legend-swatch", status_class(status))}></span>
                            <span>{status.display_label(locale)}</span>
                        </div>
                    })}
                </div>

                <div class="calendar-weekdays">
                    {for locale.weekday_abbreviations().iter().map(|weekday| html! {
                        <div class="weekday">{*weekday}</div>
                    })}
                </div>
                <div class="calendar-grid">
                    {for calendar.days.iter().map(|day| render_day(day, focus, locale))}
                </div>
            </div>
        </div>
    }
}
