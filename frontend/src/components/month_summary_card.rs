use shared::{AttendanceStatus, CalendarFocusDate, Locale, MonthlyAttendance};
use yew::prelude::*;

use crate::services::status_style::status_class;

#[derive(Properties, PartialEq)]
pub struct MonthSummaryCardProps {
    pub summary: MonthlyAttendance,
    pub locale: Locale,
    pub on_select: Callback<CalendarFocusDate>,
}

/// Statuses shown on a card: the three core counts always, late and extra only when used
pub fn visible_statuses(summary: &MonthlyAttendance) -> Vec<AttendanceStatus> {
    AttendanceStatus::KNOWN
        .into_iter()
        .filter(|status| match status {
            AttendanceStatus::Late | AttendanceStatus::Extra => summary.count_for(status) > 0,
            _ => true,
        })
        .collect()
}

#[function_component(MonthSummaryCard)]
pub fn month_summary_card(props: &MonthSummaryCardProps) -> Html {
    let summary = &props.summary;

    let on_title_click = {
        let on_select = props.on_select.clone();
        let focus = CalendarFocusDate {
            year: summary.year,
            month: summary.month,
        };
        Callback::from(move |_: MouseEvent| on_select.emit(focus))
    };

    html! {
        <div class="month-card">
            <button type="button" class="month-card-title" onclick={on_title_click}>
                {format!("{} {}", summary.month_name, summary.year)}
            </button>

            <div class="month-card-stats">
                {for visible_statuses(summary).iter().map(|status| html! {
                    <div class="month-stat">
                        <div class={classes!("month-stat-count", status_class(status))}>
                            {summary.count_for(status)}
                        </div>
                        <div class="month-stat-label">{status.display_label(props.locale)}</div>
                    </div>
                })}
            </div>
        </div>
    }
}
