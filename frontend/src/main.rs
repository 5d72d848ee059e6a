use anyhow::Context;
use dashboard_domain::ingest_attendance;
use shared::{DashboardData, Locale};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{AttendanceSummary, TeacherNotes};
use services::labels::{text, Label};
use services::logging::{self, Logger};

const DASHBOARD_FIXTURE: &str = include_str!("../demo/dashboard.json");

fn load_dashboard(raw: &str) -> anyhow::Result<DashboardData> {
    serde_json::from_str(raw).context("Failed to parse dashboard data")
}

#[derive(Properties, PartialEq)]
struct AppProps {
    dashboard: Result<DashboardData, String>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let attendance = props
        .dashboard
        .as_ref()
        .map(|data| data.attendance.clone())
        .unwrap_or_default();
    let ingest = use_memo(attendance, |records| ingest_attendance(records));

    let data = match &props.dashboard {
        Ok(data) => data,
        Err(error) => {
            return html! {
                <main class="dashboard">
                    <div class="load-error">
                        <strong>{text(Locale::default(), Label::LoadFailed)}</strong>
                        <div>{error}</div>
                    </div>
                </main>
            };
        }
    };

    let locale = data.config.locale;

    Logger::debug_with_component(
        "App",
        &format!(
            "Rendering dashboard: {} attendance records, {} notes",
            ingest.accepted.len(),
            data.notes.len()
        ),
    );

    html! {
        <main class="dashboard">
            if let Some(first) = ingest.accepted.first() {
                <header class="dashboard-header">
                    <h2>{&first.student_name}</h2>
                    <span class="dashboard-class">{&first.class_name}</span>
                </header>
            }

            if !ingest.rejected.is_empty() {
                <div class="ingest-warning">
                    {format!("{} {}", ingest.rejected.len(), text(locale, Label::SkippedRecords))}
                </div>
            }

            <AttendanceSummary
                attendance={ingest.accepted.clone()}
                page_size={data.config.page_size}
                locale={locale}
            />
            <TeacherNotes notes={data.notes.clone()} locale={locale} />
        </main>
    }
}

fn main() {
    let dashboard = load_dashboard(DASHBOARD_FIXTURE);
    let level = logging::init(
        dashboard
            .as_ref()
            .map(|data| data.config.log_level.as_str())
            .unwrap_or("info"),
    );
    log::info!("Student dashboard starting (log level {})", level);

    let dashboard = dashboard.map_err(|error| {
        log::error!("{:#}", error);
        format!("{:#}", error)
    });

    yew::Renderer::<App>::with_props(AppProps { dashboard }).render();
}
