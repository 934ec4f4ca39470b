//! Admin dashboard: counters, notifications, filters, triage board, feedback
//! panel, chart and history.

mod board;
mod chart;
mod filter_bar;
mod history;
mod notifications;
mod summary;

use board::{FeedbackPanel, TriageBoardView};
use chart::ProportionChart;
use filter_bar::{FilterBar, FilterRequest};
use history::HistoryLists;
use notifications::NotificationBell;
use summary::SummaryCounters;

use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use grievance_core::filter::FilterOutcome;
use grievance_core::model::ComplaintId;

use crate::components::{publish, use_portal, use_snapshot, use_toast};
use crate::state::{failure_message, Toast, RESOLVED, RESOLVE_FAILED};

#[component]
pub fn AdminDashboard() -> Element {
    let portal = use_portal();
    let mut snapshot = use_snapshot();
    let mut toast = use_toast();
    let view = snapshot.read().clone();

    let resolve_portal = portal.clone();
    let handle_resolve = move |id: ComplaintId| {
        let portal = resolve_portal.clone();
        spawn(async move {
            let mut portal = portal.lock().await;
            match portal.resolve(id).await {
                Ok(()) => {
                    publish(&portal, &mut snapshot).await;
                    toast.set(Some(Toast::success(RESOLVED)));
                }
                Err(e) => {
                    toast.set(Some(Toast::error(failure_message(&e, RESOLVE_FAILED))));
                }
            }
        });
    };

    let handle_filter = move |request: FilterRequest| {
        let portal = portal.clone();
        spawn(async move {
            let mut portal = portal.lock().await;
            let outcome = match &request {
                FilterRequest::Search(query) => Some(portal.search(query).await),
                FilterRequest::Date(date) => Some(portal.filter_by_date(date).await),
                FilterRequest::Department(department) => {
                    Some(portal.filter_by_department(department))
                }
                FilterRequest::Clear => {
                    portal.clear_filter().await;
                    None
                }
            };
            match outcome {
                Some(FilterOutcome::FellBack(e)) => {
                    warn!("{:?} failed, showing all complaints: {}", request, e)
                }
                Some(FilterOutcome::Applied) => info!("Applied {:?}", request),
                _ => {}
            }
            publish(&portal, &mut snapshot).await;
        });
    };

    rsx! {
        section { class: "gp-dashboard gp-dashboard--admin",
            div { class: "gp-dashboard-header",
                h2 { class: "gp-dashboard-title", "Admin Dashboard" }
                NotificationBell {
                    badge: view.badge,
                    lines: view.notification_lines.clone(),
                }
            }

            SummaryCounters { summary: view.summary }

            FilterBar { filtered: view.filtered, on_filter: handle_filter }

            TriageBoardView { board: view.board.clone(), on_resolve: handle_resolve }

            FeedbackPanel { cards: view.feedback_panel.clone() }

            ProportionChart { chart: view.chart.clone(), counts: view.chart_counts }

            HistoryLists {
                complaints: view.complaint_history.clone(),
                feedback: view.feedback_history.clone(),
            }
        }
    }
}
