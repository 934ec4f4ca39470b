//! UI components for the grievance portal.
//!
//! # Component Architecture
//!
//! - `app_shell`: AppBar, Footer
//! - `landing`, `login`: entry screens
//! - `admin`: AdminDashboard with counters, notifications, filters, board,
//!   feedback panel, chart and history
//! - `student`: StudentDashboard with the complaint and feedback forms and the
//!   student's own lists
//! - `confirm_dialog`, `toast`: confirmation modal and acknowledgments
//!
//! # Context Providers
//!
//! Components share state through Dioxus context:
//!
//! ```ignore
//! // Run a command and publish the result
//! let portal = use_portal();
//! let mut snapshot = use_snapshot();
//! spawn(async move {
//!     let mut portal = portal.lock().await;
//!     portal.search("wifi").await;
//!     publish(&portal, &mut snapshot).await;
//! });
//! ```

mod admin;
mod app_shell;
mod confirm_dialog;
mod landing;
mod login;
mod student;
mod toast;

pub use admin::AdminDashboard;
pub use app_shell::{AppBar, Footer};
pub use confirm_dialog::ConfirmDialog;
pub use landing::Landing;
pub use login::LoginView;
pub use student::StudentDashboard;
pub use toast::ToastHost;

use std::sync::Arc;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use futures::lock::Mutex;
use grievance_core::portal::Portal;

use crate::gateway::HttpGateway;
use crate::state::{snapshot_of, PlatformPortal, PortalSnapshot, Screen, SharedPortal, Toast};
use crate::storage::PlatformSessionStore;

// ============================================================================
// Context accessors
// ============================================================================

/// The shared portal. Lock it for the duration of a command.
pub fn use_portal() -> SharedPortal {
    use_context::<SharedPortal>()
}

/// Last published view state.
pub fn use_snapshot() -> Signal<PortalSnapshot> {
    use_context::<Signal<PortalSnapshot>>()
}

pub fn use_screen() -> Signal<Screen> {
    use_context::<Signal<Screen>>()
}

/// Current acknowledgment, if any.
pub fn use_toast() -> Signal<Option<Toast>> {
    use_context::<Signal<Option<Toast>>>()
}

/// Recomputes the snapshot from the (locked) portal and publishes it.
pub async fn publish(portal: &PlatformPortal, snapshot: &mut Signal<PortalSnapshot>) {
    let next = snapshot_of(portal).await;
    snapshot.set(next);
}

fn create_portal() -> SharedPortal {
    let portal = Portal::new(HttpGateway::from_config(), PlatformSessionStore::open());
    // Arc is single-threaded on WASM (no Send/Sync needed)
    #[allow(clippy::arc_with_non_send_sync)]
    Arc::new(Mutex::new(portal))
}

#[component]
pub fn App() -> Element {
    let portal = use_context_provider(create_portal);

    let snapshot = use_signal(PortalSnapshot::empty);
    use_context_provider(|| snapshot);

    let mut screen = use_signal(|| Screen::Landing);
    use_context_provider(|| screen);

    let toast = use_signal(|| None::<Toast>);
    use_context_provider(|| toast);

    // Initial load of both lists
    use_future(move || {
        let portal = portal.clone();
        let mut snapshot = snapshot;
        async move {
            let mut portal = portal.lock().await;
            let report = portal.load().await;
            if !report.is_complete() {
                info!("Starting with partial data; backend unavailable");
            }
            publish(&portal, &mut snapshot).await;
        }
    });

    rsx! {
        div { class: "gp-app",
            AppBar {
                screen: screen(),
                on_home: move |_| screen.set(Screen::Landing),
            }

            main { class: "gp-main",
                if screen() == Screen::Landing {
                    Landing {}
                } else if screen() == Screen::Login {
                    LoginView {}
                } else if screen() == Screen::Admin {
                    AdminDashboard {}
                } else {
                    StudentDashboard {}
                }
            }

            Footer {}

            ToastHost {}
        }
    }
}
