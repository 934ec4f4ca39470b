use dioxus::prelude::*;
use grievance::components::App as GrievanceApp;

const MAIN_CSS: Asset = asset!("/assets/grievance.css");

fn main() {
    // Initialize cross-platform logger (web console + desktop stdout)
    // Use DEBUG level for development builds, INFO for release builds
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("Student Grievance Portal")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1200.0, 900.0))
                .with_min_inner_size(LogicalSize::new(800.0, 600.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(Root);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        dioxus::launch(Root);
    }
}

#[component]
fn Root() -> Element {
    rsx! {
        // asset! is unreliable on desktop, inline the stylesheet there
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/grievance.css")} }
        }

        body { class: "gp-body",
            GrievanceApp {}
        }
    }
}
