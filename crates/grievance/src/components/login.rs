use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::components::{publish, use_portal, use_screen, use_snapshot, use_toast};
use crate::state::{failure_message, Screen, Toast, LOGIN_ERROR};

/// Email + password login. The password is only checked for presence.
#[component]
pub fn LoginView() -> Element {
    let portal = use_portal();
    let mut snapshot = use_snapshot();
    let mut screen = use_screen();
    let mut toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut signing_in = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let portal = portal.clone();
        spawn(async move {
            signing_in.set(true);
            let mut portal = portal.lock().await;
            match portal.login(&email(), &password()).await {
                Ok(role) => {
                    publish(&portal, &mut snapshot).await;
                    email.set(String::new());
                    password.set(String::new());
                    toast.set(None);
                    screen.set(Screen::from(role));
                }
                Err(e) => {
                    warn!("Login failed: {}", e);
                    toast.set(Some(Toast::error(failure_message(&e, LOGIN_ERROR))));
                }
            }
            signing_in.set(false);
        });
    };

    rsx! {
        section { class: "gp-card gp-login",
            h2 { class: "gp-card-title", "Login" }
            form { class: "gp-form", onsubmit: handle_login,
                label { class: "gp-label", r#for: "username", "Email" }
                input {
                    id: "username",
                    class: "gp-input",
                    r#type: "email",
                    placeholder: "you@college.edu",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { class: "gp-label", r#for: "password", "Password" }
                input {
                    id: "password",
                    class: "gp-input",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                div { class: "gp-form-actions",
                    button {
                        class: "gp-btn gp-btn--secondary",
                        r#type: "button",
                        onclick: move |_| screen.set(Screen::Landing),
                        "Back"
                    }
                    button {
                        class: "gp-btn gp-btn--primary",
                        r#type: "submit",
                        disabled: signing_in(),
                        if signing_in() { "Signing in\u{2026}" } else { "Login" }
                    }
                }
            }
        }
    }
}
