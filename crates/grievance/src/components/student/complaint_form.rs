use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use grievance_core::config::DEPARTMENTS;
use grievance_core::forms::ComplaintForm;
use grievance_core::model::{NewComplaint, Priority};

use crate::components::{publish, use_portal, use_snapshot, use_toast, ConfirmDialog};
use crate::state::{failure_message, DuplicateBanner, Toast, COMPLAINT_FAILED, CONFIRM_COMPLAINT};
use crate::utils::SignalExt;

/// Complaint form: validate, confirm, submit, then acknowledge. Duplicates
/// raise the dashboard's `banner`.
#[component]
pub fn ComplaintFormCard(banner: Signal<DuplicateBanner>) -> Element {
    let mut banner = banner;
    let portal = use_portal();
    let mut snapshot = use_snapshot();
    let mut toast = use_toast();
    let mut form = use_signal(ComplaintForm::new);
    let mut pending = use_signal(|| None::<NewComplaint>);
    let mut submitting = use_signal(|| false);

    // Validation runs before the confirmation prompt
    let prepare_portal = portal.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let portal = prepare_portal.clone();
        spawn(async move {
            let prepared = portal.lock().await.prepare_complaint(&form.read());
            match prepared {
                Ok(payload) => pending.set(Some(payload)),
                Err(e) => toast.set(Some(Toast::error(e.to_string()))),
            }
        });
    };

    let handle_confirm = move |_| {
        let Some(payload) = pending.write().take() else {
            return;
        };
        let portal = portal.clone();
        spawn(async move {
            submitting.set(true);
            let mut portal = portal.lock().await;
            match portal.submit_complaint(&payload).await {
                Ok(ack) => {
                    publish(&portal, &mut snapshot).await;
                    form.mutate(ComplaintForm::reset);
                    let mut acknowledged = None;
                    banner.mutate(|b| acknowledged = b.acknowledge(ack));
                    if let Some(ack_toast) = acknowledged {
                        toast.set(Some(ack_toast));
                    }
                }
                Err(e) => {
                    warn!("Complaint not submitted: {}", e);
                    toast.set(Some(Toast::error(failure_message(&e, COMPLAINT_FAILED))));
                }
            }
            submitting.set(false);
        });
    };

    let values = form.read().clone();

    rsx! {
        div { class: "form-container",
            form { class: "gp-form", onsubmit: handle_submit,
                label { class: "gp-label", r#for: "complaint-title", "Title" }
                input {
                    id: "complaint-title",
                    class: "gp-input",
                    r#type: "text",
                    value: "{values.title}",
                    oninput: move |evt| form.mutate(|f| f.title = evt.value()),
                }

                label { class: "gp-label", r#for: "complaint-description", "Description" }
                textarea {
                    id: "complaint-description",
                    class: "gp-input",
                    rows: "4",
                    value: "{values.description}",
                    oninput: move |evt| form.mutate(|f| f.description = evt.value()),
                }

                label { class: "gp-label", r#for: "complaint-priority", "Priority" }
                select {
                    id: "complaint-priority",
                    class: "gp-input",
                    value: "{values.priority}",
                    onchange: move |evt| form.mutate(|f| f.priority = evt.value()),
                    option { value: "", "Select priority" }
                    for priority in Priority::ALL.iter() {
                        option { key: "{priority}", value: "{priority}", "{priority}" }
                    }
                }

                label { class: "gp-label", r#for: "complaint-department", "Department" }
                select {
                    id: "complaint-department",
                    class: "gp-input",
                    value: "{values.department}",
                    onchange: move |evt| form.mutate(|f| f.department = evt.value()),
                    for name in DEPARTMENTS.iter() {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }

                label { class: "gp-checkbox",
                    input {
                        id: "anonymous-complaint",
                        r#type: "checkbox",
                        checked: values.anonymous,
                        onchange: move |evt| form.mutate(|f| f.anonymous = evt.checked()),
                    }
                    "Submit anonymously"
                }

                button {
                    class: "gp-btn gp-btn--primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Submitting\u{2026}" } else { "Submit Complaint" }
                }
            }

            if pending.read().is_some() {
                ConfirmDialog {
                    message: CONFIRM_COMPLAINT.to_string(),
                    on_confirm: handle_confirm,
                    on_cancel: move |_| pending.set(None),
                }
            }
        }
    }
}
