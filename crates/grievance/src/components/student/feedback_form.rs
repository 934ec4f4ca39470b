use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use grievance_core::forms::FeedbackForm;
use grievance_core::model::NewFeedback;

use super::rating::RatingSelectorView;
use crate::components::{publish, use_portal, use_snapshot, use_toast, ConfirmDialog};
use crate::state::{failure_message, Toast, CONFIRM_FEEDBACK, FEEDBACK_FAILED, FEEDBACK_SUBMITTED};
use crate::utils::SignalExt;

#[component]
pub fn FeedbackFormCard() -> Element {
    let portal = use_portal();
    let mut snapshot = use_snapshot();
    let mut toast = use_toast();
    let mut form = use_signal(FeedbackForm::new);
    let mut pending = use_signal(|| None::<NewFeedback>);
    let mut submitting = use_signal(|| false);

    let prepare_portal = portal.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let portal = prepare_portal.clone();
        spawn(async move {
            let prepared = portal.lock().await.prepare_feedback(&form.read());
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
            match portal.submit_feedback(&payload).await {
                Ok(()) => {
                    publish(&portal, &mut snapshot).await;
                    form.mutate(FeedbackForm::reset);
                    toast.set(Some(Toast::success(FEEDBACK_SUBMITTED)));
                }
                Err(e) => {
                    warn!("Feedback not submitted: {}", e);
                    toast.set(Some(Toast::error(failure_message(&e, FEEDBACK_FAILED))));
                }
            }
            submitting.set(false);
        });
    };

    let values = form.read().clone();

    rsx! {
        div { class: "form-container",
            form { class: "gp-form", onsubmit: handle_submit,
                RatingSelectorView {
                    rating: values.rating,
                    on_star: move |k: u8| {
                        form.mutate(|f| {
                            if let Err(e) = f.rating.select_star(k) {
                                warn!("Ignoring star {}: {}", k, e);
                            }
                        })
                    },
                    on_emoji: move |k: u8| {
                        form.mutate(|f| {
                            if let Err(e) = f.rating.select_emoji(k) {
                                warn!("Ignoring emoji {}: {}", k, e);
                            }
                        })
                    },
                }

                label { class: "gp-label", r#for: "feedback-text", "Feedback" }
                textarea {
                    id: "feedback-text",
                    class: "gp-input",
                    rows: "3",
                    placeholder: "Tell us more (optional)",
                    value: "{values.text}",
                    oninput: move |evt| form.mutate(|f| f.text = evt.value()),
                }

                label { class: "gp-checkbox",
                    input {
                        id: "anonymous-feedback",
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
                    if submitting() { "Submitting\u{2026}" } else { "Submit Feedback" }
                }
            }

            if pending.read().is_some() {
                ConfirmDialog {
                    message: CONFIRM_FEEDBACK.to_string(),
                    on_confirm: handle_confirm,
                    on_cancel: move |_| pending.set(None),
                }
            }
        }
    }
}
