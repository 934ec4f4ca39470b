use dioxus::prelude::*;
use grievance_core::forms::RatingSelector;

const EMOJI: [&str; 5] = ["😞", "😕", "😐", "🙂", "😄"];

/// Star row and emoji row. Choosing in one row clears the other.
#[component]
pub fn RatingSelectorView(
    rating: RatingSelector,
    on_star: EventHandler<u8>,
    on_emoji: EventHandler<u8>,
) -> Element {
    rsx! {
        div { class: "gp-rating",
            div { class: "gp-rating-row", id: "star-rating",
                span { class: "gp-label", "Stars" }
                for k in 1..=5u8 {
                    button {
                        key: "star-{k}",
                        r#type: "button",
                        class: if rating.star_selected(k) { "star selected" } else { "star" },
                        "aria-pressed": rating.star_selected(k),
                        onclick: move |_| on_star.call(k),
                        "\u{2605}"
                    }
                }
            }
            div { class: "gp-rating-row", id: "emoji-rating",
                span { class: "gp-label", "Or pick a face" }
                for (k, glyph) in (1..=5u8).zip(EMOJI) {
                    button {
                        key: "emoji-{k}",
                        r#type: "button",
                        class: if rating.emoji_selected(k) { "emoji selected" } else { "emoji" },
                        "aria-pressed": rating.emoji_selected(k),
                        onclick: move |_| on_emoji.call(k),
                        "{glyph}"
                    }
                }
            }
        }
    }
}
