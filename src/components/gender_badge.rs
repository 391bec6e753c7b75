//! Gender icon plus capitalised label.

use dioxus::prelude::*;
use usercard_core::gender::capitalize;
use usercard_core::GenderIcon;

#[component]
pub fn GenderBadge(gender: String) -> Element {
    let icon = GenderIcon::from_gender(&gender);
    let label = capitalize(&gender);

    rsx! {
        div { class: "gender-badge",
            span { class: "{icon.class()}", "aria-hidden": "true", "{icon.glyph()}" }
            p { class: "gender-badge__label", "{label}" }
        }
    }
}
