//! Loading spinner shown inside the refresh button while a fetch is pending.

use dioxus::prelude::*;

#[component]
pub fn Spinner(
    /// Diameter in pixels
    #[props(default = 20)]
    size: u32,
) -> Element {
    rsx! {
        span {
            class: "spinner",
            style: "width: {size}px; height: {size}px;",
            role: "status",
            "aria-hidden": "true",
        }
    }
}
