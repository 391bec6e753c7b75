use dioxus::prelude::*;

use crate::components::UserCard;
use crate::context::get_app_config;
use crate::theme::global_styles;

/// Root application component.
///
/// Provides global styles and the startup config, then stacks one card
/// per configured variant.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(get_app_config);
    let variants = config.variants();
    let styles = use_hook(global_styles);

    rsx! {
        style { "{styles}" }
        main { class: "page",
            div { class: "page__stack",
                for variant in variants {
                    section {
                        key: "{variant.heading()}",
                        class: "page__section",
                        h2 { class: "page__heading", "{variant.heading()}" }
                        UserCard { variant }
                    }
                }
            }
        }
    }
}
