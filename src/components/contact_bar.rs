//! Email / Call / Map buttons.

use dioxus::prelude::*;
use usercard_core::{CardState, ContactKind, Navigator};
use usercard_ui::{Button, ButtonVariant, Icon, IconKind};

use super::WebviewNavigator;

fn icon_for(kind: ContactKind) -> IconKind {
    match kind {
        ContactKind::Email => IconKind::Mail,
        ContactKind::Call => IconKind::Phone,
        ContactKind::Map => IconKind::MapPin,
    }
}

/// Contact buttons for the card's current record.
///
/// Each click reads the record at that moment; with no record the click
/// does nothing.
#[component]
pub fn ContactBar(state: Signal<CardState>) -> Element {
    rsx! {
        div { class: "contact-bar",
            for kind in ContactKind::ALL {
                Button {
                    key: "{kind.label()}",
                    variant: ButtonVariant::Filled,
                    onclick: move |_| {
                        if let Some(action) = state.read().contact_action(kind) {
                            WebviewNavigator.navigate(&action);
                        }
                    },
                    Icon { kind: icon_for(kind), size: 18 }
                    "{kind.label()}"
                }
            }
        }
    }
}
