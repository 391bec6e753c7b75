//! User Card Component
//!
//! Fetches a random person on mount and renders avatar, name, gender,
//! email and location, with a collapsible address block, contact buttons
//! and a refresh button underneath.

use std::sync::Arc;

use dioxus::prelude::*;
use usercard_core::{run_fetch, run_mount, CardState, CardStore, ProfileSource};
use usercard_ui::{Button, ButtonVariant, Icon, IconButton, IconKind, Spinner};

use super::{ContactBar, GenderBadge};
use crate::context::{use_app_config, CardVariant};

/// Card state held in a Dioxus signal, so writes re-render the card.
#[derive(Clone, Copy)]
struct SignalStore(Signal<CardState>);

impl CardStore for SignalStore {
    fn update<R>(&self, f: impl FnOnce(&mut CardState) -> R) -> R {
        let mut signal = self.0;
        let mut state = signal.write();
        f(&mut *state)
    }
}

/// Start one fetch for `state` and resolve it in the background.
///
/// Overlapping calls are allowed; the state's apply policy decides which
/// response ends up on screen.
fn start_fetch(state: Signal<CardState>, source: Arc<dyn ProfileSource>) {
    spawn(async move {
        run_fetch(&SignalStore(state), source.as_ref()).await;
    });
}

/// Profile card bound to one backend.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     UserCard { variant: CardVariant::Direct }
/// }
/// ```
#[component]
pub fn UserCard(variant: CardVariant) -> Element {
    let config = use_app_config();
    let policy = config.policy;
    let state = use_signal(move || CardState::with_policy(policy));
    let source = use_hook(move || config.source(variant));

    // Fetch once on mount
    let mount_source = source.clone();
    use_hook(move || {
        spawn(async move {
            run_mount(&SignalStore(state), mount_source.as_ref()).await;
        });
    });

    let loading = state.read().is_loading();
    let expanded = state.read().is_expanded();
    let record = state.read().record().cloned();

    let toggle_label = if expanded { "Collapse details" } else { "Expand details" };
    let toggle_icon = if expanded { IconKind::ChevronUp } else { IconKind::ChevronDown };
    let details_class = if expanded {
        "user-card__details user-card__details--open"
    } else {
        "user-card__details"
    };

    rsx! {
        div { class: "user-card-wrap",
            div { class: "user-card",
                if let Some(person) = record {
                    IconButton {
                        class: "user-card__toggle".to_string(),
                        aria_label: toggle_label.to_string(),
                        onclick: move |_| {
                            let mut state = state;
                            state.write().toggle_expansion();
                        },
                        Icon { kind: toggle_icon, size: 20 }
                    }

                    div { class: "user-card__header",
                        img {
                            class: "user-card__avatar",
                            src: "{person.picture.large}",
                            alt: "{person.full_name()}",
                        }
                        div { class: "user-card__identity",
                            h2 { class: "user-card__name",
                                span { class: "user-card__title", "{person.display_title()}" }
                                span { class: "user-card__fullname", "{person.full_name()}" }
                            }
                            GenderBadge { gender: person.gender.clone() }
                            p { class: "user-card__email", "{person.email}" }
                        }
                    }

                    div { class: "user-card__location",
                        p {
                            strong { "Location: " }
                            "{person.location.city_country()}"
                        }
                        div { class: "{details_class}",
                            div { class: "user-card__details-inner",
                                p {
                                    strong { "Street: " }
                                    "{person.location.street_line()}"
                                }
                                p {
                                    strong { "State: " }
                                    "{person.location.state}"
                                }
                                p {
                                    strong { "Postcode: " }
                                    "{person.location.postcode}"
                                }
                            }
                        }
                    }

                    ContactBar { state }
                }
            }

            Button {
                variant: ButtonVariant::Outline,
                class: "user-card__refresh".to_string(),
                disabled: loading,
                onclick: move |_| start_fetch(state, source.clone()),
                if loading {
                    Spinner { size: 20 }
                    "Loading..."
                } else {
                    Icon { kind: IconKind::Refresh, size: 20 }
                    "Get Another User"
                }
            }
        }
    }
}
