use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{use_modal_context, Modal, Page},
        constant::SITE_NAME,
        route::NotFound,
        story::{find_story, render_description, Story},
    },
    model::modal::ModalEvent,
};

#[derive(Clone, PartialEq)]
pub struct ActionEntry {
    pub at: DateTime<Utc>,
    pub event: ModalEvent,
}

fn record(mut actions: Signal<Vec<ActionEntry>>, story: &str, event: ModalEvent) {
    tracing::info!("[{}] {}", story, event);
    actions.write().push(ActionEntry {
        at: Utc::now(),
        event,
    });
}

#[component]
pub fn StoryView(slug: String) -> Element {
    let Some(story) = find_story(&slug) else {
        return rsx! {
            NotFound { segments: vec!["story".to_string(), slug] }
        };
    };

    rsx! {
        Title { "{story.name} | {SITE_NAME}" }
        Page {
            heading: "UI/Modal/{story.name}",
            class: "page--narrow",
            div {
                class: "story__docs",
                dangerous_inner_html: render_description(story.description)
            }
            StoryCanvas { story: *story }
        }
    }
}

/// Parent that owns the open flag, the way a caller of `Modal` would.
#[component]
fn StoryCanvas(story: Story) -> Element {
    let mut is_open = use_signal(|| false);
    let actions = use_signal(Vec::<ActionEntry>::new);
    let name = story.name;

    rsx! {
        div {
            button {
                class: "button button--primary",
                onclick: move |_| is_open.set(true),
                "Open Modal"
            }
            Modal {
                model_value: is_open(),
                full_screen: story.config.full_screen,
                close_on_click_outside: story.config.close_on_click_outside,
                on_update_model_value: move |value: bool| {
                    record(actions, name, ModalEvent::UpdateModelValue(value));
                    is_open.set(value);
                },
                on_close: move |_: ()| record(actions, name, ModalEvent::Close),
                on_transition_end: move |_: ()| record(actions, name, ModalEvent::TransitionEnd),
                title: story.title.map(|title| rsx! { "{title}" }),
                StoryBody { content: story.content }
            }
        }
        ActionLog { actions }
    }
}

#[component]
fn StoryBody(content: &'static str) -> Element {
    rsx! {
        div {
            class: "story__body",
            p { "{content}" }
            div {
                class: "story__actions",
                CloseButton {}
            }
        }
    }
}

/// Closes the enclosing modal through its context.
#[component]
fn CloseButton() -> Element {
    let modal = use_modal_context();

    rsx! {
        button {
            class: "button",
            onclick: move |_| modal.close(),
            "Close"
        }
    }
}

#[component]
fn ActionLog(mut actions: Signal<Vec<ActionEntry>>) -> Element {
    rsx! {
        div {
            class: "card",
            div {
                class: "card__body",
                div {
                    class: "card__header",
                    h2 { class: "card__title", "Actions" }
                    button {
                        class: "button button--ghost",
                        disabled: actions.read().is_empty(),
                        onclick: move |_| actions.write().clear(),
                        "Clear"
                    }
                }
                if actions.read().is_empty() {
                    p { class: "muted", "No events yet" }
                }
                ul {
                    class: "action-log",
                    for (index, entry) in actions.read().iter().enumerate() {
                        li {
                            key: "{index}",
                            span {
                                class: "action-log__time",
                                {entry.at.format("%H:%M:%S%.3f").to_string()}
                            }
                            "{entry.event}"
                        }
                    }
                }
            }
        }
    }
}
