use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBan, FaExpand, FaHeading, FaWindowMaximize},
    Icon,
};

use crate::client::{
    component::Page,
    constant::SITE_NAME,
    router::Route,
    story::{Story, STORIES},
};

#[component]
pub fn Gallery() -> Element {
    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            heading: "UI/Modal",
            class: "page--narrow",
            div {
                class: "gallery",
                for story in STORIES {
                    StoryCard { key: "{story.slug}", story }
                }
            }
        }
    }
}

#[component]
fn StoryCard(story: Story) -> Element {
    rsx! {
        Link {
            to: Route::StoryView { slug: story.slug.to_string() },
            class: "card card--link",
            div {
                class: "card__body card__body--row",
                StoryIcon { slug: story.slug }
                div {
                    h2 { class: "card__title", "{story.name}" }
                    p { class: "muted", "{story.content}" }
                }
            }
        }
    }
}

#[component]
fn StoryIcon(slug: &'static str) -> Element {
    match slug {
        "full-screen" => rsx! { Icon { width: 24, height: 24, icon: FaExpand } },
        "no-outside-close" => rsx! { Icon { width: 24, height: 24, icon: FaBan } },
        "with-title" => rsx! { Icon { width: 24, height: 24, icon: FaHeading } },
        _ => rsx! { Icon { width: 24, height: 24, icon: FaWindowMaximize } },
    }
}
