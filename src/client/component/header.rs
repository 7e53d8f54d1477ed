use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME,
    router::Route,
    story::STORIES,
};

#[component]
pub fn Header() -> Element {
    rsx!(div {
        class: "header",
        div {
            class: "header__brand",
            Link {
                to: Route::Gallery {},
                p {
                    class: "header__title",
                    {SITE_NAME}
                }
            }
        }
        nav {
            class: "header__nav",
            for story in STORIES {
                Link {
                    key: "{story.slug}",
                    to: Route::StoryView { slug: story.slug.to_string() },
                    class: "button button--ghost",
                    "{story.name}"
                }
            }
        }
    })
}
