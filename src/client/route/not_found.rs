use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Not Found | {SITE_NAME}" }
        Page {
            class: "page--centered",
            p { class: "page__heading", "Nothing at /{path}" }
            Link {
                to: Route::Gallery {},
                class: "button",
                "Back to stories"
            }
        }
    }
}
