use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route};

const GALLERY_CSS: Asset = asset!("/assets/gallery.css");
const MODAL_CSS: Asset = asset!("/assets/modal.css");

#[component]
pub fn App() -> Element {
    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Stories for the controlled dialog component"
        }
        document::Link { rel: "stylesheet", href: GALLERY_CSS }
        document::Link { rel: "stylesheet", href: MODAL_CSS }
        Router::<Route> {}
    }
}
