use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Gallery, NotFound, StoryView};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Gallery {},

    #[route("/story/:slug")]
    StoryView { slug: String },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
