use dioxus::prelude::*;

use crate::client::{component::Header, router::Route};

/// Navigation header above the routed story content.
#[component]
pub fn Layout() -> Element {
    rsx!(div {
        class: "layout",
        Header {}
        main {
            Outlet::<Route> {}
        }
    })
}
