use dioxus::prelude::*;

/// Padded page body below the fixed header, with an optional heading.
#[component]
pub fn Page(
    heading: Option<String>,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "page {class}",
            if let Some(heading) = heading {
                h1 {
                    class: "page__heading",
                    "{heading}"
                }
            }
            {children}
        }
    )
}
