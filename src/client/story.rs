//! Catalog of modal stories shown by the gallery.

use pulldown_cmark::{html, Options, Parser};

use crate::model::modal::ModalConfig;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Story {
    /// Path segment under `/story/`.
    pub slug: &'static str,
    pub name: &'static str,
    /// Markdown shown above the story.
    pub description: &'static str,
    pub content: &'static str,
    pub title: Option<&'static str>,
    pub config: ModalConfig,
}

pub const STORIES: [Story; 4] = [
    Story {
        slug: "default",
        name: "Default",
        description: "A centered dialog. Clicking the backdrop or pressing **Escape** closes it.",
        content: "Default modal content",
        title: None,
        config: ModalConfig {
            full_screen: false,
            close_on_click_outside: true,
        },
    },
    Story {
        slug: "full-screen",
        name: "FullScreen",
        description: "Sets `full_screen`, which adds the `modal--full_screen` class so the \
                      dialog covers the viewport.",
        content: "Full screen modal content",
        title: None,
        config: ModalConfig {
            full_screen: true,
            close_on_click_outside: true,
        },
    },
    Story {
        slug: "no-outside-close",
        name: "NoOutsideClose",
        description: "Sets `close_on_click_outside` to false. Backdrop clicks are ignored; \
                      **Escape** still closes the dialog.",
        content: "Modal that cannot be closed by clicking outside",
        title: None,
        config: ModalConfig {
            full_screen: false,
            close_on_click_outside: false,
        },
    },
    Story {
        slug: "with-title",
        name: "WithTitle",
        description: "Fills the `title` slot, rendered as an `h2` heading above the body.",
        content: "Modal content with title slot",
        title: Some("Modal Title"),
        config: ModalConfig {
            full_screen: false,
            close_on_click_outside: true,
        },
    },
];

pub fn find_story(slug: &str) -> Option<&'static Story> {
    STORIES.iter().find(|story| story.slug == slug)
}

/// Renders a story description to HTML.
pub fn render_description(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        for (i, story) in STORIES.iter().enumerate() {
            assert!(STORIES[i + 1..].iter().all(|other| other.slug != story.slug));
        }
    }

    #[test]
    fn finds_story_by_slug() {
        let story = find_story("with-title").unwrap();
        assert_eq!(story.name, "WithTitle");
        assert_eq!(story.title, Some("Modal Title"));
        assert!(find_story("missing").is_none());
    }

    #[test]
    fn only_full_screen_story_sets_full_screen() {
        for story in STORIES {
            assert_eq!(story.config.full_screen, story.slug == "full-screen");
        }
    }

    #[test]
    fn only_no_outside_close_story_disables_backdrop_close() {
        let disabled: Vec<_> = STORIES
            .iter()
            .filter(|story| !story.config.close_on_click_outside)
            .map(|story| story.name)
            .collect();
        assert_eq!(disabled, ["NoOutsideClose"]);
    }

    #[test]
    fn renders_markdown_description() {
        let html = render_description("Sets `full_screen` to **true**.");
        assert_eq!(
            html,
            "<p>Sets <code>full_screen</code> to <strong>true</strong>.</p>\n"
        );
    }
}
