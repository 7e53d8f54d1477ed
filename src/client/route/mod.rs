pub mod gallery;
pub mod not_found;
pub mod story_view;

pub use gallery::Gallery;
pub use not_found::NotFound;
pub use story_view::StoryView;
