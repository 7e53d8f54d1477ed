pub mod header;
pub mod layout;
pub mod modal;
pub mod page;

pub use header::Header;
pub use layout::Layout;
pub use modal::{use_modal_context, Modal};
pub use page::Page;
