use dioxus::prelude::*;

use crate::client::model::error::ModalError;

/// Capabilities a [`Modal`](super::Modal) hands to everything rendered inside it.
#[derive(Clone, Copy, PartialEq)]
pub struct ModalContext {
    close: Callback<()>,
}

impl ModalContext {
    /// Runs the modal's close path, same as a backdrop click.
    pub fn close(&self) {
        self.close.call(());
    }
}

/// Provides a [`ModalContext`] to the current component's descendants.
///
/// This is a hook: call it once, unconditionally, in the modal's body.
pub fn create_modal_context(close: Callback<()>) -> ModalContext {
    use_context_provider(|| ModalContext { close })
}

pub fn try_use_modal_context() -> Result<ModalContext, ModalError> {
    try_use_context::<ModalContext>().ok_or(ModalError::MissingContext)
}

/// Returns the context of the enclosing modal.
///
/// # Panics
/// When called outside of a `Modal` subtree.
pub fn use_modal_context() -> ModalContext {
    match try_use_modal_context() {
        Ok(context) => context,
        Err(err) => panic!("{}", err),
    }
}
