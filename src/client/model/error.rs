use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ModalError {
    /// A modal context accessor was called outside of a `Modal` subtree.
    #[error("use_modal_context must be used within a Modal")]
    MissingContext,

    /// The transition duration CSS variable held something unusable.
    #[error("invalid transition duration `{0}`")]
    InvalidDuration(String),
}
