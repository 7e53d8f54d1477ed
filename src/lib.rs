//! Controlled modal dialog component for Dioxus, with a descendant close
//! context and a story gallery.

pub mod client;
pub mod model;

pub use client::component::modal::{
    create_modal_context, try_use_modal_context, use_modal_context, Modal, ModalContext,
};
pub use model::modal::{ModalConfig, ModalEvent};
