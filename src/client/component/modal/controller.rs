//! State machine behind the [`Modal`](super::Modal) component.
//!
//! The controller never touches the DOM. Every input (a new `model_value`, a
//! backdrop click, a native cancel, a context close, an elapsed removal timer,
//! unmount) is turned into a list of [`ModalEffect`]s which the component then
//! executes in order.

use crate::model::modal::ModalEvent;

/// Side effect requested by the controller.
#[derive(Clone, Debug, PartialEq)]
pub enum ModalEffect {
    /// Call `showModal()` on the native dialog.
    ShowModal,
    /// Call `close()` on the native dialog.
    CloseNative,
    /// Start the removal timer tagged with `generation`.
    ScheduleRemoval { generation: u64 },
    /// Cancel a pending removal timer.
    CancelRemoval,
    /// Fire one of the component's event callbacks.
    Emit(ModalEvent),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalController {
    /// Last `model_value` seen from the parent.
    open: bool,
    /// Surface kept in the tree while the exit transition plays.
    closing: bool,
    /// Whether the native dialog is currently shown as modal.
    native_open: bool,
    /// Identifies the current removal timer.
    generation: u64,
}

impl ModalController {
    pub fn new(model_value: bool) -> Self {
        Self {
            open: model_value,
            closing: false,
            native_open: false,
            generation: 0,
        }
    }

    /// Whether the dialog surface belongs in the rendered tree.
    pub fn is_rendered(&self) -> bool {
        self.open || self.closing
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// Effects to run once the surface is first mounted.
    pub fn mount(&mut self) -> Vec<ModalEffect> {
        if self.open && !self.native_open {
            self.native_open = true;
            vec![ModalEffect::ShowModal]
        } else {
            Vec::new()
        }
    }

    /// Reconciles the controller with the parent's flag.
    pub fn set_model_value(&mut self, model_value: bool) -> Vec<ModalEffect> {
        if model_value == self.open {
            return Vec::new();
        }

        self.open = model_value;
        self.generation += 1;

        let mut effects = Vec::new();
        if model_value {
            if self.closing {
                self.closing = false;
                effects.push(ModalEffect::CancelRemoval);
            }
            if !self.native_open {
                self.native_open = true;
                effects.push(ModalEffect::ShowModal);
            }
        } else {
            if self.native_open {
                self.native_open = false;
                effects.push(ModalEffect::CloseNative);
            }
            self.closing = true;
            effects.push(ModalEffect::ScheduleRemoval {
                generation: self.generation,
            });
        }
        effects
    }

    /// The single close path shared by backdrop clicks, native cancel and the
    /// descendant context.
    pub fn request_close(&mut self) -> Vec<ModalEffect> {
        if !self.native_open {
            return Vec::new();
        }

        self.native_open = false;
        vec![
            ModalEffect::CloseNative,
            ModalEffect::Emit(ModalEvent::Close),
            ModalEffect::Emit(ModalEvent::UpdateModelValue(false)),
        ]
    }

    /// A click whose target is the dialog element itself.
    pub fn backdrop_click(&mut self, close_on_click_outside: bool) -> Vec<ModalEffect> {
        if close_on_click_outside {
            self.request_close()
        } else {
            Vec::new()
        }
    }

    /// The platform asked the dialog to close (Escape key and friends).
    pub fn native_cancel(&mut self) -> Vec<ModalEffect> {
        self.request_close()
    }

    /// The native dialog closed by itself, e.g. through a `method="dialog"`
    /// form. Emits like any other close unless the close came from us.
    pub fn native_close(&mut self) -> Vec<ModalEffect> {
        self.request_close()
    }

    /// Called when the removal timer tagged `generation` fires.
    pub fn removal_elapsed(&mut self, generation: u64) -> Vec<ModalEffect> {
        if generation != self.generation || !self.closing {
            return Vec::new();
        }

        self.closing = false;
        vec![ModalEffect::Emit(ModalEvent::TransitionEnd)]
    }

    pub fn unmount(&mut self) -> Vec<ModalEffect> {
        if self.closing {
            self.closing = false;
            self.generation += 1;
            vec![ModalEffect::CancelRemoval]
        } else {
            Vec::new()
        }
    }
}
