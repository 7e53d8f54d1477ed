pub mod context;
pub mod controller;
pub mod dialog;

#[cfg(test)]
mod test;

use dioxus::{core::Task, prelude::*};
use dioxus_logger::tracing;

use crate::model::modal::ModalEvent;

pub use context::{create_modal_context, try_use_modal_context, use_modal_context, ModalContext};
pub use controller::{ModalController, ModalEffect};

/// Class list of the dialog surface.
pub fn surface_class(full_screen: bool) -> &'static str {
    if full_screen {
        "modal modal--full_screen"
    } else {
        "modal"
    }
}

/// Controlled modal built on the native `<dialog>` element.
///
/// The parent owns `model_value`. The modal never changes it and instead asks
/// for `false` through `on_update_model_value` whenever the user closes it.
/// After `model_value` turns false the surface stays mounted for the CSS
/// transition duration, then `on_transition_end` fires.
#[component]
pub fn Modal(
    model_value: bool,
    #[props(default)] full_screen: bool,
    #[props(default = true)] close_on_click_outside: bool,
    on_update_model_value: Option<EventHandler<bool>>,
    on_close: Option<EventHandler<()>>,
    on_transition_end: Option<EventHandler<()>>,
    title: Option<Element>,
    children: Element,
) -> Element {
    let controller = use_signal(|| ModalController::new(model_value));
    let removal = use_signal(|| None::<Task>);
    let dialog_id = use_signal(dialog::next_dialog_id);

    let handle = ModalHandle {
        controller,
        removal,
        dialog_id,
        on_update_model_value,
        on_close,
        on_transition_end,
    };

    let close = use_callback(move |_| handle.close());
    create_modal_context(close);

    // Show the dialog if it was mounted open
    use_effect(move || handle.mount());

    use_effect(use_reactive!(|model_value| handle.sync(model_value)));

    use_drop(move || handle.teardown());

    if !model_value && !controller.read().is_rendered() {
        return rsx! {};
    }

    rsx!(
        dialog {
            id: "{dialog_id}",
            class: surface_class(full_screen),
            oncancel: move |evt| {
                evt.prevent_default();
                handle.native_cancel();
            },
            onclose: move |_| handle.native_close(),
            onclick: move |_| handle.backdrop_click(close_on_click_outside),
            div {
                class: "modal__content",
                onclick: move |evt| evt.stop_propagation(),
                if let Some(title) = title {
                    h2 {
                        class: "modal__title",
                        {title}
                    }
                }
                {children}
            }
        }
    )
}

/// Copyable bundle of the state and callbacks the effect runner needs.
#[derive(Clone, Copy)]
struct ModalHandle {
    controller: Signal<ModalController>,
    removal: Signal<Option<Task>>,
    dialog_id: Signal<String>,
    on_update_model_value: Option<EventHandler<bool>>,
    on_close: Option<EventHandler<()>>,
    on_transition_end: Option<EventHandler<()>>,
}

impl ModalHandle {
    fn mount(mut self) {
        let effects = self.controller.write().mount();
        self.apply(effects);
    }

    fn sync(mut self, model_value: bool) {
        let effects = self.controller.write().set_model_value(model_value);
        self.apply(effects);
    }

    fn close(mut self) {
        let effects = self.controller.write().request_close();
        self.apply(effects);
    }

    fn native_cancel(mut self) {
        let effects = self.controller.write().native_cancel();
        self.apply(effects);
    }

    fn native_close(mut self) {
        let effects = self.controller.write().native_close();
        self.apply(effects);
    }

    fn backdrop_click(mut self, close_on_click_outside: bool) {
        let effects = self
            .controller
            .write()
            .backdrop_click(close_on_click_outside);
        self.apply(effects);
    }

    fn apply(self, effects: Vec<ModalEffect>) {
        for effect in effects {
            match effect {
                ModalEffect::ShowModal => {
                    let dialog_id = self.dialog_id.peek().clone();
                    tracing::debug!("Opening {}", dialog_id);
                    dialog::show_modal(&dialog_id);
                }
                ModalEffect::CloseNative => {
                    let dialog_id = self.dialog_id.peek().clone();
                    tracing::debug!("Closing {}", dialog_id);
                    dialog::close(&dialog_id);
                }
                ModalEffect::ScheduleRemoval { generation } => self.schedule_removal(generation),
                ModalEffect::CancelRemoval => self.cancel_removal(),
                ModalEffect::Emit(event) => self.emit(event),
            }
        }
    }

    fn emit(self, event: ModalEvent) {
        match event {
            ModalEvent::Close => {
                if let Some(handler) = self.on_close {
                    handler.call(());
                }
            }
            ModalEvent::UpdateModelValue(value) => {
                if let Some(handler) = self.on_update_model_value {
                    handler.call(value);
                }
            }
            ModalEvent::TransitionEnd => {
                if let Some(handler) = self.on_transition_end {
                    handler.call(());
                }
            }
        }
    }

    fn schedule_removal(mut self, generation: u64) {
        self.cancel_removal();

        let task = spawn(async move {
            let duration = dialog::transition_duration().await;
            dialog::sleep(duration).await;

            self.removal.set(None);
            let effects = self.controller.write().removal_elapsed(generation);
            self.apply(effects);
        });
        self.removal.set(Some(task));
    }

    fn cancel_removal(mut self) {
        if let Some(task) = self.removal.write().take() {
            task.cancel();
        }
    }

    /// Runs on unmount, when the scope's signals may already be gone.
    fn teardown(mut self) {
        let cancelled = self
            .controller
            .try_write()
            .map(|mut controller| controller.unmount())
            .unwrap_or_default();

        if cancelled.contains(&ModalEffect::CancelRemoval) {
            if let Ok(mut removal) = self.removal.try_write() {
                if let Some(task) = removal.take() {
                    task.cancel();
                }
            }
        }
    }
}
