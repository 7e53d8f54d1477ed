//! Tests that mount the real `Modal` under a controlling parent.

use std::{cell::RefCell, time::Duration};

use dioxus::{core::NoOpMutations, prelude::*};

use super::{use_modal_context, Modal, ModalContext};
use crate::model::modal::ModalEvent;

thread_local! {
    static EVENTS: RefCell<Vec<ModalEvent>> = const { RefCell::new(Vec::new()) };
    static OPEN: RefCell<Option<Signal<bool>>> = const { RefCell::new(None) };
    static CONTEXT: RefCell<Option<ModalContext>> = const { RefCell::new(None) };
}

/// Longer than the 0.3 s default transition.
const PAST_TRANSITION: Duration = Duration::from_millis(450);

fn record(event: ModalEvent) {
    EVENTS.with(|events| events.borrow_mut().push(event));
}

fn take_events() -> Vec<ModalEvent> {
    EVENTS.with(|events| std::mem::take(&mut *events.borrow_mut()))
}

#[component]
fn Parent(initially_open: bool) -> Element {
    let mut is_open = use_signal(|| initially_open);
    OPEN.with(|open| *open.borrow_mut() = Some(is_open));

    rsx! {
        Modal {
            model_value: is_open(),
            on_update_model_value: move |value: bool| {
                record(ModalEvent::UpdateModelValue(value));
                is_open.set(value);
            },
            on_close: move |_: ()| record(ModalEvent::Close),
            on_transition_end: move |_: ()| record(ModalEvent::TransitionEnd),
            section {
                div { DeepChild {} }
            }
        }
    }
}

#[component]
fn DeepChild() -> Element {
    let context = use_modal_context();
    CONTEXT.with(|cell| *cell.borrow_mut() = Some(context));
    rsx! { p { "Child" } }
}

fn mount(initially_open: bool) -> VirtualDom {
    take_events();
    let mut dom = VirtualDom::new_with_props(Parent, ParentProps { initially_open });
    dom.rebuild_in_place();
    dom
}

/// Runs queued effects, tasks and re-renders until nothing is left to do.
async fn settle(dom: &mut VirtualDom) {
    for _ in 0..50 {
        let work = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        if work.is_err() {
            break;
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}

fn set_open(dom: &VirtualDom, value: bool) {
    dom.in_runtime(|| {
        if let Some(mut open) = OPEN.with(|open| *open.borrow()) {
            open.set(value);
        }
    });
}

fn close_from_child(dom: &VirtualDom) {
    let context = CONTEXT.with(|cell| *cell.borrow()).expect("child mounted");
    dom.in_runtime(|| context.close());
}

fn has_dialog(dom: &VirtualDom) -> bool {
    dioxus_ssr::render(dom).contains("<dialog")
}

/// Tests closing through the context from a nested descendant.
///
/// Expected: `close` then `update:modelValue(false)`, the dialog stays for the
/// transition, then `transitionEnd` fires once and the dialog is gone
#[tokio::test]
async fn test_context_close_emits_and_removes_after_transition() {
    let mut dom = mount(true);
    settle(&mut dom).await;
    assert!(has_dialog(&dom));

    close_from_child(&dom);
    settle(&mut dom).await;

    assert_eq!(
        take_events(),
        vec![ModalEvent::Close, ModalEvent::UpdateModelValue(false)]
    );
    assert!(has_dialog(&dom));

    tokio::time::sleep(PAST_TRANSITION).await;
    settle(&mut dom).await;

    assert_eq!(take_events(), vec![ModalEvent::TransitionEnd]);
    assert!(!has_dialog(&dom));
}

/// Tests the parent switching the flag off directly.
///
/// Expected: no close request is emitted, the dialog stays until the timer,
/// then exactly one `transitionEnd`
#[tokio::test]
async fn test_parent_close_keeps_dialog_until_transition_end() {
    let mut dom = mount(true);
    settle(&mut dom).await;

    set_open(&dom, false);
    settle(&mut dom).await;

    assert!(has_dialog(&dom));
    assert!(take_events().is_empty());

    tokio::time::sleep(PAST_TRANSITION).await;
    settle(&mut dom).await;

    assert!(!has_dialog(&dom));
    assert_eq!(take_events(), vec![ModalEvent::TransitionEnd]);
}

/// Tests re-opening while the exit transition is still running.
///
/// Expected: the pending removal is dropped, the dialog stays and no
/// `transitionEnd` fires
#[tokio::test]
async fn test_reopen_during_transition_keeps_dialog() {
    let mut dom = mount(true);
    settle(&mut dom).await;

    set_open(&dom, false);
    settle(&mut dom).await;
    set_open(&dom, true);
    settle(&mut dom).await;

    tokio::time::sleep(PAST_TRANSITION).await;
    settle(&mut dom).await;

    assert!(has_dialog(&dom));
    assert!(take_events().is_empty());
}

/// Tests opening a modal that was mounted closed.
///
/// Expected: no dialog before, dialog after, no events
#[tokio::test]
async fn test_open_after_mount_closed() {
    let mut dom = mount(false);
    settle(&mut dom).await;
    assert!(!has_dialog(&dom));

    set_open(&dom, true);
    settle(&mut dom).await;

    assert!(has_dialog(&dom));
    assert!(take_events().is_empty());
}
