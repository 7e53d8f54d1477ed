//! Bridge to the native `<dialog>` element.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    constant::{DEFAULT_TRANSITION_SECS, TRANSITION_DURATION_VAR},
    model::error::ModalError,
};

static DIALOG_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique element id for a new dialog instance.
pub fn next_dialog_id() -> String {
    let id = DIALOG_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("modal-{}", id)
}

pub fn show_modal(dialog_id: &str) {
    document::eval(&format!(
        r#"const dialog = document.getElementById("{dialog_id}");
        if (dialog && !dialog.open) dialog.showModal();"#
    ));
}

pub fn close(dialog_id: &str) {
    document::eval(&format!(
        r#"const dialog = document.getElementById("{dialog_id}");
        if (dialog && dialog.open) dialog.close();"#
    ));
}

pub fn default_transition_duration() -> Duration {
    Duration::from_micros((DEFAULT_TRANSITION_SECS * 1_000_000.0).round() as u64)
}

/// Parses a CSS time value. Bare numbers are seconds.
pub fn parse_transition_duration(raw: &str) -> Result<Duration, ModalError> {
    let value = raw.trim();
    let invalid = || ModalError::InvalidDuration(value.to_string());

    let (number, scale) = if let Some(millis) = value.strip_suffix("ms") {
        (millis, 1_000.0)
    } else if let Some(secs) = value.strip_suffix('s') {
        (secs, 1_000_000.0)
    } else {
        (value, 1_000_000.0)
    };

    let amount: f64 = number.trim().parse().map_err(|_| invalid())?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(invalid());
    }

    Ok(Duration::from_micros((amount * scale).round() as u64))
}

/// Reads the exit transition length from the document's CSS variable.
pub async fn transition_duration() -> Duration {
    let script = format!(
        r#"return getComputedStyle(document.documentElement).getPropertyValue("{TRANSITION_DURATION_VAR}");"#
    );

    match document::eval(&script).join::<String>().await {
        Ok(raw) => parse_transition_duration(&raw).unwrap_or_else(|err| {
            tracing::warn!("{}, using default", err);
            default_transition_duration()
        }),
        Err(err) => {
            tracing::warn!("Failed to read {}: {:?}", TRANSITION_DURATION_VAR, err);
            default_transition_duration()
        }
    }
}

/// Browser timers on wasm, tokio's on native desktop and in tests.
pub async fn sleep(duration: Duration) {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    gloo_timers::future::sleep(duration).await;

    #[cfg(all(not(target_arch = "wasm32"), any(feature = "desktop", test)))]
    tokio::time::sleep(duration).await;

    #[cfg(not(any(
        all(target_arch = "wasm32", feature = "web"),
        all(not(target_arch = "wasm32"), any(feature = "desktop", test))
    )))]
    let _ = duration;
}
