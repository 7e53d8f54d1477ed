pub const SITE_NAME: &str = "Modal Kit";

/// CSS custom property holding the exit transition length in seconds.
pub const TRANSITION_DURATION_VAR: &str = "--modal-transition-duration";

/// Used when the CSS variable is missing or unparsable.
pub const DEFAULT_TRANSITION_SECS: f64 = 0.3;
