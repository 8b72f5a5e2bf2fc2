use web_sys::window;

/// Native blocking confirmation dialog. Falls back to "no" when the
/// window object is unavailable.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
