//! Confirmation Dialog

/// Blocking yes/no prompt. An unavailable dialog counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
