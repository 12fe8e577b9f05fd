use web_sys::window;

/// Blocking yes/no prompt. Without a window (or if the prompt fails) the
/// answer is "no".
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
