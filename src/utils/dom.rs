//! Browser API helpers: clock and console logging.

/// Current calendar year according to the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Log an error to the browser console.
pub fn error(message: &str) {
    web_sys::console::error_1(&message.into());
}
