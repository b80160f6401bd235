/// Timestamped browser console logging.
/// Wraps gloo_console and format eagerly so only strings cross into JS.
///
/// Calls into JS and must only be used from code running in the browser,
/// such as event handlers.
#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        gloo_console::info!(format!("[{}] {}", js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}
