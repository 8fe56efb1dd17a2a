/// Macros for timestamped browser console logging.
/// These wrap gloo_console and format eagerly so only strings cross into JS.
#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        $crate::__macro_support::gloo_console::info!(format!("[{}] {}", $crate::__macro_support::js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__macro_support::gloo_console::info!(format!("[{}] {}", $crate::__macro_support::js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        $crate::__macro_support::gloo_console::warn!(format!("[{}] {}", $crate::__macro_support::js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__macro_support::gloo_console::warn!(format!("[{}] {}", $crate::__macro_support::js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        $crate::__macro_support::gloo_console::error!(format!("[{}] {}", $crate::__macro_support::js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__macro_support::gloo_console::error!(format!("[{}] {}", $crate::__macro_support::js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        $crate::__macro_support::gloo_console::debug!(format!("[{}] {}", $crate::__macro_support::js_sys::Date::now(), $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__macro_support::gloo_console::debug!(format!("[{}] {}", $crate::__macro_support::js_sys::Date::now(), format!($fmt, $($arg)*)))
    };
}
