//! Console logging
//!
//! On wasm32 messages go to the host page's `console.log`.
//! Everywhere else they go to stderr so native tests and tools still see them.
//!
//! Usage:
//! ```rust
//! use blockstep_engine::console_log;
//!
//! let obstacles = 33;
//! console_log!("level loaded: {} obstacles", obstacles);
//! ```

/// Formats like `format!` and writes one line to the console.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($arg)*)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            eprintln!($($arg)*);
        }
    }};
}

/// Same as [`console_log!`] but routed to `console.warn`.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::warn_1(&::wasm_bindgen::JsValue::from_str(&format!($($arg)*)));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            eprintln!("warning: {}", format!($($arg)*));
        }
    }};
}
