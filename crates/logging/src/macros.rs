//! crates/logging/src/macros.rs
//! `debug_log!` and `info_log!` gate diagnostics on the per-thread levels.

/// Emit a debug diagnostic when `flag` is at or above `level`.
///
/// The message is only formatted when the level check passes. With the
/// `tracing` feature the event is also forwarded to `tracing::debug!` under
/// the `treewalk` target, with the flag name in a `flag` field.
///
/// ```
/// use logging::{debug_log, drain_events, init, VerbosityConfig};
///
/// let mut config = VerbosityConfig::default();
/// config.debug.dir = 1;
/// init(config);
/// drain_events();
///
/// debug_log!(Dir, 1, "entering {}", "/tmp");
/// debug_log!(Dir, 2, "suppressed");
///
/// let events = drain_events();
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].message(), "entering /tmp");
/// ```
#[macro_export]
macro_rules! debug_log {
    ($flag:ident, $level:expr, $($arg:tt)+) => {{
        let flag = $crate::DebugFlag::$flag;
        let level: u8 = $level;
        if $crate::debug_gte(flag, level) {
            let message = ::std::format!($($arg)+);
            $crate::__forward_debug!(flag, &message);
            $crate::emit_debug(flag, level, message);
        }
    }};
}

/// Emit an info diagnostic when `flag` is at or above `level`.
#[macro_export]
macro_rules! info_log {
    ($flag:ident, $level:expr, $($arg:tt)+) => {{
        let flag = $crate::InfoFlag::$flag;
        let level: u8 = $level;
        if $crate::info_gte(flag, level) {
            let message = ::std::format!($($arg)+);
            $crate::__forward_info!(flag, &message);
            $crate::emit_info(flag, level, message);
        }
    }};
}

#[cfg(feature = "tracing")]
#[doc(hidden)]
#[macro_export]
macro_rules! __forward_debug {
    ($flag:expr, $message:expr) => {
        $crate::__tracing::debug!(target: "treewalk", flag = $flag.name(), "{}", $message)
    };
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __forward_debug {
    ($flag:expr, $message:expr) => {{
        let _ = (&$flag, $message);
    }};
}

#[cfg(feature = "tracing")]
#[doc(hidden)]
#[macro_export]
macro_rules! __forward_info {
    ($flag:expr, $message:expr) => {
        $crate::__tracing::info!(target: "treewalk", flag = $flag.name(), "{}", $message)
    };
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __forward_info {
    ($flag:expr, $message:expr) => {{
        let _ = (&$flag, $message);
    }};
}
