//! crates/logging/src/thread_local.rs
//! Per-thread verbosity and a bounded buffer of recent diagnostics.

use super::config::VerbosityConfig;
use super::levels::{DebugFlag, InfoFlag};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Most diagnostics kept per thread; older ones are discarded first.
///
/// Callers that only forward diagnostics to `tracing` never need to drain
/// the buffer, since it cannot grow past this bound.
pub const EVENT_CAPACITY: usize = 1024;

/// Diagnostic recorded by [`debug_log!`](crate::debug_log) or
/// [`info_log!`](crate::info_log).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// Emitted under an [`InfoFlag`].
    Info {
        /// Category of the message.
        flag: InfoFlag,
        /// Level the message was emitted at.
        level: u8,
        /// Rendered text.
        message: String,
    },
    /// Emitted under a [`DebugFlag`].
    Debug {
        /// Category of the message.
        flag: DebugFlag,
        /// Level the message was emitted at.
        level: u8,
        /// Rendered text.
        message: String,
    },
}

impl DiagnosticEvent {
    /// Rendered text of the event.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Info { message, .. } | Self::Debug { message, .. } => message,
        }
    }

    /// Level the event was emitted at.
    #[must_use]
    pub const fn level(&self) -> u8 {
        match self {
            Self::Info { level, .. } | Self::Debug { level, .. } => *level,
        }
    }
}

#[derive(Default)]
struct ThreadDiagnostics {
    config: VerbosityConfig,
    events: VecDeque<DiagnosticEvent>,
}

impl ThreadDiagnostics {
    fn record(&mut self, event: DiagnosticEvent) {
        if self.events.len() == EVENT_CAPACITY {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

thread_local! {
    static DIAGNOSTICS: RefCell<ThreadDiagnostics> = RefCell::new(ThreadDiagnostics::default());
}

fn with_diagnostics<R>(f: impl FnOnce(&mut ThreadDiagnostics) -> R) -> R {
    DIAGNOSTICS.with(|cell| f(&mut cell.borrow_mut()))
}

/// Installs `config` for the current thread.
pub fn init(config: VerbosityConfig) {
    with_diagnostics(|state| state.config = config);
}

/// The current thread's configuration.
pub fn current() -> VerbosityConfig {
    with_diagnostics(|state| state.config.clone())
}

/// Whether `flag` is enabled at `level` or above.
pub fn info_gte(flag: InfoFlag, level: u8) -> bool {
    with_diagnostics(|state| state.config.info.get(flag) >= level)
}

/// Whether `flag` is enabled at `level` or above.
pub fn debug_gte(flag: DebugFlag, level: u8) -> bool {
    with_diagnostics(|state| state.config.debug.get(flag) >= level)
}

/// Records an info diagnostic.
pub fn emit_info(flag: InfoFlag, level: u8, message: String) {
    with_diagnostics(|state| {
        state.record(DiagnosticEvent::Info {
            flag,
            level,
            message,
        });
    });
}

/// Records a debug diagnostic.
pub fn emit_debug(flag: DebugFlag, level: u8, message: String) {
    with_diagnostics(|state| {
        state.record(DiagnosticEvent::Debug {
            flag,
            level,
            message,
        });
    });
}

/// Takes the buffered diagnostics, oldest first.
pub fn drain_events() -> Vec<DiagnosticEvent> {
    with_diagnostics(|state| state.events.drain(..).collect())
}

/// Discards the buffered diagnostics.
pub fn clear_events() {
    with_diagnostics(|state| state.events.clear());
}

/// Parses an `--info` token into the current thread's configuration.
pub fn apply_info_flag(token: &str) -> Result<(), String> {
    with_diagnostics(|state| state.config.apply_info_flag(token))
}

/// Parses a `--debug` token into the current thread's configuration.
pub fn apply_debug_flag(token: &str) -> Result<(), String> {
    with_diagnostics(|state| state.config.apply_debug_flag(token))
}
