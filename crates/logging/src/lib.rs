#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the verbosity flag system used by the treewalk
//! crates. Diagnostics are grouped into info and debug categories
//! ([`InfoFlag`], [`DebugFlag`]), each carrying an independent level, in the
//! spirit of rsync's `--info=FLAG[N]` and `--debug=FLAG[N]` options.
//!
//! # Design
//!
//! - [`VerbosityConfig`] holds the per-flag levels and parses flag tokens
//!   such as `walk2` or `all`.
//! - The active configuration is stored per thread ([`init`]). The walker is
//!   single threaded, so each walk observes exactly the configuration its
//!   caller installed.
//! - [`debug_log!`] and [`info_log!`] check the level before formatting,
//!   record a [`DiagnosticEvent`] in a per-thread buffer bounded by
//!   [`EVENT_CAPACITY`] that tests can [`drain_events`], and, with
//!   the `tracing` feature, forward the message to `tracing`.
//!
//! # Examples
//!
//! ```
//! use logging::{info_log, drain_events, init, VerbosityConfig};
//!
//! init(VerbosityConfig::from_verbose_level(1));
//! drain_events();
//! info_log!(Stats, 1, "{} directories", 3);
//! assert_eq!(drain_events()[0].message(), "3 directories");
//! ```

mod config;
mod levels;
mod macros;
mod thread_local;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};
pub use thread_local::{
    DiagnosticEvent, EVENT_CAPACITY, apply_debug_flag, apply_info_flag, clear_events, current,
    debug_gte, drain_events, emit_debug, emit_info, info_gte, init,
};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{default_directive, init_tracing};

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing as __tracing;
