//! Logging utilities for chatgpt-client
//!
//! Re-exports tracing macros with log_* naming convention for consistency.
//! The library only emits debug/trace diagnostics; it never installs a subscriber.

pub use tracing::{debug as log_debug, trace as log_trace};
