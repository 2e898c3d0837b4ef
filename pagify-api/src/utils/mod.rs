//! Utility modules.

/// Log sanitization utilities to prevent tokens and large bodies from leaking into logs.
pub mod log_sanitizer;
