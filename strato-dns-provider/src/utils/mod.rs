//! Utility modules.

/// Log sanitization utilities to prevent session tokens and page dumps from leaking.
pub mod log_sanitizer;
