//! Grepable error codes shared by every error enum in the crate.

/// Map an error variant to a stable `E_*` code for logs and host UIs.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}
