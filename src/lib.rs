//! # sqlnull
//!
//! Conversions between plain values, references and [`Nullable<T>`], a
//! column value that may be SQL `NULL`.
//!
//! ## Quick Start
//!
//! ```rust
//! let id = sqlnull::from(42);
//! assert!(id.is_valid());
//!
//! let missing: Option<&String> = None;
//! assert!(sqlnull::from_ptr(missing).is_null());
//! assert!(sqlnull::ptr_or_none(missing).is_none());
//!
//! let name = sqlnull::from_ptr(Some(&"ada".to_string()));
//! assert_eq!(sqlnull::value_ptr_or_none(name).as_deref().map(String::as_str), Some("ada"));
//! ```
//!
//! `Nullable<T>` implements sqlx's `Type`, `Encode` and `Decode`, so it can be
//! bound to queries and fetched from rows like `Option<T>`.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod convert;
pub mod errors;
pub mod nullable;
pub mod prelude;
#[cfg(feature = "serde")]
pub mod serde_support;
pub mod sqlx_support;

pub use convert::{
    from, from_option, from_ptr, ptr, ptr_from_option, ptr_or_none, value_ptr_or_none,
};
pub use errors::NullableError;
pub use nullable::Nullable;
pub use sqlx_support::try_decode_column;

// Re-export external dependencies used in public API
pub use sqlx;
