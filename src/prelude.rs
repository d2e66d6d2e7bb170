//! Convenience re-exports for common sqlnull usage
//!
//! # Example
//!
//! ```rust
//! use sqlnull::prelude::*;
//!
//! let n: Nullable<i32> = Nullable::null();
//! assert!(n.try_into_value().is_err());
//! assert_eq!(from(7).try_into_value().ok(), Some(7));
//! ```

pub use crate::convert::{
    from, from_option, from_ptr, ptr, ptr_from_option, ptr_or_none, value_ptr_or_none,
};
pub use crate::errors::NullableError;
pub use crate::nullable::Nullable;
pub use crate::sqlx_support::try_decode_column;

// Commonly used sqlx types
pub use sqlx::{Decode, Encode, Row, Type};
