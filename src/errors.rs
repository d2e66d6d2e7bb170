//! Error types for the sqlnull crate
//!
//! The conversion functions never fail; these errors only come from
//! extracting a value out of a `Nullable<T>` or reading one from a row.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NullableError {
    #[error("Null value for type {type_name}")]
    Null { type_name: &'static str },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
