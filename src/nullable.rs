//! Nullable value wrapper
//!
//! This module provides the `Nullable<T>` type used to carry an optional
//! column value between application code and the database layer.

use std::fmt::{self, Display};

use crate::errors::NullableError;

/// A column value that may be SQL `NULL`.
///
/// An invalid wrapper holds no value at all; a valid one holds a `T`, which may
/// itself be a reference, a smart pointer or a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nullable<T> {
    value: Option<T>,
}

impl<T> Nullable<T> {
    /// Create a valid wrapper holding `value`
    pub const fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Create an invalid wrapper
    pub const fn null() -> Self {
        Self { value: None }
    }

    /// Whether the wrapper holds a meaningful value
    pub const fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    pub const fn is_null(&self) -> bool {
        self.value.is_none()
    }

    /// Borrow the contained value, if valid
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// The contained value, or `T::default()` when invalid
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value.unwrap_or_default()
    }

    pub fn as_ref(&self) -> Nullable<&T> {
        Nullable {
            value: self.value.as_ref(),
        }
    }

    /// Apply `f` to the contained value, keeping invalid wrappers invalid
    pub fn map<U, F>(self, f: F) -> Nullable<U>
    where
        F: FnOnce(T) -> U,
    {
        Nullable {
            value: self.value.map(f),
        }
    }

    /// Take the value out, leaving an invalid wrapper in its place
    pub fn take(&mut self) -> Nullable<T> {
        Nullable {
            value: self.value.take(),
        }
    }

    /// Extract the contained value, failing on an invalid wrapper
    pub fn try_into_value(self) -> Result<T, NullableError> {
        self.value.ok_or(NullableError::Null {
            type_name: std::any::type_name::<T>(),
        })
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(nullable: Nullable<T>) -> Self {
        nullable.value
    }
}

impl<T: Display> Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("NULL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_invalid() {
        // No Default bound on T is needed for an invalid wrapper
        struct NoDefault;
        let n: Nullable<NoDefault> = Nullable::default();
        assert!(!n.is_valid());
        assert!(n.is_null());
    }

    #[test]
    fn test_equality() {
        assert_eq!(Nullable::<i32>::null(), Nullable::null());
        assert_eq!(Nullable::new(7), Nullable::new(7));
        assert_ne!(Nullable::new(7), Nullable::new(8));
        assert_ne!(Nullable::new(0), Nullable::null());
        assert_eq!(
            Nullable::new(vec![vec![1, 2], vec![3]]),
            Nullable::new(vec![vec![1, 2], vec![3]])
        );
    }

    #[test]
    fn test_value_or_default() {
        assert_eq!(Nullable::new(5).value_or_default(), 5);
        assert_eq!(Nullable::<i32>::null().value_or_default(), 0);
        assert_eq!(Nullable::<String>::null().value_or_default(), "");
    }

    #[test]
    fn test_map_and_take() {
        let n = Nullable::new(21).map(|v| v * 2);
        assert_eq!(n.value(), Some(&42));
        assert!(Nullable::<i32>::null().map(|v| v * 2).is_null());

        let mut n = Nullable::new("taken".to_string());
        let taken = n.take();
        assert!(n.is_null());
        assert_eq!(taken.into_option().as_deref(), Some("taken"));
    }

    #[test]
    fn test_value_mut() {
        let mut n = Nullable::new(1);
        if let Some(v) = n.value_mut() {
            *v += 1;
        }
        assert_eq!(n, Nullable::new(2));
    }

    #[test]
    fn test_try_into_value() {
        assert_eq!(Nullable::new(3u8).try_into_value().ok(), Some(3));

        let err = Nullable::<u8>::null().try_into_value().unwrap_err();
        assert!(matches!(err, NullableError::Null { type_name: "u8" }));
        assert_eq!(err.to_string(), "Null value for type u8");
    }

    #[test]
    fn test_option_bridging() {
        let n: Nullable<&str> = Some("x").into();
        assert_eq!(n, Nullable::new("x"));
        let o: Option<&str> = Nullable::<&str>::null().into();
        assert_eq!(o, None);
        assert_eq!(Nullable::new(1).as_ref(), Nullable::new(&1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Nullable::new(42).to_string(), "42");
        assert_eq!(Nullable::<i32>::null().to_string(), "NULL");
    }
}
