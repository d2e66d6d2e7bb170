//! Conversions between plain values, references and `Nullable<T>`
//!
//! Every function here is total: absence going in maps to absence coming
//! out, presence to presence. `from` and `from_option` never dereference;
//! `from_ptr` and `ptr_or_none` always dereference exactly one level.

use crate::nullable::Nullable;

/// Wrap a plain value. Zero values such as `0` or `""` are valid.
pub fn from<T>(value: T) -> Nullable<T> {
    Nullable::new(value)
}

/// Wrap a value that may be absent.
///
/// `None` (an untyped absence or a null reference) gives an invalid wrapper.
/// `Some(p)` stores `p` as-is, so a reference or `Box` is kept rather than
/// followed.
pub fn from_option<T>(value: Option<T>) -> Nullable<T> {
    match value {
        Some(v) => Nullable::new(v),
        None => {
            trace_log!(
                "absent {} mapped to invalid Nullable",
                std::any::type_name::<T>()
            );
            Nullable::null()
        }
    }
}

/// Wrap a copy of the referenced value, or an invalid wrapper for `None`
pub fn from_ptr<T: Clone>(ptr: Option<&T>) -> Nullable<T> {
    from_option(ptr.cloned())
}

/// Boxed equivalent of [`from`]
pub fn ptr<T>(value: T) -> Box<Nullable<T>> {
    Box::new(from(value))
}

/// Boxed equivalent of [`from_option`]. The handle is always present, even
/// when the wrapper inside it is invalid.
pub fn ptr_from_option<T>(value: Option<T>) -> Box<Nullable<T>> {
    Box::new(from_option(value))
}

/// Boxed wrapper around a copy of the referenced value.
///
/// Unlike [`ptr_from_option`], a `None` input produces no wrapper at all.
pub fn ptr_or_none<T: Clone>(value: Option<&T>) -> Option<Box<Nullable<T>>> {
    if value.is_none() {
        trace_log!(
            "absent {} reference, no Nullable handle created",
            std::any::type_name::<T>()
        );
    }
    value.map(|v| ptr(v.clone()))
}

/// Move the contained value into its own allocation, or `None` when invalid
pub fn value_ptr_or_none<T>(nullable: Nullable<T>) -> Option<Box<T>> {
    nullable.into_option().map(Box::new)
}
