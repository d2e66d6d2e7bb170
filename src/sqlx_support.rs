//! sqlx integration
//!
//! `Nullable<T>` binds and decodes exactly like `Option<T>` on every sqlx
//! backend: an invalid wrapper is written as SQL `NULL` and a `NULL` column
//! reads back as an invalid wrapper.

use sqlx::decode::Decode;
use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::{ColumnIndex, Database, Row, Type, ValueRef};

use crate::errors::NullableError;
use crate::nullable::Nullable;

impl<T, DB> Type<DB> for Nullable<T>
where
    DB: Database,
    T: Type<DB>,
{
    fn type_info() -> DB::TypeInfo {
        T::type_info()
    }

    fn compatible(ty: &DB::TypeInfo) -> bool {
        T::compatible(ty)
    }
}

impl<'q, T, DB> Encode<'q, DB> for Nullable<T>
where
    DB: Database,
    T: Encode<'q, DB> + Type<DB>,
{
    fn encode_by_ref(
        &self,
        buf: &mut <DB as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match self.value() {
            Some(value) => value.encode_by_ref(buf),
            None => Ok(IsNull::Yes),
        }
    }

    fn produces(&self) -> Option<DB::TypeInfo> {
        match self.value() {
            Some(value) => value.produces(),
            None => Some(T::type_info()),
        }
    }

    fn size_hint(&self) -> usize {
        self.value().map_or(0, |value| value.size_hint())
    }
}

impl<'r, T, DB> Decode<'r, DB> for Nullable<T>
where
    DB: Database,
    T: Decode<'r, DB>,
{
    fn decode(value: <DB as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Ok(Nullable::null());
        }
        T::decode(value).map(Nullable::new)
    }
}

/// Read a column from any sqlx row as a `Nullable<T>`.
///
/// A `NULL` column gives an invalid wrapper; a missing column or a type
/// mismatch gives `NullableError::Database`.
pub fn try_decode_column<'r, R, I, T>(row: &'r R, index: I) -> Result<Nullable<T>, NullableError>
where
    R: Row,
    I: ColumnIndex<R>,
    T: Decode<'r, R::Database> + Type<R::Database>,
{
    match row.try_get::<Nullable<T>, I>(index) {
        Ok(value) => Ok(value),
        Err(e) => {
            debug_log!(
                "failed to decode {} column: {}",
                std::any::type_name::<T>(),
                e
            );
            Err(e.into())
        }
    }
}
