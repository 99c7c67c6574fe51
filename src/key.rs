/*
Copyright (c) 2023 Michał Margos

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and
associated documentation files (the “Software”), to deal in the Software without restriction,
including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense,
and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do
so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial
portions of the Software.

THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS
OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY,
WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
*/

//! Integer keys and their conversion to positions.

use core::any::Any;

use crate::error::{Error, Result};

/// A primitive integer usable as a position in an [`IndexedMap`](crate::IndexedMap).
///
/// Keys are accepted in any integer width so that negative and oversized
/// values reach the map intact. Lookups treat such keys as absent while
/// writes reject them.
pub trait Key: Copy {
    /// Converts the key to a position.
    ///
    /// # Errors
    ///
    /// [`Error::NegativeKey`] if the key is below zero and
    /// [`Error::KeyOverflow`] if it does not fit in `usize`.
    fn to_index(self) -> Result<usize>;
}

macro_rules! signed_key {
    ($($t:ty),* $(,)?) => {$(
        impl Key for $t {
            #[inline]
            fn to_index(self) -> Result<usize> {
                if self < 0 {
                    return Err(Error::NegativeKey);
                }
                usize::try_from(self).map_err(|_| Error::KeyOverflow)
            }
        }
    )*};
}

macro_rules! unsigned_key {
    ($($t:ty),* $(,)?) => {$(
        impl Key for $t {
            #[inline]
            fn to_index(self) -> Result<usize> {
                usize::try_from(self).map_err(|_| Error::KeyOverflow)
            }
        }
    )*};
}

signed_key!(i8, i16, i32, i64, i128, isize);
unsigned_key!(u8, u16, u32, u64, u128, usize);

/// Recovers an integer key from a dynamically-typed one.
///
/// Every primitive integer is widened to `i128`. A `u128` above `i128::MAX`
/// saturates, which still lies outside any addressable range.
pub(crate) fn from_any(key: Option<&dyn Any>) -> Result<i128> {
    let key = key.ok_or(Error::NullKey)?;

    macro_rules! widen {
        ($($t:ty),*) => {$(
            if let Some(&k) = key.downcast_ref::<$t>() {
                return Ok(k as i128);
            }
        )*};
    }

    widen!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

    if let Some(&k) = key.downcast_ref::<u128>() {
        return Ok(i128::try_from(k).unwrap_or(i128::MAX));
    }

    Err(Error::InvalidKeyType)
}
