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

//! Errors raised by malformed keys and misuse of the views.
//!
//! A key that is simply not present is never an error; lookups report it as
//! `None`.

use thiserror::Error;

/// The error type for fallible [`IndexedMap`](crate::IndexedMap) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// No backing sequence was supplied at construction.
    #[error("backing sequence must not be null")]
    NullSequence,

    /// A dynamically-typed key was absent.
    #[error("key must not be null")]
    NullKey,

    /// A dynamically-typed key was not a primitive integer.
    #[error("key must be an integer")]
    InvalidKeyType,

    /// A write was attempted at a negative position.
    #[error("key must be a non-negative integer")]
    NegativeKey,

    /// A non-negative key does not fit in `usize`.
    #[error("key does not fit in the address space")]
    KeyOverflow,

    /// An entry cursor was advanced past its end.
    #[error("no more elements")]
    NoMoreElements,
}

/// A specialized [`Result`](core::result::Result) for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
