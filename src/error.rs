// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for cape EEPROM generation.

/// Reasons a field can't be encoded. Any of these aborts generation of the
/// whole record; no partial image is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An ASCII field is longer than its slot in the record.
    #[error("{field} is {len} bytes long, exceeding its maximum width of {width}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        width: usize,
    },

    /// An ASCII field contains characters outside 7-bit ASCII.
    #[error("{field} must be ASCII, got {value:?}")]
    NotAscii {
        field: &'static str,
        value: String,
    },

    /// An integer field doesn't fit in 16 bits.
    #[error("{field} value {value} is outside the range 0-65535")]
    ValueOutOfRange {
        field: &'static str,
        value: u32,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
