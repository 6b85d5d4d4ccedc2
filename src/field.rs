// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Encoders for the two scalar field types in the record: fixed-width,
//! space-padded ASCII strings and big-endian 16-bit integers.

use byteorder::BigEndian;
use zerocopy::U16;

use crate::error::{Error, Result};

/// Encodes `value` into exactly `N` bytes, padding on the right with spaces.
///
/// `field` is only used to name the field in errors. Values longer than `N`
/// are rejected with [`Error::FieldTooLong`] rather than truncated.
pub fn encode_fixed_ascii<const N: usize>(
    field: &'static str,
    value: &str,
) -> Result<[u8; N]> {
    if !value.is_ascii() {
        return Err(Error::NotAscii {
            field,
            value: value.to_string(),
        });
    }
    let bytes = value.as_bytes();
    if bytes.len() > N {
        return Err(Error::FieldTooLong {
            field,
            len: bytes.len(),
            width: N,
        });
    }

    log::debug!("{}: {:?} ({} of {} bytes)", field, value, bytes.len(), N);
    let mut out = [b' '; N];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(out)
}

/// Encodes `value` as a big-endian `u16`, failing with
/// [`Error::ValueOutOfRange`] if it doesn't fit.
pub fn encode_u16_be(field: &'static str, value: u32) -> Result<U16<BigEndian>> {
    let v = u16::try_from(value)
        .map_err(|_| Error::ValueOutOfRange { field, value })?;
    log::debug!("{}: {:#06x}", field, v);
    Ok(U16::new(v))
}
