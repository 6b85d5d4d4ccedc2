// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generator for BeagleBone cape EEPROM images.
//!
//! A cape identifies itself to the host board through a 244-byte record in
//! its EEPROM: a magic header, a handful of space-padded ASCII identification
//! fields, a table describing how each expansion header pin is used, and the
//! current the cape draws from each supply rail. This crate builds that
//! record; it does not read one back.

pub mod board;
pub mod display;
pub mod error;
pub mod field;
pub mod format;
pub mod pins;
pub mod record;
pub mod serial;

pub use crate::error::{Error, Result};
pub use crate::format::CapeRecord;
pub use crate::record::{generate_record, RecordFields};
