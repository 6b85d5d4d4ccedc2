// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cape EEPROM record layout and magic constants.

use byteorder::BigEndian;
use zerocopy::{AsBytes, FromBytes, U16};

use crate::pins::PinTable;

/// Total size of the record in bytes.
pub const RECORD_SIZE: usize = 244;

pub const EEPROM_REV_SIZE: usize = 2;
pub const BOARD_NAME_SIZE: usize = 32;
pub const VERSION_SIZE: usize = 4;
pub const MANUFACTURER_SIZE: usize = 16;
pub const PART_NUMBER_SIZE: usize = 16;
pub const SERIAL_NUMBER_SIZE: usize = 12;

/// Byte offsets of the fields that get displayed.
pub const PIN_COUNT_OFFSET: usize = 74;
pub const SERIAL_NUMBER_OFFSET: usize = 76;
pub const PIN_TABLE_OFFSET: usize = 88;
pub const CURRENTS_OFFSET: usize = 236;

/// The identification portion of the record: everything before the pin
/// table.
pub const IDENTIFICATION_SIZE: usize = 96;

#[derive(Clone, Debug, PartialEq, Eq, AsBytes, FromBytes)]
#[repr(C)]
pub struct CapeRecord {
    pub header: [u8; 4],
    pub eeprom_rev: [u8; EEPROM_REV_SIZE],
    pub board_name: [u8; BOARD_NAME_SIZE],
    pub version: [u8; VERSION_SIZE],
    pub manufacturer: [u8; MANUFACTURER_SIZE],
    pub part_number: [u8; PART_NUMBER_SIZE],
    pub pin_count: U16<BigEndian>,
    pub serial_number: [u8; SERIAL_NUMBER_SIZE],

    pub pin_usage: PinTable,

    /// Current draw in mA.
    pub vdd_3v3b_ma: U16<BigEndian>,
    pub vdd_5v_ma: U16<BigEndian>,
    pub sys_5v_ma: U16<BigEndian>,
    /// Current the cape supplies, in mA.
    pub dc_supplied_ma: U16<BigEndian>,
}

const _: () = assert!(std::mem::size_of::<CapeRecord>() == RECORD_SIZE);

impl CapeRecord {
    pub const MAGIC: [u8; 4] = [0xAA, 0x55, 0x33, 0xEE];

    /// Copies the record out as a byte array.
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut out = [0; RECORD_SIZE];
        out.copy_from_slice(self.as_bytes());
        out
    }
}
