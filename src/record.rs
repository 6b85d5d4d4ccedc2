// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Assembly of a complete cape EEPROM record from caller-supplied values.

use crate::board::{BoardDefaults, BoardProfile};
use crate::error::Result;
use crate::field::{encode_fixed_ascii, encode_u16_be};
use crate::format::CapeRecord;
use crate::serial::{generate_serial_number, Clock};

/// Field values for one record. Strings are checked against their widths
/// during generation, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordFields {
    pub eeprom_rev: String,
    pub board_name: String,
    pub version: String,
    pub manufacturer: String,
    pub part_number: String,
    /// If `None`, a serial is generated from the clock and `assembly_code`.
    pub serial: Option<String>,
    pub assembly_code: String,
    pub vdd_3v3b_ma: u32,
    pub vdd_5v_ma: u32,
    pub sys_5v_ma: u32,
    pub dc_supplied_ma: u32,
}

impl RecordFields {
    pub fn from_defaults(defaults: &BoardDefaults) -> Self {
        Self {
            eeprom_rev: defaults.eeprom_rev.to_string(),
            board_name: defaults.board_name.to_string(),
            version: defaults.version.to_string(),
            manufacturer: defaults.manufacturer.to_string(),
            part_number: defaults.part_number.to_string(),
            serial: None,
            assembly_code: defaults.assembly_code.to_string(),
            vdd_3v3b_ma: defaults.vdd_3v3b_ma,
            vdd_5v_ma: defaults.vdd_5v_ma,
            sys_5v_ma: defaults.sys_5v_ma,
            dc_supplied_ma: defaults.dc_supplied_ma,
        }
    }
}

/// Generates the record for `profile` with the given field values.
///
/// The pin table comes from the profile's fixed assignments, and the pin
/// count field is the number of slots that table marks as used. The first
/// field that fails to encode aborts generation.
pub fn generate_record(
    fields: &RecordFields,
    profile: &BoardProfile,
    clock: &dyn Clock,
) -> Result<CapeRecord> {
    let serial = match &fields.serial {
        Some(s) => s.clone(),
        None => {
            let s = generate_serial_number(clock.today(), &fields.assembly_code);
            log::debug!("generated serial number {}", s);
            s
        }
    };

    let pin_usage = profile.build_pin_table();
    let used = pin_usage.used_count();
    log::debug!(
        "{}: {} of {} declared pins present in table",
        profile.short_name,
        used,
        profile.pins.len(),
    );

    let record = CapeRecord {
        header: CapeRecord::MAGIC,
        eeprom_rev: encode_fixed_ascii("EEPROM revision", &fields.eeprom_rev)?,
        board_name: encode_fixed_ascii("board name", &fields.board_name)?,
        version: encode_fixed_ascii("version", &fields.version)?,
        manufacturer: encode_fixed_ascii("manufacturer", &fields.manufacturer)?,
        part_number: encode_fixed_ascii("part number", &fields.part_number)?,
        // The table has 74 slots, so this can't fail.
        pin_count: encode_u16_be("pin count", used as u32)?,
        serial_number: encode_fixed_ascii("serial number", &serial)?,

        pin_usage,

        vdd_3v3b_ma: encode_u16_be("VDD_3V3B current", fields.vdd_3v3b_ma)?,
        vdd_5v_ma: encode_u16_be("VDD_5V current", fields.vdd_5v_ma)?,
        sys_5v_ma: encode_u16_be("SYS_5V current", fields.sys_5v_ma)?,
        dc_supplied_ma: encode_u16_be("DC supplied current", fields.dc_supplied_ma)?,
    };
    Ok(record)
}
