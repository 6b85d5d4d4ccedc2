// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Human-readable rendering of a generated record.

use std::io::{self, Write};

use zerocopy::AsBytes;

use crate::format::CapeRecord;

fn text(field: &[u8]) -> String {
    String::from_utf8_lossy(field).trim().to_string()
}

/// Prints the decoded identification fields and currents of `record`.
pub fn write_summary(out: &mut dyn Write, record: &CapeRecord) -> io::Result<()> {
    let rule = "-".repeat(50);
    let header: String = record.header.iter()
        .map(|b| format!("{:02X}", b))
        .collect();

    writeln!(out, "\nEEPROM Contents:")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "Header:       0x{}", header)?;
    writeln!(out, "EEPROM Rev:   {}", text(&record.eeprom_rev))?;
    writeln!(out, "Board Name:   {}", text(&record.board_name))?;
    writeln!(out, "Version:      {}", text(&record.version))?;
    writeln!(out, "Manufacturer: {}", text(&record.manufacturer))?;
    writeln!(out, "Part Number:  {}", text(&record.part_number))?;
    writeln!(out, "Num Pins:     {}", record.pin_count.get())?;
    writeln!(out, "Serial:       {}", text(&record.serial_number))?;
    writeln!(out, "VDD_3V3B:     {} mA", record.vdd_3v3b_ma.get())?;
    writeln!(out, "VDD_5V:       {} mA", record.vdd_5v_ma.get())?;
    writeln!(out, "SYS_5V:       {} mA", record.sys_5v_ma.get())?;
    writeln!(out, "DC Supplied:  {} mA", record.dc_supplied_ma.get())?;
    writeln!(out, "Total size:   {} bytes", record.as_bytes().len())?;
    writeln!(out, "{}", rule)?;
    Ok(())
}

/// Prints up to `limit` bytes of `data` as a hex dump, 16 bytes per line,
/// with printable ASCII alongside.
pub fn write_hex_dump(
    out: &mut dyn Write,
    data: &[u8],
    limit: usize,
) -> io::Result<()> {
    let data = &data[..limit.min(data.len())];
    for (i, line) in data.chunks(16).enumerate() {
        let hex = line.iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ");
        let ascii: String = line.iter()
            .map(|&b| if (0x20..0x7F).contains(&b) { b as char } else { '.' })
            .collect();
        writeln!(out, "  {:04X}: {:<48} |{}|", i * 16, hex, ascii)?;
    }
    Ok(())
}
