// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `cape-eeprom` writes the identification EEPROM image for a BeagleBone
//! cape.
//!
//! The image is generated from a built-in board profile, with any field
//! overridden from the command line, and written to a file that can then be
//! flashed to the cape's EEPROM.

use std::path::PathBuf;
use anyhow::{Context, Result, bail};
use clap::Parser;
use zerocopy::AsBytes;

use cape_eeprom::board::{self, BoardProfile};
use cape_eeprom::display::{write_hex_dump, write_summary};
use cape_eeprom::format::IDENTIFICATION_SIZE;
use cape_eeprom::record::{generate_record, RecordFields};
use cape_eeprom::serial::SystemClock;

///////////////////////////////////////////////////////////////////////
// Command line interface definition.

/// cape-eeprom generates BeagleBone cape EEPROM images.
///
/// Any field not given on the command line takes its value from the
/// selected board profile.
#[derive(Parser)]
#[clap(term_width = 80)]
struct CapeEeprom {
    /// Path for the generated image.
    #[clap(short, long, default_value = "cape_eeprom.bin")]
    output: PathBuf,

    /// Board profile supplying pin assignments and default field values.
    /// Pass `help` to see a list of known profiles.
    #[clap(
        long,
        parse(try_from_str = parse_board),
        default_value = board::DEFAULT_PROFILE,
    )]
    board: &'static BoardProfile,

    /// Board name, max 32 chars.
    #[clap(long)]
    board_name: Option<String>,

    /// Hardware version, 4 chars.
    #[clap(long)]
    version: Option<String>,

    /// Manufacturer name, max 16 chars.
    #[clap(long)]
    manufacturer: Option<String>,

    /// Part number, max 16 chars.
    #[clap(long)]
    part_number: Option<String>,

    /// EEPROM revision, 2 chars.
    #[clap(long)]
    eeprom_rev: Option<String>,

    /// Serial number, max 12 chars. If omitted, one is generated from the
    /// current date and the assembly code.
    #[clap(long)]
    serial: Option<String>,

    /// Assembly code used in generated serial numbers.
    #[clap(long)]
    assembly_code: Option<String>,

    /// VDD_3V3B current draw in mA.
    #[clap(long, value_name = "MA", parse(try_from_str = parse_u32))]
    vdd_3v3b_ma: Option<u32>,

    /// VDD_5V current draw in mA.
    #[clap(long, value_name = "MA", parse(try_from_str = parse_u32))]
    vdd_5v_ma: Option<u32>,

    /// SYS_5V current draw in mA.
    #[clap(long, value_name = "MA", parse(try_from_str = parse_u32))]
    sys_5v_ma: Option<u32>,

    /// Current supplied by the cape in mA.
    #[clap(long, value_name = "MA", parse(try_from_str = parse_u32))]
    dc_supplied_ma: Option<u32>,

    /// Print the decoded record contents after generation, and enable debug
    /// logging.
    #[clap(long, short)]
    verbose: bool,
}

impl CapeEeprom {
    /// Merges command line overrides into the profile defaults.
    fn fields(&self) -> RecordFields {
        let mut f = RecordFields::from_defaults(&self.board.defaults);
        if let Some(v) = &self.board_name {
            f.board_name = v.clone();
        }
        if let Some(v) = &self.version {
            f.version = v.clone();
        }
        if let Some(v) = &self.manufacturer {
            f.manufacturer = v.clone();
        }
        if let Some(v) = &self.part_number {
            f.part_number = v.clone();
        }
        if let Some(v) = &self.eeprom_rev {
            f.eeprom_rev = v.clone();
        }
        if let Some(v) = &self.assembly_code {
            f.assembly_code = v.clone();
        }
        f.serial = self.serial.clone();
        f.vdd_3v3b_ma = self.vdd_3v3b_ma.unwrap_or(f.vdd_3v3b_ma);
        f.vdd_5v_ma = self.vdd_5v_ma.unwrap_or(f.vdd_5v_ma);
        f.sys_5v_ma = self.sys_5v_ma.unwrap_or(f.sys_5v_ma);
        f.dc_supplied_ma = self.dc_supplied_ma.unwrap_or(f.dc_supplied_ma);
        f
    }
}

///////////////////////////////////////////////////////////////////////
// Main function.

fn main() -> Result<()> {
    let args = CapeEeprom::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .default_filter_or(if args.verbose { "debug" } else { "warn" }),
    ).init();

    let record = generate_record(&args.fields(), args.board, &SystemClock)
        .with_context(|| format!(
            "can't generate EEPROM image for {}",
            args.board.short_name,
        ))?;
    let image = record.as_bytes();

    std::fs::write(&args.output, image)
        .with_context(|| format!(
            "can't write output file {}",
            args.output.display(),
        ))?;
    println!(
        "Generated EEPROM image: {} ({} bytes)",
        args.output.display(),
        image.len(),
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.verbose {
        write_summary(&mut out, &record)?;
    }

    println!("\nFirst {} bytes (hex):", IDENTIFICATION_SIZE);
    write_hex_dump(&mut out, image, IDENTIFICATION_SIZE)?;

    Ok(())
}

///////////////////////////////////////////////////////////////////////
// Clap helper functions. Out of the box, Clap does not appear to be able to
// parse numbers with a base prefix. So, let's fix that.

fn parse_u32(s: &str) -> Result<u32> {
    parse_with_prefix(s, u32::from_str_radix)
}

fn parse_with_prefix<T>(
    s: &str,
    parse_radix: impl FnOnce(&str, u32) -> Result<T, std::num::ParseIntError>,
) -> Result<T> {
    if let Some(hex) = s.strip_prefix("0x") {
        parse_radix(hex, 16)
            .context("has hex prefix 0x but is not a hex number")
    } else if let Some(bin) = s.strip_prefix("0b") {
        parse_radix(bin, 2)
            .context("has binary prefix 0b but is not a binary number")
    } else {
        parse_radix(s, 10)
            .context("expected decimal number or 0x/0b prefix")
    }
}

fn parse_board(s: &str) -> Result<&'static BoardProfile> {
    if s == "help" {
        eprintln!("Defined board profiles:");
        eprintln!("{:16} {:5} {}", "NAME", "PINS", "DESCRIPTION");
        for p in board::profiles() {
            eprintln!("{:16} {:5} {}", p.short_name, p.pins.len(), p.description);
        }
        bail!("choose a profile name from the list above.");
    }

    match board::find(s) {
        Some(p) => Ok(p),
        None => {
            bail!("unknown board profile {} (use --board=help for list)", s);
        }
    }
}
