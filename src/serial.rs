// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serial number generation.
//!
//! Cape serial numbers have the form `WWYYAAAAnnnn`: ISO week and two-digit
//! year of production, a four character assembly code, and a board number.

use chrono::{Datelike, NaiveDate};

/// Board number written into generated serials. This is not a counter;
/// every generated serial gets the same value.
pub const BOARD_SEQUENCE: &str = "0001";

/// Source of the production date used in generated serial numbers.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local date from the system.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Copy, Clone, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Produces a serial number for a board assembled on `date`.
///
/// `assembly_code` is cut to four characters, or padded on the right with
/// `0` if shorter.
pub fn generate_serial_number(date: NaiveDate, assembly_code: &str) -> String {
    let week = date.iso_week().week();
    let year = date.year().rem_euclid(100);
    let mut assembly: String = assembly_code.chars().take(4).collect();
    while assembly.chars().count() < 4 {
        assembly.push('0');
    }
    format!("{:02}{:02}{}{}", week, year, assembly, BOARD_SEQUENCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn basic_format() {
        assert_eq!(generate_serial_number(date(2025, 1, 15), "CAPE"), "0325CAPE0001");
    }

    #[test]
    fn assembly_code_is_truncated() {
        assert_eq!(generate_serial_number(date(2025, 1, 15), "CAPES"), "0325CAPE0001");
    }

    #[test]
    fn assembly_code_is_padded() {
        assert_eq!(generate_serial_number(date(2025, 1, 15), "AB"), "0325AB000001");
        assert_eq!(generate_serial_number(date(2025, 1, 15), ""), "032500000001");
    }

    #[test]
    fn week_is_iso_year_is_calendar() {
        // 2024-12-30 falls in ISO week 1 of 2025, but the calendar year is
        // still what gets written.
        assert_eq!(generate_serial_number(date(2024, 12, 30), "CAPE"), "0124CAPE0001");
        assert_eq!(generate_serial_number(date(2026, 10, 17), "CAPE"), "4226CAPE0001");
    }

    #[test]
    fn fixed_clock() {
        let clock = FixedClock(date(2030, 6, 1));
        assert_eq!(clock.today(), date(2030, 6, 1));
    }

    #[test]
    fn serial_is_twelve_chars() {
        let s = generate_serial_number(SystemClock.today(), "CAPE");
        assert_eq!(s.len(), 12);
    }
}
