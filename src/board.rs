// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Board profiles: the default field values and fixed pin assignments for a
//! particular cape. Profiles are generated at build time from `boards.json`.

use crate::pins::{build_pin_table, Header, PinAssignment, PinConfig, PinTable};

/// Name of the profile used when none is requested.
pub const DEFAULT_PROFILE: &str = "BB-IO-CAPE";

/// Default field values for a board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardDefaults {
    pub eeprom_rev: &'static str,
    pub board_name: &'static str,
    pub version: &'static str,
    pub manufacturer: &'static str,
    pub part_number: &'static str,
    pub assembly_code: &'static str,
    pub vdd_3v3b_ma: u32,
    pub vdd_5v_ma: u32,
    pub sys_5v_ma: u32,
    pub dc_supplied_ma: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardProfile {
    pub short_name: &'static str,
    pub description: &'static str,
    pub defaults: BoardDefaults,
    pub pins: &'static [PinAssignment],
}

impl BoardProfile {
    /// Builds the pin usage table for this board.
    pub fn build_pin_table(&self) -> PinTable {
        build_pin_table(self.pins)
    }
}

/// All known profiles, sorted by short name.
pub fn profiles() -> &'static [BoardProfile] {
    PROFILES
}

/// Looks up a profile by its short name.
pub fn find(name: &str) -> Option<&'static BoardProfile> {
    PROFILES.binary_search_by_key(&name, |p| p.short_name)
        .ok()
        .map(|i| &PROFILES[i])
}

include!(concat!(env!("OUT_DIR"), "/boards.rs"));
