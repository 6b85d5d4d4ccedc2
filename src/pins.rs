// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The pin usage table: one 16-bit word per expansion header pin slot,
//! describing whether the cape drives that pin and how it is muxed.

use byteorder::BigEndian;
use zerocopy::{AsBytes, FromBytes, U16};

/// Number of pin slots in the table.
pub const PIN_SLOTS: usize = 74;

/// Number of pins on each expansion header.
pub const PINS_PER_HEADER: usize = 46;

/// Bits of a pin usage word.
pub const PIN_USED: u16 = 0x8000;
pub const SLEW_SLOW: u16 = 0x0040;
pub const RX_ENABLE: u16 = 0x0020;
pub const PULLUP: u16 = 0x0010;
pub const PULL_DISABLE: u16 = 0x0008;
pub const MUX_MASK: u16 = 0x0007;

/// Expansion header a pin lives on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Header {
    P8,
    P9,
}

impl Header {
    /// Table index of pin 1 on this header.
    fn base(self) -> usize {
        match self {
            Header::P8 => 0,
            Header::P9 => PINS_PER_HEADER,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Header::P8 => 8,
            Header::P9 => 9,
        }
    }
}

/// Electrical configuration of a used pin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PinConfig {
    /// Mux mode, 0-7. Only the low three bits are encoded.
    pub mux_mode: u8,
    pub rx_enable: bool,
    /// Pull direction: `true` for pullup, `false` for pulldown.
    pub pullup: bool,
    pub pull_disable: bool,
    pub slew_slow: bool,
}

impl PinConfig {
    /// GPIO mode with the pullup selected, which is how most pins on a cape
    /// are declared.
    pub const fn gpio() -> Self {
        Self::mux(7)
    }

    pub const fn mux(mux_mode: u8) -> Self {
        Self {
            mux_mode,
            rx_enable: false,
            pullup: true,
            pull_disable: false,
            slew_slow: false,
        }
    }

    pub const fn with_rx(self) -> Self {
        Self { rx_enable: true, ..self }
    }

    /// The table word for a used pin with this configuration.
    pub fn word(&self) -> u16 {
        let mut value = PIN_USED;
        if self.slew_slow {
            value |= SLEW_SLOW;
        }
        if self.rx_enable {
            value |= RX_ENABLE;
        }
        if self.pullup {
            value |= PULLUP;
        }
        if self.pull_disable {
            value |= PULL_DISABLE;
        }
        value | (u16::from(self.mux_mode) & MUX_MASK)
    }
}

/// A logical signal routed to a physical header pin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PinAssignment {
    pub signal: &'static str,
    pub header: Header,
    /// Pin number on the header, counting from 1.
    pub pin: u8,
    pub config: PinConfig,
}

impl PinAssignment {
    /// Returns the table slot for this pin, or `None` if it falls outside the
    /// table.
    ///
    /// Note that the table only has room for the first 28 pins of P9; higher
    /// numbered P9 pins map past the end and get `None`.
    pub fn slot(&self) -> Option<usize> {
        let pin = usize::from(self.pin).checked_sub(1)?;
        let index = self.header.base() + pin;
        if index < PIN_SLOTS {
            Some(index)
        } else {
            None
        }
    }
}

/// The 148-byte pin usage table, as it appears in the record.
#[derive(Clone, Debug, PartialEq, Eq, AsBytes, FromBytes)]
#[repr(C)]
pub struct PinTable {
    pub words: [U16<BigEndian>; PIN_SLOTS],
}

impl PinTable {
    /// A table with every pin marked unused.
    pub fn unused() -> Self {
        Self {
            words: [U16::new(0); PIN_SLOTS],
        }
    }

    /// Writes the word for `assignment` into its slot, replacing whatever was
    /// there. Assignments that don't map to a slot are skipped, and `false`
    /// is returned.
    pub fn set(&mut self, assignment: &PinAssignment) -> bool {
        match assignment.slot() {
            Some(index) => {
                self.words[index] = U16::new(assignment.config.word());
                true
            }
            None => false,
        }
    }

    pub fn word(&self, index: usize) -> u16 {
        self.words[index].get()
    }

    /// Number of slots marked in use.
    pub fn used_count(&self) -> usize {
        self.words.iter()
            .filter(|w| w.get() & PIN_USED != 0)
            .count()
    }
}

/// Builds the pin usage table for a fixed list of assignments.
///
/// Every slot not named by an assignment is left zero (unused). Assignments
/// that fall outside the table are skipped without error, and if two
/// assignments name the same pin, the later one wins.
pub fn build_pin_table(assignments: &[PinAssignment]) -> PinTable {
    let mut table = PinTable::unused();
    for a in assignments {
        if !table.set(a) {
            log::debug!(
                "skipping {} at P{}/{}: no slot in pin table",
                a.signal,
                a.header.number(),
                a.pin,
            );
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assign(header: Header, pin: u8, config: PinConfig) -> PinAssignment {
        PinAssignment { signal: "TEST", header, pin, config }
    }

    #[test]
    fn table_is_148_bytes() {
        assert_eq!(PinTable::unused().as_bytes().len(), 148);
        assert!(PinTable::unused().as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn slot_mapping() {
        assert_eq!(assign(Header::P8, 1, PinConfig::gpio()).slot(), Some(0));
        assert_eq!(assign(Header::P8, 19, PinConfig::gpio()).slot(), Some(18));
        assert_eq!(assign(Header::P8, 46, PinConfig::gpio()).slot(), Some(45));
        assert_eq!(assign(Header::P9, 1, PinConfig::gpio()).slot(), Some(46));
        assert_eq!(assign(Header::P9, 26, PinConfig::gpio()).slot(), Some(71));
        assert_eq!(assign(Header::P9, 28, PinConfig::gpio()).slot(), Some(73));
        assert_eq!(assign(Header::P9, 29, PinConfig::gpio()).slot(), None);
        assert_eq!(assign(Header::P8, 0, PinConfig::gpio()).slot(), None);
    }

    #[test]
    fn word_bits() {
        assert_eq!(PinConfig::gpio().word(), 0x8017);
        assert_eq!(PinConfig::mux(0).with_rx().word(), 0x8030);
        let all = PinConfig {
            mux_mode: 5,
            rx_enable: true,
            pullup: false,
            pull_disable: true,
            slew_slow: true,
        };
        assert_eq!(all.word(), 0x8000 | 0x40 | 0x20 | 0x08 | 5);
    }

    #[test]
    fn mux_mode_is_masked() {
        let c = PinConfig { mux_mode: 0xFF, ..PinConfig::mux(0) };
        assert_eq!(c.word() & !MUX_MASK, 0x8010);
        assert_eq!(c.word() & MUX_MASK, 7);
    }

    #[test]
    fn words_are_big_endian_at_slot_offset() {
        let table = build_pin_table(&[
            assign(Header::P8, 19, PinConfig::gpio()),
        ]);
        let bytes = table.as_bytes();
        assert_eq!(&bytes[36..38], &[0x80, 0x17]);
        assert_eq!(table.used_count(), 1);
    }

    #[test]
    fn out_of_range_is_skipped() {
        let table = build_pin_table(&[
            assign(Header::P9, 40, PinConfig::gpio()),
            assign(Header::P8, 0, PinConfig::gpio()),
        ]);
        assert_eq!(table, PinTable::unused());
    }

    #[test]
    fn duplicate_last_write_wins() {
        let table = build_pin_table(&[
            assign(Header::P9, 12, PinConfig::gpio()),
            assign(Header::P9, 12, PinConfig::mux(2).with_rx()),
        ]);
        assert_eq!(table.word(57), 0x8032);
        assert_eq!(table.used_count(), 1);
    }
}
