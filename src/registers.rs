//! # Register File and Status Flags
//!
//! CPU register state lives here: the 8-bit A/X/Y/SP registers, the 16-bit
//! program counter, and the packed processor status byte.
//!
//! The status register layout is `NV-BDIZC` (bit 7 down to bit 0). Bit 5 has
//! no flag assigned on the 6502 and always reads as set.

use crate::LOAD_ADDRESS;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Processor status flags, packed in hardware bit order.
    pub struct Status: u8 {
        /// Carry (bit 0) - unsigned overflow out of bit 7, or shift spill.
        const CARRY = 0b0000_0001;
        /// Zero (bit 1) - last defining result was 0x00.
        const ZERO = 0b0000_0010;
        /// Interrupt disable (bit 2) - stored/restored only; IRQs are not modeled.
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Decimal (bit 3) - stored/restored only; BCD arithmetic is not emulated.
        const DECIMAL = 0b0000_1000;
        /// Break (bit 4) - set when a BRK has been decoded.
        const BREAK = 0b0001_0000;
        /// Unused bit 5 - reads as set on real hardware.
        const RESERVED = 0b0010_0000;
        /// Overflow (bit 6) - signed overflow from arithmetic, or bit 6 via BIT.
        const OVERFLOW = 0b0100_0000;
        /// Negative (bit 7) - bit 7 of the last defining result.
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Packs the flags into a status byte. The reserved bit is always set.
    pub fn to_byte(self) -> u8 {
        (self | Status::RESERVED).bits()
    }

    /// Rebuilds flags from a status byte pulled off the stack.
    ///
    /// B is not a stored flag on the 6502: it only exists in pushed copies of
    /// the status byte, so PLP/RTI discard it. The reserved bit is forced set.
    pub fn from_byte(byte: u8) -> Status {
        let mut status = Status::from_bits_truncate(byte);
        status.remove(Status::BREAK);
        status.insert(Status::RESERVED);
        status
    }

    /// Renders the flags as `nv-bdizc`, uppercase where set.
    pub fn render(self) -> String {
        let mut out = String::with_capacity(8);
        for (flag, set_ch, clear_ch) in [
            (Status::NEGATIVE, 'N', 'n'),
            (Status::OVERFLOW, 'V', 'v'),
            (Status::RESERVED, '-', '-'),
            (Status::BREAK, 'B', 'b'),
            (Status::DECIMAL, 'D', 'd'),
            (Status::INTERRUPT_DISABLE, 'I', 'i'),
            (Status::ZERO, 'Z', 'z'),
            (Status::CARRY, 'C', 'c'),
        ] {
            out.push(if self.contains(flag) { set_ch } else { clear_ch });
        }
        out
    }
}

impl Default for Status {
    fn default() -> Status {
        Status::RESERVED
    }
}

/// 6502 register file.
///
/// All fields are masked to their hardware width by construction: the 8-bit
/// registers are `u8`, the program counter is `u16`, and every arithmetic
/// mutation in the core uses wrapping operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Stack pointer; the full stack address is 0x0100 + SP, growing downward.
    pub sp: u8,
    /// Program counter (address of the next byte to fetch).
    pub pc: u16,
    /// Processor status flags.
    pub p: Status,
}

impl Registers {
    /// Canonical power-on state: A=X=Y=0, SP=0xFF, PC at the load address,
    /// all flags clear except the reserved bit.
    pub fn new() -> Registers {
        Registers {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFF,
            pc: LOAD_ADDRESS,
            p: Status::RESERVED,
        }
    }

    /// Returns the registers to the canonical power-on state.
    pub fn reset(&mut self) {
        *self = Registers::new();
    }

    /// Recomputes Z and N from a result value.
    ///
    /// Every instruction that defines Z/N routes its result through here so
    /// the two flags can never go stale.
    pub(crate) fn set_zero_negative(&mut self, value: u8) {
        self.p.set(Status::ZERO, value == 0);
        self.p.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    /// One-line register snapshot used by the debug channels.
    pub fn snapshot(&self) -> String {
        format!(
            "A=${:02X} X=${:02X} Y=${:02X} SP=${:02X} PC=${:04X} P={}",
            self.a,
            self.x,
            self.y,
            self.sp,
            self.pc,
            self.p.render()
        )
    }
}

impl Default for Registers {
    fn default() -> Registers {
        Registers::new()
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "A: ${:02X}  X: ${:02X}  Y: ${:02X}  SP: ${:02X}  PC: ${:04X}",
            self.a, self.x, self.y, self.sp, self.pc
        )?;
        write!(f, "Flags: {}", self.p.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_state() {
        let registers = Registers::new();

        assert_eq!(registers.a, 0);
        assert_eq!(registers.x, 0);
        assert_eq!(registers.y, 0);
        assert_eq!(registers.sp, 0xFF);
        assert_eq!(registers.pc, LOAD_ADDRESS);
        assert_eq!(registers.p, Status::RESERVED);
    }

    #[test]
    fn test_zero_negative_recomputed() {
        let mut registers = Registers::new();

        registers.set_zero_negative(0x00);
        assert!(registers.p.contains(Status::ZERO));
        assert!(!registers.p.contains(Status::NEGATIVE));

        registers.set_zero_negative(0x80);
        assert!(!registers.p.contains(Status::ZERO));
        assert!(registers.p.contains(Status::NEGATIVE));

        registers.set_zero_negative(0x01);
        assert!(!registers.p.contains(Status::ZERO));
        assert!(!registers.p.contains(Status::NEGATIVE));
    }

    #[test]
    fn test_status_byte_round_trip() {
        let mut status = Status::CARRY | Status::NEGATIVE;
        status.insert(Status::DECIMAL);

        // Reserved always reads as set in the packed byte.
        assert_eq!(status.to_byte(), 0b1010_1001);

        // B never survives a pull.
        let pulled = Status::from_byte(0b1011_1001);
        assert!(!pulled.contains(Status::BREAK));
        assert!(pulled.contains(Status::RESERVED));
        assert!(pulled.contains(Status::NEGATIVE));
    }

    #[test]
    fn test_render_flags() {
        assert_eq!(Status::RESERVED.render(), "nv-bdizc");
        assert_eq!((Status::RESERVED | Status::ZERO | Status::CARRY).render(), "nv-bdiZC");
    }
}
