//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from a
//! specific memory implementation, plus [`Memory`], the flat 64 KiB backing
//! store used by the emulator facade.
//!
//! ## Design Principles
//!
//! The trait follows 6502 hardware behavior:
//! - No bus errors - reads and writes always succeed
//! - Simple signatures for WASM compatibility
//!
//! [`Memory`] additionally instruments writes: when a debug sink is installed,
//! every write reports the address and the old/new byte value on the Memory
//! debug channel.

use crate::DebugSink;
use std::fmt;

/// Total addressable bytes: the full 16-bit address space.
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Memory bus trait for the CPU to read and write bytes.
///
/// Implementations provide the memory backend for the CPU; all accesses go
/// through this abstraction.
///
/// # Design
///
/// - `read(&self)`: immutable reference allows shared reads
/// - `write(&mut self)`: mutable reference makes side effects explicit
/// - No error types: the 6502 has no bus error mechanism
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address. Must never fail.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address. Must never fail.
    fn write(&mut self, addr: u16, value: u8);
}

/// Invalid bounds passed to [`Memory::hexdump`].
///
/// Reported, not fatal: memory state is untouched and the caller decides how
/// to surface it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeError {
    pub start: u16,
    pub end: u16,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid memory range ${:04X}..${:04X}: end must be greater than start",
            self.start, self.end
        )
    }
}

impl std::error::Error for RangeError {}

/// Flat 64 KiB memory with instrumented writes.
///
/// Every address in 0x0000-0xFFFF is writable RAM initialized to zero; reads
/// never fail and no address is reserved. One instance is exclusively owned
/// by one emulator.
pub struct Memory {
    /// 64 KiB contiguous memory array
    data: Box<[u8; MEMORY_SIZE]>,

    /// Memory debug channel observer (single slot, last-set-wins)
    debug: Option<DebugSink>,
}

impl Memory {
    /// Creates a new memory with all bytes initialized to zero.
    pub fn new() -> Memory {
        Memory {
            data: Box::new([0; MEMORY_SIZE]),
            debug: None,
        }
    }

    /// Reads the byte at `addr`.
    pub fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// Writes `value` at `addr`, reporting the mutation on the Memory debug
    /// channel if an observer is installed.
    pub fn write(&mut self, addr: u16, value: u8) {
        let old = self.data[addr as usize];
        self.data[addr as usize] = value;

        if self.debug.is_some() {
            let message = format!("write ${:04X}: ${:02X} -> ${:02X}", addr, old, value);
            if let Some(sink) = self.debug.as_mut() {
                sink(&message);
            }
        }
    }

    /// Zeroes all 65,536 bytes. Emits no debug events.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Copies `bytes` into memory starting at `addr`, without emitting debug
    /// events. Used by the loader; the caller is responsible for bounds.
    pub(crate) fn load(&mut self, addr: u16, bytes: &[u8]) {
        let start = addr as usize;
        self.data[start..start + bytes.len()].copy_from_slice(bytes);
    }

    /// Installs (or replaces) the Memory debug channel observer.
    pub fn set_debug_sink(&mut self, sink: DebugSink) {
        self.debug = Some(sink);
    }

    /// Renders the bytes in `[start, end)` as a hex grid, 16 bytes per row.
    ///
    /// Fails with [`RangeError`] when `end <= start`; the bounds themselves
    /// are `u16` and therefore always inside the address space.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::Memory;
    ///
    /// let mut memory = Memory::new();
    /// memory.write(0x0000, 0x2A);
    ///
    /// let dump = memory.hexdump(0x0000, 0x0010).unwrap();
    /// assert_eq!(dump, "$0000: 2A 00 00 00 00 00 00 00 00 00 00 00 00 00 00 00");
    ///
    /// assert!(memory.hexdump(0x0010, 0x0000).is_err());
    /// ```
    pub fn hexdump(&self, start: u16, end: u16) -> Result<String, RangeError> {
        if end <= start {
            return Err(RangeError { start, end });
        }

        let mut rows = Vec::new();
        let mut addr = start as usize;
        let end = end as usize;

        while addr < end {
            let row_end = (addr + 16).min(end);
            let cells: Vec<String> = (addr..row_end)
                .map(|a| format!("{:02X}", self.data[a]))
                .collect();
            rows.push(format!("${:04X}: {}", addr, cells.join(" ")));
            addr = row_end;
        }

        Ok(rows.join("\n"))
    }
}

impl Default for Memory {
    fn default() -> Memory {
        Memory::new()
    }
}

impl MemoryBus for Memory {
    fn read(&self, addr: u16) -> u8 {
        Memory::read(self, addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        Memory::write(self, addr, value);
    }
}
