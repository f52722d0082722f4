//! # Emulator Facade
//!
//! [`Emulator`] is the surface host frontends program against: it owns one
//! CPU and its 64 KiB memory, orchestrates reset/load/step/execute, projects
//! state as text for display, and routes the three debug channels to
//! injected observers.
//!
//! Everything runs synchronously on the caller's thread. `execute` blocks
//! until BRK, an error, or the step limit; a host that needs to interrupt a
//! run should call `step` in its own loop instead. Instances share nothing:
//! each `Emulator` owns an independent memory and register file.

use crate::cpu::{Cpu, StepOutcome};
use crate::memory::{Memory, RangeError, MEMORY_SIZE};
use crate::{ExecutionError, LOAD_ADDRESS};
use std::fmt;

/// Default ceiling on instructions per `execute` call.
///
/// Large enough for any interactive program, small enough to return promptly
/// when a program loops without reaching BRK.
pub const DEFAULT_STEP_LIMIT: u64 = 10_000_000;

/// Errors from placing a program image into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The image does not fit between the load address and end of memory.
    ImageTooLarge { size: usize, available: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::ImageTooLarge { size, available } => write!(
                f,
                "program image of {} bytes exceeds the {} bytes available at ${:04X}",
                size, available, LOAD_ADDRESS
            ),
        }
    }
}

impl std::error::Error for LoadError {}

/// Interactive 6502 emulator: one CPU, one flat memory, three debug channels.
///
/// # Examples
///
/// ```
/// use emu6502::{assemble, Emulator, StepOutcome};
///
/// let program = assemble("LDA #$02\nBRK").unwrap();
///
/// let mut emulator = Emulator::new();
/// emulator.load(&program.bytes).unwrap();
///
/// assert_eq!(emulator.step().unwrap(), StepOutcome::Continuing);
/// assert_eq!(emulator.cpu().registers.a, 0x02);
/// assert_eq!(emulator.step().unwrap(), StepOutcome::Halted);
/// ```
pub struct Emulator {
    cpu: Cpu<Memory>,
    step_limit: u64,
}

impl Emulator {
    /// Creates an emulator with zeroed memory and canonical register state.
    pub fn new() -> Emulator {
        Emulator {
            cpu: Cpu::new(Memory::new()),
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    /// Zeroes all memory and returns the registers to the canonical start
    /// state. Idempotent; installed debug observers survive a reset.
    pub fn reset(&mut self) {
        self.cpu.memory.clear();
        self.cpu.reset();
    }

    /// Copies a program image into memory at [`LOAD_ADDRESS`] and points PC
    /// at it.
    ///
    /// Fails with [`LoadError::ImageTooLarge`] when the image would run past
    /// the end of addressable memory; memory is untouched in that case.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        let available = MEMORY_SIZE - LOAD_ADDRESS as usize;
        if image.len() > available {
            return Err(LoadError::ImageTooLarge {
                size: image.len(),
                available,
            });
        }

        self.cpu.memory.load(LOAD_ADDRESS, image);
        self.cpu.registers.pc = LOAD_ADDRESS;
        Ok(())
    }

    /// Executes one instruction. See [`Cpu::step`].
    pub fn step(&mut self) -> Result<StepOutcome, ExecutionError> {
        self.cpu.step()
    }

    /// Runs until BRK halts the program, an instruction fails to decode, or
    /// the step limit is hit.
    pub fn execute(&mut self) -> Result<(), ExecutionError> {
        self.cpu.execute(self.step_limit)
    }

    /// Replaces the runaway-loop guard used by `execute`.
    pub fn set_step_limit(&mut self, limit: u64) {
        self.step_limit = limit;
    }

    /// Text snapshot of all registers and flags.
    pub fn cpu_status(&self) -> String {
        self.cpu.to_string()
    }

    /// Hex grid of the memory range `[start, end)`. See [`Memory::hexdump`].
    pub fn memory_hexdump(&self, start: u16, end: u16) -> Result<String, RangeError> {
        self.cpu.memory.hexdump(start, end)
    }

    /// Installs the CPU debug channel observer, replacing any prior one.
    pub fn set_cpu_debug_callback(&mut self, callback: impl FnMut(&str) + 'static) {
        self.cpu.set_debug_sink(Box::new(callback));
    }

    /// Installs the Memory debug channel observer, replacing any prior one.
    pub fn set_memory_debug_callback(&mut self, callback: impl FnMut(&str) + 'static) {
        self.cpu.memory.set_debug_sink(Box::new(callback));
    }

    /// Installs the Registers debug channel observer, replacing any prior one.
    pub fn set_registers_debug_callback(&mut self, callback: impl FnMut(&str) + 'static) {
        self.cpu.set_registers_debug_sink(Box::new(callback));
    }

    /// Read access to the CPU for state inspection.
    pub fn cpu(&self) -> &Cpu<Memory> {
        &self.cpu
    }

    /// Mutable access to the CPU, for hosts that patch memory or registers
    /// directly (monitors, debuggers).
    pub fn cpu_mut(&mut self) -> &mut Cpu<Memory> {
        &mut self.cpu
    }
}

impl Default for Emulator {
    fn default() -> Emulator {
        Emulator::new()
    }
}
