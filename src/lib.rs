//! # Interactive 6502 Emulator and Assembler
//!
//! An interactive MOS 6502 CPU emulator with an integrated two-pass assembler,
//! designed for modularity, clarity, and WebAssembly portability.
//!
//! The crate provides a complete emulation core: a table-driven
//! fetch-decode-execute engine over a flat 64 KiB memory, exact status-flag
//! semantics for the full documented instruction set, and an assembler that
//! translates label-bearing source text into a loadable byte image. The
//! [`Emulator`] facade ties the pieces together and fans execution traces out
//! to three per-instance debug channels (CPU, Memory, Registers).
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{assemble, Emulator};
//!
//! let program = assemble("LDA #$02\nSTA $00\nBRK").unwrap();
//!
//! let mut emulator = Emulator::new();
//! emulator.reset();
//! emulator.load(&program.bytes).unwrap();
//! emulator.execute().unwrap();
//!
//! assert_eq!(emulator.cpu().memory.read(0x0000), 0x02);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the [`MemoryBus`]
//!   trait; the assembler and the CPU core share one opcode table.
//! - **Table-driven design**: all instruction metadata lives in
//!   [`OPCODE_TABLE`], the single source of truth for decode and encode.
//! - **WebAssembly portability**: no OS dependencies, deterministic execution;
//!   the optional `wasm` feature exposes the facade to JavaScript hosts.
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `memory` - MemoryBus trait and the flat 64 KiB implementation
//! - `registers` - register file and status flags
//! - `opcodes` - opcode metadata table
//! - `addressing` - addressing mode enumeration
//! - `assembler` - two-pass source-to-bytes translation
//! - `emulator` - the facade used by host frontends
//!
//! ## Limitations
//!
//! Cycle timing and hardware interrupts (IRQ/NMI) are not modeled. Decimal
//! mode is not emulated: the D flag is stored and restorable, but ADC/SBC
//! always perform binary arithmetic.

pub mod addressing;
pub mod assembler;
pub mod cpu;
pub mod emulator;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of the public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use assembler::{assemble, AssemblerOutput, AssemblyError, AssemblyErrorKind, Symbol};
pub use cpu::{Cpu, StepOutcome};
pub use emulator::{Emulator, LoadError, DEFAULT_STEP_LIMIT};
pub use memory::{Memory, MemoryBus, RangeError, MEMORY_SIZE};
pub use opcodes::{find_opcode, OpcodeMetadata, OPCODE_TABLE};
pub use registers::{Registers, Status};

/// Address at which assembled images are placed and where execution starts.
///
/// The assembler lays programs out from this address, `Emulator::load` copies
/// them here, and `reset` points the program counter at it.
pub const LOAD_ADDRESS: u16 = 0x8000;

/// An installed observer for one debug channel.
///
/// Each sink receives fully formatted, human-readable event lines. Delivery is
/// synchronous on the caller's thread; sinks must not call back into the
/// emulator that invoked them.
pub type DebugSink = Box<dyn FnMut(&str)>;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The byte at PC does not decode to a documented 6502 instruction.
    ///
    /// Undocumented opcodes are not emulated. PC is left pointing at the
    /// offending byte so the failure site can be inspected.
    InvalidOpcode { opcode: u8, pc: u16 },

    /// `execute` ran for the configured number of steps without reaching BRK.
    ///
    /// Guards against programs that loop forever without halting.
    StepLimitExceeded { limit: u64 },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::InvalidOpcode { opcode, pc } => {
                write!(
                    f,
                    "opcode 0x{:02X} at ${:04X} is not a documented 6502 instruction",
                    opcode, pc
                )
            }
            ExecutionError::StepLimitExceeded { limit } => {
                write!(f, "execution exceeded the limit of {} instructions", limit)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
