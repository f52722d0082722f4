//! # Opcode Metadata Table
//!
//! The complete 256-entry opcode table: the single source of truth for all
//! 6502 instruction metadata. The CPU core indexes it by opcode byte to
//! decode, and the assembler searches it by (mnemonic, addressing mode) to
//! encode.
//!
//! The table covers the 151 documented NMOS 6502 opcodes. The remaining 105
//! undocumented slots carry the `"???"` mnemonic and are rejected by the
//! decoder.

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode::*;

/// Metadata for a single 6502 opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Three-letter instruction name, or `"???"` for undocumented slots.
    pub mnemonic: &'static str,

    /// How the instruction interprets its operand bytes.
    pub addressing_mode: AddressingMode,

    /// Total instruction size including opcode and operands (1-3 bytes).
    pub size_bytes: u8,

    /// Whether this is a documented instruction. The CPU refuses to execute
    /// entries where this is false.
    pub documented: bool,
}

const fn op(mnemonic: &'static str, addressing_mode: AddressingMode, size_bytes: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        size_bytes,
        documented: true,
    }
}

const fn undoc() -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic: "???",
        addressing_mode: Implicit,
        size_bytes: 1,
        documented: false,
    }
}

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressingMode, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
///
/// assert!(!OPCODE_TABLE[0x02].documented);
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    op("BRK", Implicit, 1),     // 0x00
    op("ORA", IndirectX, 2),    // 0x01
    undoc(),                    // 0x02
    undoc(),                    // 0x03
    undoc(),                    // 0x04
    op("ORA", ZeroPage, 2),     // 0x05
    op("ASL", ZeroPage, 2),     // 0x06
    undoc(),                    // 0x07
    op("PHP", Implicit, 1),     // 0x08
    op("ORA", Immediate, 2),    // 0x09
    op("ASL", Accumulator, 1),  // 0x0A
    undoc(),                    // 0x0B
    undoc(),                    // 0x0C
    op("ORA", Absolute, 3),     // 0x0D
    op("ASL", Absolute, 3),     // 0x0E
    undoc(),                    // 0x0F
    op("BPL", Relative, 2),     // 0x10
    op("ORA", IndirectY, 2),    // 0x11
    undoc(),                    // 0x12
    undoc(),                    // 0x13
    undoc(),                    // 0x14
    op("ORA", ZeroPageX, 2),    // 0x15
    op("ASL", ZeroPageX, 2),    // 0x16
    undoc(),                    // 0x17
    op("CLC", Implicit, 1),     // 0x18
    op("ORA", AbsoluteY, 3),    // 0x19
    undoc(),                    // 0x1A
    undoc(),                    // 0x1B
    undoc(),                    // 0x1C
    op("ORA", AbsoluteX, 3),    // 0x1D
    op("ASL", AbsoluteX, 3),    // 0x1E
    undoc(),                    // 0x1F
    op("JSR", Absolute, 3),     // 0x20
    op("AND", IndirectX, 2),    // 0x21
    undoc(),                    // 0x22
    undoc(),                    // 0x23
    op("BIT", ZeroPage, 2),     // 0x24
    op("AND", ZeroPage, 2),     // 0x25
    op("ROL", ZeroPage, 2),     // 0x26
    undoc(),                    // 0x27
    op("PLP", Implicit, 1),     // 0x28
    op("AND", Immediate, 2),    // 0x29
    op("ROL", Accumulator, 1),  // 0x2A
    undoc(),                    // 0x2B
    op("BIT", Absolute, 3),     // 0x2C
    op("AND", Absolute, 3),     // 0x2D
    op("ROL", Absolute, 3),     // 0x2E
    undoc(),                    // 0x2F
    op("BMI", Relative, 2),     // 0x30
    op("AND", IndirectY, 2),    // 0x31
    undoc(),                    // 0x32
    undoc(),                    // 0x33
    undoc(),                    // 0x34
    op("AND", ZeroPageX, 2),    // 0x35
    op("ROL", ZeroPageX, 2),    // 0x36
    undoc(),                    // 0x37
    op("SEC", Implicit, 1),     // 0x38
    op("AND", AbsoluteY, 3),    // 0x39
    undoc(),                    // 0x3A
    undoc(),                    // 0x3B
    undoc(),                    // 0x3C
    op("AND", AbsoluteX, 3),    // 0x3D
    op("ROL", AbsoluteX, 3),    // 0x3E
    undoc(),                    // 0x3F
    op("RTI", Implicit, 1),     // 0x40
    op("EOR", IndirectX, 2),    // 0x41
    undoc(),                    // 0x42
    undoc(),                    // 0x43
    undoc(),                    // 0x44
    op("EOR", ZeroPage, 2),     // 0x45
    op("LSR", ZeroPage, 2),     // 0x46
    undoc(),                    // 0x47
    op("PHA", Implicit, 1),     // 0x48
    op("EOR", Immediate, 2),    // 0x49
    op("LSR", Accumulator, 1),  // 0x4A
    undoc(),                    // 0x4B
    op("JMP", Absolute, 3),     // 0x4C
    op("EOR", Absolute, 3),     // 0x4D
    op("LSR", Absolute, 3),     // 0x4E
    undoc(),                    // 0x4F
    op("BVC", Relative, 2),     // 0x50
    op("EOR", IndirectY, 2),    // 0x51
    undoc(),                    // 0x52
    undoc(),                    // 0x53
    undoc(),                    // 0x54
    op("EOR", ZeroPageX, 2),    // 0x55
    op("LSR", ZeroPageX, 2),    // 0x56
    undoc(),                    // 0x57
    op("CLI", Implicit, 1),     // 0x58
    op("EOR", AbsoluteY, 3),    // 0x59
    undoc(),                    // 0x5A
    undoc(),                    // 0x5B
    undoc(),                    // 0x5C
    op("EOR", AbsoluteX, 3),    // 0x5D
    op("LSR", AbsoluteX, 3),    // 0x5E
    undoc(),                    // 0x5F
    op("RTS", Implicit, 1),     // 0x60
    op("ADC", IndirectX, 2),    // 0x61
    undoc(),                    // 0x62
    undoc(),                    // 0x63
    undoc(),                    // 0x64
    op("ADC", ZeroPage, 2),     // 0x65
    op("ROR", ZeroPage, 2),     // 0x66
    undoc(),                    // 0x67
    op("PLA", Implicit, 1),     // 0x68
    op("ADC", Immediate, 2),    // 0x69
    op("ROR", Accumulator, 1),  // 0x6A
    undoc(),                    // 0x6B
    op("JMP", Indirect, 3),     // 0x6C
    op("ADC", Absolute, 3),     // 0x6D
    op("ROR", Absolute, 3),     // 0x6E
    undoc(),                    // 0x6F
    op("BVS", Relative, 2),     // 0x70
    op("ADC", IndirectY, 2),    // 0x71
    undoc(),                    // 0x72
    undoc(),                    // 0x73
    undoc(),                    // 0x74
    op("ADC", ZeroPageX, 2),    // 0x75
    op("ROR", ZeroPageX, 2),    // 0x76
    undoc(),                    // 0x77
    op("SEI", Implicit, 1),     // 0x78
    op("ADC", AbsoluteY, 3),    // 0x79
    undoc(),                    // 0x7A
    undoc(),                    // 0x7B
    undoc(),                    // 0x7C
    op("ADC", AbsoluteX, 3),    // 0x7D
    op("ROR", AbsoluteX, 3),    // 0x7E
    undoc(),                    // 0x7F
    undoc(),                    // 0x80
    op("STA", IndirectX, 2),    // 0x81
    undoc(),                    // 0x82
    undoc(),                    // 0x83
    op("STY", ZeroPage, 2),     // 0x84
    op("STA", ZeroPage, 2),     // 0x85
    op("STX", ZeroPage, 2),     // 0x86
    undoc(),                    // 0x87
    op("DEY", Implicit, 1),     // 0x88
    undoc(),                    // 0x89
    op("TXA", Implicit, 1),     // 0x8A
    undoc(),                    // 0x8B
    op("STY", Absolute, 3),     // 0x8C
    op("STA", Absolute, 3),     // 0x8D
    op("STX", Absolute, 3),     // 0x8E
    undoc(),                    // 0x8F
    op("BCC", Relative, 2),     // 0x90
    op("STA", IndirectY, 2),    // 0x91
    undoc(),                    // 0x92
    undoc(),                    // 0x93
    op("STY", ZeroPageX, 2),    // 0x94
    op("STA", ZeroPageX, 2),    // 0x95
    op("STX", ZeroPageY, 2),    // 0x96
    undoc(),                    // 0x97
    op("TYA", Implicit, 1),     // 0x98
    op("STA", AbsoluteY, 3),    // 0x99
    op("TXS", Implicit, 1),     // 0x9A
    undoc(),                    // 0x9B
    undoc(),                    // 0x9C
    op("STA", AbsoluteX, 3),    // 0x9D
    undoc(),                    // 0x9E
    undoc(),                    // 0x9F
    op("LDY", Immediate, 2),    // 0xA0
    op("LDA", IndirectX, 2),    // 0xA1
    op("LDX", Immediate, 2),    // 0xA2
    undoc(),                    // 0xA3
    op("LDY", ZeroPage, 2),     // 0xA4
    op("LDA", ZeroPage, 2),     // 0xA5
    op("LDX", ZeroPage, 2),     // 0xA6
    undoc(),                    // 0xA7
    op("TAY", Implicit, 1),     // 0xA8
    op("LDA", Immediate, 2),    // 0xA9
    op("TAX", Implicit, 1),     // 0xAA
    undoc(),                    // 0xAB
    op("LDY", Absolute, 3),     // 0xAC
    op("LDA", Absolute, 3),     // 0xAD
    op("LDX", Absolute, 3),     // 0xAE
    undoc(),                    // 0xAF
    op("BCS", Relative, 2),     // 0xB0
    op("LDA", IndirectY, 2),    // 0xB1
    undoc(),                    // 0xB2
    undoc(),                    // 0xB3
    op("LDY", ZeroPageX, 2),    // 0xB4
    op("LDA", ZeroPageX, 2),    // 0xB5
    op("LDX", ZeroPageY, 2),    // 0xB6
    undoc(),                    // 0xB7
    op("CLV", Implicit, 1),     // 0xB8
    op("LDA", AbsoluteY, 3),    // 0xB9
    op("TSX", Implicit, 1),     // 0xBA
    undoc(),                    // 0xBB
    op("LDY", AbsoluteX, 3),    // 0xBC
    op("LDA", AbsoluteX, 3),    // 0xBD
    op("LDX", AbsoluteY, 3),    // 0xBE
    undoc(),                    // 0xBF
    op("CPY", Immediate, 2),    // 0xC0
    op("CMP", IndirectX, 2),    // 0xC1
    undoc(),                    // 0xC2
    undoc(),                    // 0xC3
    op("CPY", ZeroPage, 2),     // 0xC4
    op("CMP", ZeroPage, 2),     // 0xC5
    op("DEC", ZeroPage, 2),     // 0xC6
    undoc(),                    // 0xC7
    op("INY", Implicit, 1),     // 0xC8
    op("CMP", Immediate, 2),    // 0xC9
    op("DEX", Implicit, 1),     // 0xCA
    undoc(),                    // 0xCB
    op("CPY", Absolute, 3),     // 0xCC
    op("CMP", Absolute, 3),     // 0xCD
    op("DEC", Absolute, 3),     // 0xCE
    undoc(),                    // 0xCF
    op("BNE", Relative, 2),     // 0xD0
    op("CMP", IndirectY, 2),    // 0xD1
    undoc(),                    // 0xD2
    undoc(),                    // 0xD3
    undoc(),                    // 0xD4
    op("CMP", ZeroPageX, 2),    // 0xD5
    op("DEC", ZeroPageX, 2),    // 0xD6
    undoc(),                    // 0xD7
    op("CLD", Implicit, 1),     // 0xD8
    op("CMP", AbsoluteY, 3),    // 0xD9
    undoc(),                    // 0xDA
    undoc(),                    // 0xDB
    undoc(),                    // 0xDC
    op("CMP", AbsoluteX, 3),    // 0xDD
    op("DEC", AbsoluteX, 3),    // 0xDE
    undoc(),                    // 0xDF
    op("CPX", Immediate, 2),    // 0xE0
    op("SBC", IndirectX, 2),    // 0xE1
    undoc(),                    // 0xE2
    undoc(),                    // 0xE3
    op("CPX", ZeroPage, 2),     // 0xE4
    op("SBC", ZeroPage, 2),     // 0xE5
    op("INC", ZeroPage, 2),     // 0xE6
    undoc(),                    // 0xE7
    op("INX", Implicit, 1),     // 0xE8
    op("SBC", Immediate, 2),    // 0xE9
    op("NOP", Implicit, 1),     // 0xEA
    undoc(),                    // 0xEB
    op("CPX", Absolute, 3),     // 0xEC
    op("SBC", Absolute, 3),     // 0xED
    op("INC", Absolute, 3),     // 0xEE
    undoc(),                    // 0xEF
    op("BEQ", Relative, 2),     // 0xF0
    op("SBC", IndirectY, 2),    // 0xF1
    undoc(),                    // 0xF2
    undoc(),                    // 0xF3
    undoc(),                    // 0xF4
    op("SBC", ZeroPageX, 2),    // 0xF5
    op("INC", ZeroPageX, 2),    // 0xF6
    undoc(),                    // 0xF7
    op("SED", Implicit, 1),     // 0xF8
    op("SBC", AbsoluteY, 3),    // 0xF9
    undoc(),                    // 0xFA
    undoc(),                    // 0xFB
    undoc(),                    // 0xFC
    op("SBC", AbsoluteX, 3),    // 0xFD
    op("INC", AbsoluteX, 3),    // 0xFE
    undoc(),                    // 0xFF
];

/// Finds the opcode byte for a (mnemonic, addressing mode) pair.
///
/// The mnemonic must already be uppercase; the assembler normalizes
/// mnemonics before lookup.
pub fn find_opcode(mnemonic: &str, mode: AddressingMode) -> Option<u8> {
    OPCODE_TABLE
        .iter()
        .position(|entry| {
            entry.documented && entry.mnemonic == mnemonic && entry.addressing_mode == mode
        })
        .map(|index| index as u8)
}

/// Whether any documented opcode carries this mnemonic.
pub fn mnemonic_exists(mnemonic: &str) -> bool {
    OPCODE_TABLE
        .iter()
        .any(|entry| entry.documented && entry.mnemonic == mnemonic)
}

/// Whether the mnemonic is a conditional branch (its only addressing mode is
/// relative).
pub fn is_branch(mnemonic: &str) -> bool {
    find_opcode(mnemonic, Relative).is_some()
}
