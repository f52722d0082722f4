//! # 6502 Assembler
//!
//! Converts assembly source text into binary machine code through four
//! explicit phases, each a pure function over the previous phase's output:
//!
//! 1. **Lex** ([`lexer`]): source text to typed tokens with line positions
//! 2. **Parse** ([`parser`]): tokens to one record per source line
//! 3. **Pass 1** ([`encoder::layout`]): size every statement, collect labels
//! 4. **Pass 2** ([`encoder::emit`]): resolve labels and emit bytes
//!
//! Each `assemble` call builds a fresh symbol table; no assembler state
//! survives between calls, so assembling the same source twice produces
//! byte-identical images.
//!
//! Programs are laid out from [`crate::LOAD_ADDRESS`], the same convention
//! `Emulator::load` uses to place the image.
//!
//! # Examples
//!
//! ```
//! use emu6502::assembler::assemble;
//!
//! let output = assemble("LDA #$42\nBRK").unwrap();
//! assert_eq!(output.bytes, vec![0xA9, 0x42, 0x00]);
//!
//! let err = assemble("LDA #$42\nBNE MISSING").unwrap_err();
//! assert_eq!(err.line, 2);
//! ```

pub mod encoder;
pub mod lexer;
pub mod parser;
pub mod symbol_table;

use std::fmt;

/// Complete output from assembling source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerOutput {
    /// Assembled machine code, laid out from [`crate::LOAD_ADDRESS`].
    pub bytes: Vec<u8>,

    /// Every label defined by the program, with its resolved address.
    pub symbols: Vec<Symbol>,
}

/// A symbol table entry mapping a label to an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Label name. Labels are case-sensitive.
    pub name: String,

    /// Resolved memory address for this label.
    pub address: u16,

    /// Source line (1-indexed) where the label was defined.
    pub defined_at: usize,
}

/// Classification of assembly errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyErrorKind {
    /// Malformed source the lexer or parser could not make sense of.
    Syntax,
    /// The instruction name is not a 6502 mnemonic.
    UnknownMnemonic,
    /// The operand shape or value is not valid for this mnemonic.
    InvalidOperand,
    /// A label was defined more than once.
    DuplicateLabel,
    /// An operand referenced a label that is never defined.
    UndefinedLabel,
    /// A branch target is further than a signed 8-bit offset can reach.
    BranchOutOfRange,
}

impl fmt::Display for AssemblyErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            AssemblyErrorKind::Syntax => "syntax error",
            AssemblyErrorKind::UnknownMnemonic => "unknown mnemonic",
            AssemblyErrorKind::InvalidOperand => "invalid operand",
            AssemblyErrorKind::DuplicateLabel => "duplicate label",
            AssemblyErrorKind::UndefinedLabel => "undefined label",
            AssemblyErrorKind::BranchOutOfRange => "branch out of range",
        };
        f.write_str(text)
    }
}

/// An error encountered during assembly.
///
/// Always recoverable: the assembler reports the first error it hits as a
/// value and leaves no partial state behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyError {
    /// Error classification.
    pub kind: AssemblyErrorKind,

    /// Source line number where the error occurred (1-indexed).
    pub line: usize,

    /// Human-readable description.
    pub message: String,
}

impl AssemblyError {
    pub(crate) fn new(kind: AssemblyErrorKind, line: usize, message: impl Into<String>) -> Self {
        AssemblyError {
            kind,
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.message)
    }
}

impl std::error::Error for AssemblyError {}

/// Assembles source code into machine code.
///
/// Returns the byte image plus the resolved symbol table on success, or the
/// first [`AssemblyError`] encountered.
pub fn assemble(source: &str) -> Result<AssemblerOutput, AssemblyError> {
    let tokens = lexer::tokenize(source)?;
    let lines = parser::parse(tokens)?;
    let symbols = encoder::layout(&lines)?;
    let bytes = encoder::emit(&lines, &symbols)?;

    Ok(AssemblerOutput {
        bytes,
        symbols: symbols.into_symbols(),
    })
}

/// Validates a label name.
///
/// Labels must start with a letter, contain only letters, digits, and
/// underscores, and not exceed 32 characters.
pub(crate) fn validate_label(name: &str) -> Result<(), String> {
    if name.len() > 32 {
        return Err(format!("label name too long (max 32 characters): {}", name));
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        Some(first) => return Err(format!("label must start with a letter, not '{}'", first)),
        None => return Err("label name cannot be empty".to_string()),
    }

    for ch in chars {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(format!("label contains invalid character '{}'", ch));
        }
    }

    Ok(())
}
