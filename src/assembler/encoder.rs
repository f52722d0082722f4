//! Two-pass instruction encoding.
//!
//! Pass 1 ([`layout`]) walks the parsed lines with a location counter,
//! sizing every statement and recording each label definition. Pass 2
//! ([`emit`]) walks the same lines again, resolves label references through
//! the now-complete symbol table, and emits the final bytes.
//!
//! Both passes size an instruction through the same mode selection, so a
//! statement can never change size between passes.

use super::parser::{OperandExpr, SourceLine, Statement, Value};
use super::symbol_table::SymbolTable;
use super::{AssemblyError, AssemblyErrorKind};
use crate::addressing::AddressingMode;
use crate::opcodes::{find_opcode, is_branch, mnemonic_exists};
use crate::LOAD_ADDRESS;

/// Pass 1: computes the address of every statement and collects labels.
pub(crate) fn layout(lines: &[SourceLine]) -> Result<SymbolTable, AssemblyError> {
    let mut symbols = SymbolTable::new();
    let mut counter = LOAD_ADDRESS;

    for line in lines {
        if let Some(label) = &line.label {
            symbols
                .define(label.clone(), counter, line.line_number)
                .map_err(|existing| {
                    AssemblyError::new(
                        AssemblyErrorKind::DuplicateLabel,
                        line.line_number,
                        format!(
                            "label `{}` already defined on line {}",
                            label, existing.defined_at
                        ),
                    )
                })?;
        }

        if let Some(statement) = &line.statement {
            counter = counter.wrapping_add(statement_size(statement, line.line_number)?);
        }
    }

    Ok(symbols)
}

/// Pass 2: encodes every statement into its final bytes.
pub(crate) fn emit(
    lines: &[SourceLine],
    symbols: &SymbolTable,
) -> Result<Vec<u8>, AssemblyError> {
    let mut bytes = Vec::new();
    let mut counter = LOAD_ADDRESS;

    for line in lines {
        let Some(statement) = &line.statement else {
            continue;
        };
        let line_number = line.line_number;

        match statement {
            Statement::Byte(values) => {
                bytes.extend_from_slice(values);
                counter = counter.wrapping_add(values.len() as u16);
            }
            Statement::Word(values) => {
                for value in values {
                    bytes.extend_from_slice(&value.to_le_bytes());
                }
                counter = counter.wrapping_add(values.len() as u16 * 2);
            }
            Statement::Instruction { mnemonic, operand } => {
                let (opcode, mode) = select_encoding(mnemonic, operand, line_number)?;
                bytes.push(opcode);

                match mode {
                    AddressingMode::Implicit | AddressingMode::Accumulator => {}

                    AddressingMode::Immediate => {
                        let OperandExpr::Immediate(value) = operand else {
                            unreachable!("immediate mode selected for non-immediate operand");
                        };
                        bytes.push(*value as u8);
                    }

                    // Branch displacement from the end of this 2-byte
                    // instruction, truncated to signed 8 bits.
                    AddressingMode::Relative => {
                        let target = resolve(operand_value(operand), symbols, line_number)?;
                        let displacement = target as i32 - (counter.wrapping_add(2)) as i32;
                        if !(-128..=127).contains(&displacement) {
                            return Err(AssemblyError::new(
                                AssemblyErrorKind::BranchOutOfRange,
                                line_number,
                                format!(
                                    "branch target ${:04X} is {} bytes away (range is -128..=127)",
                                    target, displacement
                                ),
                            ));
                        }
                        bytes.push(displacement as i8 as u8);
                    }

                    AddressingMode::ZeroPage
                    | AddressingMode::ZeroPageX
                    | AddressingMode::ZeroPageY
                    | AddressingMode::IndirectX
                    | AddressingMode::IndirectY => {
                        let value = resolve(operand_value(operand), symbols, line_number)?;
                        if value > 0xFF {
                            return Err(AssemblyError::new(
                                AssemblyErrorKind::InvalidOperand,
                                line_number,
                                format!("operand ${:04X} does not fit in one byte", value),
                            ));
                        }
                        bytes.push(value as u8);
                    }

                    AddressingMode::Absolute
                    | AddressingMode::AbsoluteX
                    | AddressingMode::AbsoluteY
                    | AddressingMode::Indirect => {
                        let value = resolve(operand_value(operand), symbols, line_number)?;
                        bytes.extend_from_slice(&value.to_le_bytes());
                    }
                }

                counter = counter.wrapping_add(1 + mode.operand_size() as u16);
            }
        }
    }

    Ok(bytes)
}

fn statement_size(statement: &Statement, line: usize) -> Result<u16, AssemblyError> {
    match statement {
        Statement::Instruction { mnemonic, operand } => {
            let (_, mode) = select_encoding(mnemonic, operand, line)?;
            Ok(1 + mode.operand_size() as u16)
        }
        Statement::Byte(values) => Ok(values.len() as u16),
        Statement::Word(values) => Ok(values.len() as u16 * 2),
    }
}

/// Maps (mnemonic, operand shape) to a concrete opcode and addressing mode.
///
/// A bare value becomes zero-page when it is a one-byte literal and the
/// mnemonic has a zero-page form, absolute otherwise; for branch mnemonics
/// it is always a relative target. Label references size as absolute since
/// code lives above the zero page.
fn select_encoding(
    mnemonic: &str,
    operand: &OperandExpr,
    line: usize,
) -> Result<(u8, AddressingMode), AssemblyError> {
    if !mnemonic_exists(mnemonic) {
        return Err(AssemblyError::new(
            AssemblyErrorKind::UnknownMnemonic,
            line,
            format!("unknown mnemonic `{}`", mnemonic),
        ));
    }

    let mode = match operand {
        OperandExpr::None => {
            if find_opcode(mnemonic, AddressingMode::Implicit).is_some() {
                AddressingMode::Implicit
            } else {
                // `LSR` with no operand means `LSR A`.
                AddressingMode::Accumulator
            }
        }
        OperandExpr::Accumulator => AddressingMode::Accumulator,
        OperandExpr::Immediate(_) => AddressingMode::Immediate,
        OperandExpr::Direct(value) => {
            if is_branch(mnemonic) {
                AddressingMode::Relative
            } else if fits_zero_page(value)
                && find_opcode(mnemonic, AddressingMode::ZeroPage).is_some()
            {
                AddressingMode::ZeroPage
            } else {
                AddressingMode::Absolute
            }
        }
        OperandExpr::DirectX(value) => {
            if fits_zero_page(value) && find_opcode(mnemonic, AddressingMode::ZeroPageX).is_some()
            {
                AddressingMode::ZeroPageX
            } else {
                AddressingMode::AbsoluteX
            }
        }
        OperandExpr::DirectY(value) => {
            if fits_zero_page(value) && find_opcode(mnemonic, AddressingMode::ZeroPageY).is_some()
            {
                AddressingMode::ZeroPageY
            } else {
                AddressingMode::AbsoluteY
            }
        }
        OperandExpr::Indirect(_) => AddressingMode::Indirect,
        OperandExpr::IndexedIndirect(_) => AddressingMode::IndirectX,
        OperandExpr::IndirectIndexed(_) => AddressingMode::IndirectY,
    };

    match find_opcode(mnemonic, mode) {
        Some(opcode) => Ok((opcode, mode)),
        None => Err(AssemblyError::new(
            AssemblyErrorKind::InvalidOperand,
            line,
            format!("`{}` does not support this operand form", mnemonic),
        )),
    }
}

fn fits_zero_page(value: &Value) -> bool {
    matches!(value, Value::Literal(v) if *v <= 0xFF)
}

/// The value expression carried by an address-shaped operand.
fn operand_value(operand: &OperandExpr) -> &Value {
    match operand {
        OperandExpr::Direct(value)
        | OperandExpr::DirectX(value)
        | OperandExpr::DirectY(value)
        | OperandExpr::Indirect(value)
        | OperandExpr::IndexedIndirect(value)
        | OperandExpr::IndirectIndexed(value) => value,
        _ => unreachable!("operand shape carries no value expression"),
    }
}

/// Resolves a literal or label reference to its numeric value.
fn resolve(value: &Value, symbols: &SymbolTable, line: usize) -> Result<u16, AssemblyError> {
    match value {
        Value::Literal(v) => Ok(*v),
        Value::Symbol(name) => symbols.address_of(name).ok_or_else(|| {
            AssemblyError::new(
                AssemblyErrorKind::UndefinedLabel,
                line,
                format!("undefined label `{}`", name),
            )
        }),
    }
}
