//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR.
//!
//! All four are read-modify-write: they operate either on the accumulator or
//! on a memory location, spill the outgoing bit into carry, and recompute Z
//! and N from the result.

use crate::cpu::{Cpu, Operand};
use crate::memory::MemoryBus;
use crate::registers::Status;

/// ASL - Arithmetic Shift Left. Bit 7 goes to carry, bit 0 becomes 0.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    let result = value << 1;

    cpu.registers.p.set(Status::CARRY, value & 0x80 != 0);
    cpu.write_back(operand, result);
    cpu.registers.set_zero_negative(result);
}

/// LSR - Logical Shift Right. Bit 0 goes to carry, bit 7 becomes 0 (so N is
/// always cleared).
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    let result = value >> 1;

    cpu.registers.p.set(Status::CARRY, value & 0x01 != 0);
    cpu.write_back(operand, result);
    cpu.registers.set_zero_negative(result);
}

/// ROL - Rotate Left through carry.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    let carry_in = if cpu.registers.p.contains(Status::CARRY) {
        0x01
    } else {
        0x00
    };
    let result = (value << 1) | carry_in;

    cpu.registers.p.set(Status::CARRY, value & 0x80 != 0);
    cpu.write_back(operand, result);
    cpu.registers.set_zero_negative(result);
}

/// ROR - Rotate Right through carry.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    let carry_in = if cpu.registers.p.contains(Status::CARRY) {
        0x80
    } else {
        0x00
    };
    let result = (value >> 1) | carry_in;

    cpu.registers.p.set(Status::CARRY, value & 0x01 != 0);
    cpu.write_back(operand, result);
    cpu.registers.set_zero_negative(result);
}
