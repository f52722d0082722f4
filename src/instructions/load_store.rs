//! # Load and Store Instructions
//!
//! LDA, LDX, LDY, STA, STX, STY.
//!
//! Loads recompute Z and N from the loaded value; stores affect no flags.

use crate::cpu::{Cpu, Operand};
use crate::memory::MemoryBus;

/// LDA - Load Accumulator. Flags: Z, N.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.registers.a = value;
    cpu.registers.set_zero_negative(value);
}

/// LDX - Load X Register. Flags: Z, N.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.registers.x = value;
    cpu.registers.set_zero_negative(value);
}

/// LDY - Load Y Register. Flags: Z, N.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.registers.y = value;
    cpu.registers.set_zero_negative(value);
}

/// STA - Store Accumulator. No flags.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let addr = cpu.operand_address(operand);
    cpu.memory.write(addr, cpu.registers.a);
}

/// STX - Store X Register. No flags.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let addr = cpu.operand_address(operand);
    cpu.memory.write(addr, cpu.registers.x);
}

/// STY - Store Y Register. No flags.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let addr = cpu.operand_address(operand);
    cpu.memory.write(addr, cpu.registers.y);
}
