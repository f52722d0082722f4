//! # Increment and Decrement Instructions
//!
//! INC, DEC on memory; INX, INY, DEX, DEY on the index registers.
//! All wrap at the byte boundary and recompute Z and N.

use crate::cpu::{Cpu, Operand};
use crate::memory::MemoryBus;

/// INC - Increment a memory location. Flags: Z, N.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let addr = cpu.operand_address(operand);
    let result = cpu.memory.read(addr).wrapping_add(1);
    cpu.memory.write(addr, result);
    cpu.registers.set_zero_negative(result);
}

/// DEC - Decrement a memory location. Flags: Z, N.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let addr = cpu.operand_address(operand);
    let result = cpu.memory.read(addr).wrapping_sub(1);
    cpu.memory.write(addr, result);
    cpu.registers.set_zero_negative(result);
}

/// INX - Increment X. Flags: Z, N.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let result = cpu.registers.x.wrapping_add(1);
    cpu.registers.x = result;
    cpu.registers.set_zero_negative(result);
}

/// INY - Increment Y. Flags: Z, N.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let result = cpu.registers.y.wrapping_add(1);
    cpu.registers.y = result;
    cpu.registers.set_zero_negative(result);
}

/// DEX - Decrement X. Flags: Z, N.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let result = cpu.registers.x.wrapping_sub(1);
    cpu.registers.x = result;
    cpu.registers.set_zero_negative(result);
}

/// DEY - Decrement Y. Flags: Z, N.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let result = cpu.registers.y.wrapping_sub(1);
    cpu.registers.y = result;
    cpu.registers.set_zero_negative(result);
}
