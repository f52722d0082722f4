//! # Flag Manipulation Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED, CLV. Each touches exactly one status bit.
//!
//! SED/CLD only store the decimal flag; arithmetic stays binary either way.
//! There is no "set overflow" instruction on the 6502 - V is only set by
//! arithmetic, BIT, or a pulled status byte.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;
use crate::registers::Status;

/// CLC - Clear Carry.
pub(crate) fn clc<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.registers.p.remove(Status::CARRY);
}

/// SEC - Set Carry.
pub(crate) fn sec<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.registers.p.insert(Status::CARRY);
}

/// CLI - Clear Interrupt Disable.
pub(crate) fn cli<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.registers.p.remove(Status::INTERRUPT_DISABLE);
}

/// SEI - Set Interrupt Disable.
pub(crate) fn sei<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.registers.p.insert(Status::INTERRUPT_DISABLE);
}

/// CLD - Clear Decimal Mode.
pub(crate) fn cld<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.registers.p.remove(Status::DECIMAL);
}

/// SED - Set Decimal Mode.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.registers.p.insert(Status::DECIMAL);
}

/// CLV - Clear Overflow.
pub(crate) fn clv<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.registers.p.remove(Status::OVERFLOW);
}
