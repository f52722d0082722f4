//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX, TXS.
//!
//! Every transfer recomputes Z and N from the copied value except TXS,
//! which moves X into the stack pointer without touching any flags.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// TAX - Transfer Accumulator to X. Flags: Z, N.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let value = cpu.registers.a;
    cpu.registers.x = value;
    cpu.registers.set_zero_negative(value);
}

/// TAY - Transfer Accumulator to Y. Flags: Z, N.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let value = cpu.registers.a;
    cpu.registers.y = value;
    cpu.registers.set_zero_negative(value);
}

/// TXA - Transfer X to Accumulator. Flags: Z, N.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let value = cpu.registers.x;
    cpu.registers.a = value;
    cpu.registers.set_zero_negative(value);
}

/// TYA - Transfer Y to Accumulator. Flags: Z, N.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let value = cpu.registers.y;
    cpu.registers.a = value;
    cpu.registers.set_zero_negative(value);
}

/// TSX - Transfer Stack Pointer to X. Flags: Z, N.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let value = cpu.registers.sp;
    cpu.registers.x = value;
    cpu.registers.set_zero_negative(value);
}

/// TXS - Transfer X to Stack Pointer. No flags.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.registers.sp = cpu.registers.x;
}
