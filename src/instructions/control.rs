//! # Control Flow Instructions
//!
//! JMP, JSR, RTS, RTI, BRK, NOP.
//!
//! BRK acts as the program terminator in this core: it sets the B flag and
//! halts the execute loop. Interrupt vectoring is not modeled, so nothing is
//! pushed and PC is simply left past the BRK opcode.

use crate::cpu::{Cpu, Operand, StepOutcome};
use crate::memory::MemoryBus;
use crate::registers::Status;

/// BRK - halt execution. Sets the B flag.
pub(crate) fn brk<M: MemoryBus>(cpu: &mut Cpu<M>) -> StepOutcome {
    cpu.registers.p.insert(Status::BREAK);
    StepOutcome::Halted
}

/// JMP - unconditional jump.
///
/// The operand address is already fully resolved, including the indirect
/// mode's page-wrap quirk, so both forms reduce to a PC assignment.
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    cpu.registers.pc = cpu.operand_address(operand);
}

/// JSR - Jump to Subroutine.
///
/// Pushes the address of the instruction after the JSR, minus one; RTS adds
/// the one back. PC already sits past the operand here.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let return_address = cpu.registers.pc.wrapping_sub(1);
    cpu.stack_push_addr(return_address);
    cpu.registers.pc = cpu.operand_address(operand);
}

/// RTS - Return from Subroutine.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut Cpu<M>) {
    cpu.registers.pc = cpu.stack_pop_addr().wrapping_add(1);
}

/// RTI - Return from Interrupt.
///
/// Pulls the status register and then PC. Unlike RTS there is no +1: the
/// pushed PC is the exact resume address. The pulled status discards B and
/// forces the reserved bit.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut Cpu<M>) {
    let status = cpu.stack_pop();
    cpu.registers.p = Status::from_byte(status);
    cpu.registers.pc = cpu.stack_pop_addr();
}
