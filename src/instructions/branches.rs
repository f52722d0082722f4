//! # Branch Instructions
//!
//! Conditional branches: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS.
//!
//! All branches use relative addressing: a signed 8-bit displacement from
//! the address of the instruction that follows the branch. PC is already
//! past the branch when a handler runs, so taking the branch is a single
//! signed add. No flags are affected.

use crate::cpu::{Cpu, Operand};
use crate::memory::MemoryBus;
use crate::registers::Status;

fn branch_if<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand, condition: bool) {
    if !condition {
        return;
    }
    let Operand::Relative(offset) = operand else {
        unreachable!("branch decoded with a non-relative operand");
    };
    cpu.registers.pc = cpu.registers.pc.wrapping_add_signed(offset as i16);
}

/// BCC - Branch if Carry Clear.
pub(crate) fn bcc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let condition = !cpu.registers.p.contains(Status::CARRY);
    branch_if(cpu, operand, condition);
}

/// BCS - Branch if Carry Set.
pub(crate) fn bcs<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let condition = cpu.registers.p.contains(Status::CARRY);
    branch_if(cpu, operand, condition);
}

/// BEQ - Branch if Equal (zero flag set).
pub(crate) fn beq<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let condition = cpu.registers.p.contains(Status::ZERO);
    branch_if(cpu, operand, condition);
}

/// BNE - Branch if Not Equal (zero flag clear).
pub(crate) fn bne<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let condition = !cpu.registers.p.contains(Status::ZERO);
    branch_if(cpu, operand, condition);
}

/// BMI - Branch if Minus (negative flag set).
pub(crate) fn bmi<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let condition = cpu.registers.p.contains(Status::NEGATIVE);
    branch_if(cpu, operand, condition);
}

/// BPL - Branch if Plus (negative flag clear).
pub(crate) fn bpl<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let condition = !cpu.registers.p.contains(Status::NEGATIVE);
    branch_if(cpu, operand, condition);
}

/// BVC - Branch if Overflow Clear.
pub(crate) fn bvc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let condition = !cpu.registers.p.contains(Status::OVERFLOW);
    branch_if(cpu, operand, condition);
}

/// BVS - Branch if Overflow Set.
pub(crate) fn bvs<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let condition = cpu.registers.p.contains(Status::OVERFLOW);
    branch_if(cpu, operand, condition);
}
