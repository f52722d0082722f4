//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! Arithmetic and logical operations: ADC, SBC, AND, ORA, EOR, CMP, CPX,
//! CPY, BIT.
//!
//! ADC and SBC always run in binary mode. The decimal flag survives
//! SED/CLD/PLP but never changes the arithmetic here.

use crate::cpu::{Cpu, Operand};
use crate::memory::MemoryBus;
use crate::registers::Status;

/// Shared core of ADC and SBC: A + value + carry-in.
///
/// Overflow is set when both operands share a sign and the result does not:
/// V = (A ^ result) & (value ^ result) & 0x80.
fn add_with_carry<M: MemoryBus>(cpu: &mut Cpu<M>, value: u8) {
    let a = cpu.registers.a;
    let carry_in = if cpu.registers.p.contains(Status::CARRY) {
        1
    } else {
        0
    };

    let sum = a as u16 + value as u16 + carry_in as u16;
    let result = sum as u8;

    cpu.registers.p.set(Status::CARRY, sum > 0xFF);
    cpu.registers
        .p
        .set(Status::OVERFLOW, (a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.registers.a = result;
    cpu.registers.set_zero_negative(result);
}

/// Shared core of CMP/CPX/CPY: flags from `register - value`.
///
/// Carry means no borrow (register >= value); Z and N come from the
/// difference. The register itself is untouched.
fn compare<M: MemoryBus>(cpu: &mut Cpu<M>, register: u8, value: u8) {
    cpu.registers.p.set(Status::CARRY, register >= value);
    cpu.registers
        .set_zero_negative(register.wrapping_sub(value));
}

/// ADC - Add with Carry. Flags: C, Z, V, N.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    add_with_carry(cpu, value);
}

/// SBC - Subtract with Carry. Flags: C, Z, V, N.
///
/// A - M - (1 - C) is the same operation as A + !M + C, so SBC reuses the
/// adder with the operand inverted.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    add_with_carry(cpu, !value);
}

/// AND - Logical AND with the accumulator. Flags: Z, N.
pub(crate) fn and<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let result = cpu.registers.a & cpu.operand_value(operand);
    cpu.registers.a = result;
    cpu.registers.set_zero_negative(result);
}

/// ORA - Logical inclusive OR with the accumulator. Flags: Z, N.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let result = cpu.registers.a | cpu.operand_value(operand);
    cpu.registers.a = result;
    cpu.registers.set_zero_negative(result);
}

/// EOR - Exclusive OR with the accumulator. Flags: Z, N.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let result = cpu.registers.a ^ cpu.operand_value(operand);
    cpu.registers.a = result;
    cpu.registers.set_zero_negative(result);
}

/// CMP - Compare accumulator. Flags: C, Z, N.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    let register = cpu.registers.a;
    compare(cpu, register, value);
}

/// CPX - Compare X register. Flags: C, Z, N.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    let register = cpu.registers.x;
    compare(cpu, register, value);
}

/// CPY - Compare Y register. Flags: C, Z, N.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    let register = cpu.registers.y;
    compare(cpu, register, value);
}

/// BIT - Bit test.
///
/// Z from A & M; N and V are copied straight from bits 7 and 6 of the
/// operand, not from the AND result.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut Cpu<M>, operand: Operand) {
    let value = cpu.operand_value(operand);
    cpu.registers
        .p
        .set(Status::ZERO, cpu.registers.a & value == 0);
    cpu.registers.p.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.registers.p.set(Status::OVERFLOW, value & 0x40 != 0);
}
