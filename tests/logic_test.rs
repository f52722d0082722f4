//! Tests for the logical instructions AND, ORA, EOR, and BIT.

use emu6502::{Cpu, Memory, Status, LOAD_ADDRESS};

fn cpu_with_program(bytes: &[u8]) -> Cpu<Memory> {
    let mut memory = Memory::new();
    for (offset, &byte) in bytes.iter().enumerate() {
        memory.write(LOAD_ADDRESS + offset as u16, byte);
    }
    Cpu::new(memory)
}

#[test]
fn test_and() {
    let mut cpu = cpu_with_program(&[0x29, 0x0F]); // AND #$0F
    cpu.registers.a = 0xF5;

    cpu.step().unwrap();

    assert_eq!(cpu.registers.a, 0x05);
    assert!(!cpu.registers.p.contains(Status::ZERO));
    assert!(!cpu.registers.p.contains(Status::NEGATIVE));
}

#[test]
fn test_and_zero_result() {
    let mut cpu = cpu_with_program(&[0x29, 0x0F]); // AND #$0F
    cpu.registers.a = 0xF0;

    cpu.step().unwrap();

    assert_eq!(cpu.registers.a, 0x00);
    assert!(cpu.registers.p.contains(Status::ZERO));
}

#[test]
fn test_ora() {
    let mut cpu = cpu_with_program(&[0x09, 0x80]); // ORA #$80
    cpu.registers.a = 0x01;

    cpu.step().unwrap();

    assert_eq!(cpu.registers.a, 0x81);
    assert!(cpu.registers.p.contains(Status::NEGATIVE));
}

#[test]
fn test_eor() {
    let mut cpu = cpu_with_program(&[0x49, 0xFF]); // EOR #$FF
    cpu.registers.a = 0x0F;

    cpu.step().unwrap();

    assert_eq!(cpu.registers.a, 0xF0);
    assert!(cpu.registers.p.contains(Status::NEGATIVE));
}

#[test]
fn test_eor_self_clears() {
    let mut cpu = cpu_with_program(&[0x45, 0x10]); // EOR $10
    cpu.registers.a = 0x3C;
    cpu.memory.write(0x0010, 0x3C);

    cpu.step().unwrap();

    assert_eq!(cpu.registers.a, 0x00);
    assert!(cpu.registers.p.contains(Status::ZERO));
}

#[test]
fn test_bit_copies_high_bits() {
    let mut cpu = cpu_with_program(&[0x24, 0x10]); // BIT $10
    cpu.registers.a = 0xFF;
    cpu.memory.write(0x0010, 0xC0); // bits 7 and 6 set

    cpu.step().unwrap();

    assert!(cpu.registers.p.contains(Status::NEGATIVE));
    assert!(cpu.registers.p.contains(Status::OVERFLOW));
    assert!(!cpu.registers.p.contains(Status::ZERO));
    assert_eq!(cpu.registers.a, 0xFF); // accumulator untouched
}

#[test]
fn test_bit_zero_from_and() {
    let mut cpu = cpu_with_program(&[0x2C, 0x00, 0x20]); // BIT $2000
    cpu.registers.a = 0x0F;
    cpu.memory.write(0x2000, 0x30);

    cpu.step().unwrap();

    // A & M == 0 even though M itself is non-zero.
    assert!(cpu.registers.p.contains(Status::ZERO));
    assert!(!cpu.registers.p.contains(Status::NEGATIVE));
    assert!(!cpu.registers.p.contains(Status::OVERFLOW));
}
