//! Tests for the shift and rotate instructions ASL, LSR, ROL, ROR, in both
//! accumulator and memory forms.

use emu6502::{Cpu, Memory, Status, LOAD_ADDRESS};

fn cpu_with_program(bytes: &[u8]) -> Cpu<Memory> {
    let mut memory = Memory::new();
    for (offset, &byte) in bytes.iter().enumerate() {
        memory.write(LOAD_ADDRESS + offset as u16, byte);
    }
    Cpu::new(memory)
}

#[test]
fn test_asl_accumulator() {
    let mut cpu = cpu_with_program(&[0x0A]); // ASL A
    cpu.registers.a = 0x81;

    cpu.step().unwrap();

    assert_eq!(cpu.registers.a, 0x02);
    assert!(cpu.registers.p.contains(Status::CARRY)); // bit 7 spilled out
    assert!(!cpu.registers.p.contains(Status::NEGATIVE));
}

#[test]
fn test_asl_memory() {
    let mut cpu = cpu_with_program(&[0x06, 0x10]); // ASL $10
    cpu.memory.write(0x0010, 0x40);

    cpu.step().unwrap();

    assert_eq!(cpu.memory.read(0x0010), 0x80);
    assert!(!cpu.registers.p.contains(Status::CARRY));
    assert!(cpu.registers.p.contains(Status::NEGATIVE));
}

#[test]
fn test_lsr_accumulator() {
    let mut cpu = cpu_with_program(&[0x4A]); // LSR A
    cpu.registers.a = 0x01;

    cpu.step().unwrap();

    assert_eq!(cpu.registers.a, 0x00);
    assert!(cpu.registers.p.contains(Status::CARRY));
    assert!(cpu.registers.p.contains(Status::ZERO));
    // LSR can never produce a negative result.
    assert!(!cpu.registers.p.contains(Status::NEGATIVE));
}

#[test]
fn test_rol_through_carry() {
    let mut cpu = cpu_with_program(&[0x2A]); // ROL A
    cpu.registers.a = 0x80;
    cpu.registers.p.insert(Status::CARRY);

    cpu.step().unwrap();

    // Carry rotates into bit 0; old bit 7 becomes the new carry.
    assert_eq!(cpu.registers.a, 0x01);
    assert!(cpu.registers.p.contains(Status::CARRY));
}

#[test]
fn test_ror_through_carry() {
    let mut cpu = cpu_with_program(&[0x6A]); // ROR A
    cpu.registers.a = 0x01;
    cpu.registers.p.insert(Status::CARRY);

    cpu.step().unwrap();

    assert_eq!(cpu.registers.a, 0x80);
    assert!(cpu.registers.p.contains(Status::CARRY));
    assert!(cpu.registers.p.contains(Status::NEGATIVE));
}

#[test]
fn test_ror_memory_without_carry() {
    let mut cpu = cpu_with_program(&[0x66, 0x10]); // ROR $10
    cpu.memory.write(0x0010, 0x02);

    cpu.step().unwrap();

    assert_eq!(cpu.memory.read(0x0010), 0x01);
    assert!(!cpu.registers.p.contains(Status::CARRY));
}

#[test]
fn test_shift_absolute_indexed() {
    let mut cpu = cpu_with_program(&[0x1E, 0x00, 0x20]); // ASL $2000,X
    cpu.registers.x = 0x02;
    cpu.memory.write(0x2002, 0x01);

    cpu.step().unwrap();

    assert_eq!(cpu.memory.read(0x2002), 0x02);
}
