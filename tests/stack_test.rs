//! Tests for the stack instructions PHA, PHP, PLA, and PLP.

use emu6502::{Cpu, Memory, Status, LOAD_ADDRESS};

fn cpu_with_program(bytes: &[u8]) -> Cpu<Memory> {
    let mut memory = Memory::new();
    for (offset, &byte) in bytes.iter().enumerate() {
        memory.write(LOAD_ADDRESS + offset as u16, byte);
    }
    Cpu::new(memory)
}

#[test]
fn test_pha_pushes_to_stack_page() {
    let mut cpu = cpu_with_program(&[0x48]); // PHA
    cpu.registers.a = 0x42;

    cpu.step().unwrap();

    assert_eq!(cpu.memory.read(0x01FF), 0x42);
    assert_eq!(cpu.registers.sp, 0xFE);
}

#[test]
fn test_pla_round_trip_and_flags() {
    let mut cpu = cpu_with_program(&[0x48, 0xA9, 0x01, 0x68]); // PHA, LDA #$01, PLA
    cpu.registers.a = 0x80;

    cpu.step().unwrap(); // push $80
    cpu.step().unwrap(); // overwrite A
    cpu.step().unwrap(); // pull $80 back

    assert_eq!(cpu.registers.a, 0x80);
    assert_eq!(cpu.registers.sp, 0xFF);
    assert!(cpu.registers.p.contains(Status::NEGATIVE));
}

#[test]
fn test_php_pushes_break_and_reserved() {
    let mut cpu = cpu_with_program(&[0x08]); // PHP
    cpu.registers.p = Status::RESERVED | Status::CARRY;

    cpu.step().unwrap();

    // Pushed copy carries B and the reserved bit; live flags are unchanged.
    assert_eq!(cpu.memory.read(0x01FF), 0b0011_0001);
    assert!(!cpu.registers.p.contains(Status::BREAK));
}

#[test]
fn test_plp_restores_flags_without_break() {
    let mut cpu = cpu_with_program(&[0x28]); // PLP
    cpu.memory.write(0x01FF, 0b1101_0011); // N, V, B, Z, C set in the byte
    cpu.registers.sp = 0xFE;

    cpu.step().unwrap();

    assert!(cpu.registers.p.contains(Status::NEGATIVE));
    assert!(cpu.registers.p.contains(Status::OVERFLOW));
    assert!(cpu.registers.p.contains(Status::ZERO));
    assert!(cpu.registers.p.contains(Status::CARRY));
    // B is not a stored flag and never survives a pull.
    assert!(!cpu.registers.p.contains(Status::BREAK));
    assert!(cpu.registers.p.contains(Status::RESERVED));
}

#[test]
fn test_stack_pointer_wraps() {
    let mut cpu = cpu_with_program(&[0x68]); // PLA with empty stack
    cpu.registers.sp = 0xFF;
    cpu.memory.write(0x0100, 0x77);

    cpu.step().unwrap();

    // SP wraps from $FF to $00 and reads the bottom of the stack page.
    assert_eq!(cpu.registers.sp, 0x00);
    assert_eq!(cpu.registers.a, 0x77);
}
