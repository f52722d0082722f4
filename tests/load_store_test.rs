//! Tests for LDX, LDY, STA, STX, and STY.

use emu6502::{Cpu, Memory, Status, LOAD_ADDRESS};

fn cpu_with_program(bytes: &[u8]) -> Cpu<Memory> {
    let mut memory = Memory::new();
    for (offset, &byte) in bytes.iter().enumerate() {
        memory.write(LOAD_ADDRESS + offset as u16, byte);
    }
    Cpu::new(memory)
}

#[test]
fn test_ldx_immediate_and_flags() {
    let mut cpu = cpu_with_program(&[0xA2, 0x80]); // LDX #$80

    cpu.step().unwrap();

    assert_eq!(cpu.registers.x, 0x80);
    assert!(cpu.registers.p.contains(Status::NEGATIVE));
}

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = cpu_with_program(&[0xB6, 0x10]); // LDX $10,Y
    cpu.registers.y = 0x02;
    cpu.memory.write(0x0012, 0x33);

    cpu.step().unwrap();

    assert_eq!(cpu.registers.x, 0x33);
}

#[test]
fn test_ldy_immediate_and_absolute_x() {
    let mut cpu = cpu_with_program(&[0xA0, 0x00, 0xBC, 0x00, 0x20]);
    cpu.memory.write(0x2003, 0x44);

    cpu.step().unwrap(); // LDY #$00
    assert_eq!(cpu.registers.y, 0x00);
    assert!(cpu.registers.p.contains(Status::ZERO));

    cpu.registers.x = 0x03;
    cpu.step().unwrap(); // LDY $2000,X
    assert_eq!(cpu.registers.y, 0x44);
    assert!(!cpu.registers.p.contains(Status::ZERO));
}

#[test]
fn test_sta_zero_page() {
    let mut cpu = cpu_with_program(&[0x85, 0x10]); // STA $10
    cpu.registers.a = 0x42;

    cpu.step().unwrap();

    assert_eq!(cpu.memory.read(0x0010), 0x42);
}

#[test]
fn test_sta_absolute_and_indexed() {
    let mut cpu = cpu_with_program(&[0x8D, 0x00, 0x20, 0x9D, 0x00, 0x20, 0x99, 0x00, 0x20]);
    cpu.registers.a = 0x0F;
    cpu.registers.x = 0x01;
    cpu.registers.y = 0x02;

    cpu.step().unwrap(); // STA $2000
    cpu.step().unwrap(); // STA $2000,X
    cpu.step().unwrap(); // STA $2000,Y

    assert_eq!(cpu.memory.read(0x2000), 0x0F);
    assert_eq!(cpu.memory.read(0x2001), 0x0F);
    assert_eq!(cpu.memory.read(0x2002), 0x0F);
}

#[test]
fn test_sta_indirect_y() {
    let mut cpu = cpu_with_program(&[0x91, 0x40]); // STA ($40),Y
    cpu.registers.a = 0x7E;
    cpu.registers.y = 0x01;
    cpu.memory.write(0x0040, 0x00);
    cpu.memory.write(0x0041, 0x50);

    cpu.step().unwrap();

    assert_eq!(cpu.memory.read(0x5001), 0x7E);
}

#[test]
fn test_stores_do_not_touch_flags() {
    let mut cpu = cpu_with_program(&[0x85, 0x10, 0x86, 0x11, 0x84, 0x12]);
    cpu.registers.a = 0x00; // would set Z if stores updated flags
    cpu.registers.x = 0x80; // would set N
    cpu.registers.y = 0x01;
    let flags_before = cpu.registers.p;

    cpu.step().unwrap(); // STA $10
    cpu.step().unwrap(); // STX $11
    cpu.step().unwrap(); // STY $12

    assert_eq!(cpu.registers.p, flags_before);
    assert_eq!(cpu.memory.read(0x0010), 0x00);
    assert_eq!(cpu.memory.read(0x0011), 0x80);
    assert_eq!(cpu.memory.read(0x0012), 0x01);
}

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = cpu_with_program(&[0x96, 0x20]); // STX $20,Y
    cpu.registers.x = 0xAB;
    cpu.registers.y = 0x05;

    cpu.step().unwrap();

    assert_eq!(cpu.memory.read(0x0025), 0xAB);
}
