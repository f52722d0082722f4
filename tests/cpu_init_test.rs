//! CPU initialization and reset state tests.

use emu6502::{Emulator, Status, LOAD_ADDRESS};

#[test]
fn test_canonical_reset_state() {
    let mut emulator = Emulator::new();
    emulator.reset();

    let registers = emulator.cpu().registers;
    assert_eq!(registers.a, 0x00);
    assert_eq!(registers.x, 0x00);
    assert_eq!(registers.y, 0x00);
    assert_eq!(registers.sp, 0xFF);
    assert_eq!(registers.pc, LOAD_ADDRESS);

    // All flags clear except the reserved bit.
    assert_eq!(registers.p, Status::RESERVED);
}

#[test]
fn test_reset_is_idempotent() {
    let mut emulator = Emulator::new();

    emulator.reset();
    let first_status = emulator.cpu_status();
    let first_dump = emulator.memory_hexdump(0x0000, 0x0100).unwrap();

    emulator.reset();
    assert_eq!(emulator.cpu_status(), first_status);
    assert_eq!(emulator.memory_hexdump(0x0000, 0x0100).unwrap(), first_dump);
}

#[test]
fn test_reset_clears_dirty_state() {
    let mut emulator = Emulator::new();

    emulator.cpu_mut().memory.write(0x0042, 0xAB);
    emulator.cpu_mut().registers.a = 0x99;
    emulator.cpu_mut().registers.p = Status::RESERVED | Status::CARRY | Status::NEGATIVE;

    emulator.reset();

    assert_eq!(emulator.cpu().memory.read(0x0042), 0x00);
    assert_eq!(emulator.cpu().registers.a, 0x00);
    assert_eq!(emulator.cpu().registers.p, Status::RESERVED);
}

#[test]
fn test_cpu_status_reports_reset_values() {
    let mut emulator = Emulator::new();
    emulator.reset();

    let status = emulator.cpu_status();
    assert!(status.contains("A: $00"));
    assert!(status.contains("X: $00"));
    assert!(status.contains("Y: $00"));
    assert!(status.contains("SP: $FF"));
    assert!(status.contains("PC: $8000"));
    assert!(status.contains("nv-bdizc"));
}
