//! Memory round-trip and hexdump behavior through the public surface.

use emu6502::{Emulator, Memory, RangeError};

#[test]
fn test_write_read_round_trip_all_boundaries() {
    let mut memory = Memory::new();

    for addr in [0x0000u16, 0x00FF, 0x0100, 0x7FFF, 0x8000, 0xFFFF] {
        memory.write(addr, 0xA5);
        assert_eq!(memory.read(addr), 0xA5, "round trip at ${:04X}", addr);
    }
}

#[test]
fn test_hexdump_covers_exactly_the_range() {
    let mut emulator = Emulator::new();
    emulator.cpu_mut().memory.write(0x0000, 0x11);
    emulator.cpu_mut().memory.write(0x000F, 0xFF);

    let dump = emulator.memory_hexdump(0x0000, 0x0010).unwrap();

    // Exactly one 16-byte row.
    assert_eq!(dump.lines().count(), 1);
    assert_eq!(
        dump,
        "$0000: 11 00 00 00 00 00 00 00 00 00 00 00 00 00 00 FF"
    );
}

#[test]
fn test_hexdump_rejects_inverted_range() {
    let emulator = Emulator::new();

    assert_eq!(
        emulator.memory_hexdump(0x0010, 0x0000),
        Err(RangeError {
            start: 0x0010,
            end: 0x0000
        })
    );
}

#[test]
fn test_hexdump_rejects_empty_range() {
    let emulator = Emulator::new();
    assert!(emulator.memory_hexdump(0x0020, 0x0020).is_err());
}

#[test]
fn test_hexdump_partial_last_row() {
    let emulator = Emulator::new();

    let dump = emulator.memory_hexdump(0x0000, 0x0012).unwrap();
    let rows: Vec<&str> = dump.lines().collect();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], "$0010: 00 00");
}

#[test]
fn test_hexdump_error_is_descriptive() {
    let err = Memory::new().hexdump(0x0010, 0x0000).unwrap_err();
    assert!(err.to_string().contains("$0010"));
    assert!(err.to_string().contains("end must be greater than start"));
}
