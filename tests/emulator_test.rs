//! Facade tests: assemble/load/execute flows, status and hexdump projection,
//! and the three debug channels.

use emu6502::{assemble, Emulator, LOAD_ADDRESS};
use std::cell::RefCell;
use std::rc::Rc;

fn run_program(source: &str) -> Emulator {
    let program = assemble(source).unwrap();
    let mut emulator = Emulator::new();
    emulator.reset();
    emulator.load(&program.bytes).unwrap();
    emulator.execute().unwrap();
    emulator
}

#[test]
fn test_branch_taken_skips_first_store() {
    let emulator = run_program(
        "LDA #$02\nCMP #$01\nBNE FOO\nLDA #$01\nSTA $00\nBRK\nFOO: LDA #$01\nSTA $01\nBRK",
    );

    assert_eq!(emulator.cpu().memory.read(0x0001), 0x01);
    assert_eq!(emulator.cpu().memory.read(0x0000), 0x00);
}

#[test]
fn test_branch_not_taken_runs_fall_through() {
    let emulator = run_program(
        "LDA #$01\nCMP #$01\nBNE FOO\nLDA #$01\nSTA $00\nBRK\nFOO: LDA #$01\nSTA $01\nBRK",
    );

    assert_eq!(emulator.cpu().memory.read(0x0000), 0x01);
    assert_eq!(emulator.cpu().memory.read(0x0001), 0x00);
}

#[test]
fn test_counting_loop_program() {
    let emulator = run_program("LDX #$00\nLOOP: INX\nCPX #$0A\nBNE LOOP\nSTX $42\nBRK");
    assert_eq!(emulator.cpu().memory.read(0x0042), 0x0A);
}

#[test]
fn test_cpu_status_after_program() {
    let emulator = run_program("LDA #$80\nBRK");
    let status = emulator.cpu_status();

    assert!(status.contains("A: $80"));
    // N was set by the load, B by the BRK.
    assert!(status.contains('N'));
    assert!(status.contains('B'));
}

#[test]
fn test_memory_hexdump_of_loaded_program() {
    let program = assemble("LDA #$02\nBRK").unwrap();
    let mut emulator = Emulator::new();
    emulator.load(&program.bytes).unwrap();

    let dump = emulator
        .memory_hexdump(LOAD_ADDRESS, LOAD_ADDRESS + 0x10)
        .unwrap();
    assert!(dump.starts_with("$8000: A9 02 00"));
}

#[test]
fn test_cpu_debug_channel_reports_instructions() {
    let events: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);

    let program = assemble("LDA #$02\nBRK").unwrap();
    let mut emulator = Emulator::new();
    emulator.load(&program.bytes).unwrap();
    emulator.set_cpu_debug_callback(move |msg| sink.borrow_mut().push(msg.to_string()));

    emulator.execute().unwrap();

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert!(events[0].contains("$8000"));
    assert!(events[0].contains("LDA #$02"));
    assert!(events[0].contains("before"));
    assert!(events[0].contains("after"));
    assert!(events[1].contains("BRK"));
}

#[test]
fn test_memory_debug_channel_reports_writes() {
    let events: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);

    let program = assemble("LDA #$2A\nSTA $10\nBRK").unwrap();
    let mut emulator = Emulator::new();
    emulator.load(&program.bytes).unwrap();
    emulator.set_memory_debug_callback(move |msg| sink.borrow_mut().push(msg.to_string()));

    emulator.execute().unwrap();

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0], "write $0010: $00 -> $2A");
}

#[test]
fn test_registers_debug_channel_snapshots_each_step() {
    let events: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);

    let program = assemble("LDX #$05\nBRK").unwrap();
    let mut emulator = Emulator::new();
    emulator.load(&program.bytes).unwrap();
    emulator.set_registers_debug_callback(move |msg| sink.borrow_mut().push(msg.to_string()));

    emulator.execute().unwrap();

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert!(events[0].contains("X=$05"));
    assert!(events[0].contains("PC=$8002"));
}

#[test]
fn test_debug_callback_replacement_is_last_set_wins() {
    let first: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let second: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let first_sink = Rc::clone(&first);
    let second_sink = Rc::clone(&second);

    let program = assemble("NOP\nBRK").unwrap();
    let mut emulator = Emulator::new();
    emulator.load(&program.bytes).unwrap();

    emulator.set_cpu_debug_callback(move |msg| first_sink.borrow_mut().push(msg.to_string()));
    emulator.set_cpu_debug_callback(move |msg| second_sink.borrow_mut().push(msg.to_string()));

    emulator.execute().unwrap();

    assert!(first.borrow().is_empty());
    assert_eq!(second.borrow().len(), 2);
}

#[test]
fn test_assemble_load_round_trip_is_deterministic() {
    let source = "START: LDA #$05\nSTA $20\nJMP DONE\nDONE: BRK";
    let first = assemble(source).unwrap();
    let second = assemble(source).unwrap();
    assert_eq!(first.bytes, second.bytes);
}
