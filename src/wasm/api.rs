//! WASM API for the 6502 emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, state
//! inspection, and assembly. Debug observers arrive as `js_sys::Function`
//! values and are invoked with one string argument per event.

use crate::assembler::assemble;
use js_sys::Function;
use wasm_bindgen::prelude::*;

/// Result of an assembly operation, shaped for JavaScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct AssemblyResult {
    success: bool,
    bytes: Vec<u8>,
    error_line: Option<u32>,
    error_message: Option<String>,
}

#[wasm_bindgen]
impl AssemblyResult {
    #[wasm_bindgen(getter)]
    pub fn success(&self) -> bool {
        self.success
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn error_line(&self) -> Option<u32> {
        self.error_line
    }

    #[wasm_bindgen(getter)]
    pub fn error_message(&self) -> Option<String> {
        self.error_message.clone()
    }
}

/// Main emulator interface for JavaScript.
#[wasm_bindgen]
pub struct Emulator {
    inner: crate::Emulator,
}

#[wasm_bindgen]
impl Emulator {
    /// Creates a new emulator instance.
    #[wasm_bindgen(constructor)]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Emulator {
        Emulator {
            inner: crate::Emulator::new(),
        }
    }

    /// Zeroes memory and restores the canonical register state.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Copies an assembled image into memory and points PC at it.
    pub fn load(&mut self, image: Vec<u8>) -> Result<(), JsValue> {
        self.inner
            .load(&image)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Executes one instruction. Returns `true` once the program has halted
    /// on BRK.
    pub fn step(&mut self) -> Result<bool, JsValue> {
        self.inner
            .step()
            .map(|outcome| outcome == crate::StepOutcome::Halted)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Runs until BRK, an invalid opcode, or the step limit.
    pub fn execute(&mut self) -> Result<(), JsValue> {
        self.inner
            .execute()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Text snapshot of registers and flags.
    pub fn cpu_status(&self) -> String {
        self.inner.cpu_status()
    }

    /// Hex grid of the memory range `[start, end)`.
    pub fn memory_hexdump(&self, start: u16, end: u16) -> Result<String, JsValue> {
        self.inner
            .memory_hexdump(start, end)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Assembles source text. Failures are reported in the result object
    /// rather than thrown.
    pub fn assemble(&self, source: &str) -> AssemblyResult {
        match assemble(source) {
            Ok(output) => AssemblyResult {
                success: true,
                bytes: output.bytes,
                error_line: None,
                error_message: None,
            },
            Err(error) => AssemblyResult {
                success: false,
                bytes: Vec::new(),
                error_line: Some(error.line as u32),
                error_message: Some(error.to_string()),
            },
        }
    }

    /// Installs the CPU debug channel observer.
    pub fn set_cpu_debug_callback(&mut self, callback: Function) {
        self.inner.set_cpu_debug_callback(move |message| {
            let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(message));
        });
    }

    /// Installs the Memory debug channel observer.
    pub fn set_memory_debug_callback(&mut self, callback: Function) {
        self.inner.set_memory_debug_callback(move |message| {
            let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(message));
        });
    }

    /// Installs the Registers debug channel observer.
    pub fn set_registers_debug_callback(&mut self, callback: Function) {
        self.inner.set_registers_debug_callback(move |message| {
            let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(message));
        });
    }
}
