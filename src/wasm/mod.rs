//! WebAssembly bindings, enabled with the `wasm` feature.
//!
//! Exposes the [`crate::Emulator`] facade to JavaScript hosts via
//! `wasm-bindgen`.

pub mod api;

pub use api::{AssemblyResult, Emulator};
