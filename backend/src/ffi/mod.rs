//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the cost model to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: one `Cost` class, built from JSON config
//! 2. **Simple types**: timestamps as unix seconds, durations as seconds
//! 3. **Safe errors**: every Rust error becomes a Python `ValueError`
//! 4. **No references**: Python gets copies, never references to Rust state

pub mod cost;
pub mod types;
