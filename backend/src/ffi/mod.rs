//! Python bindings (enabled with the `pyo3` feature)
//!
//! Lets a Python web front-end call the engine in-process with plain dicts.

pub mod engine;
pub mod types;
