//! Adapter implementations for resolver ports.

pub mod memory;
