//! Adapter implementations for task editing ports.

pub mod memory;
