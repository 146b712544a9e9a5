//! Adapter implementations for the order import ports.

pub mod memory;
pub mod postgres;
pub mod workbook;
