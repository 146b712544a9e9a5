//! Step definitions for the order import scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
