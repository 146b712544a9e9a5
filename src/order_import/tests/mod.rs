//! Unit tests for the order import.
