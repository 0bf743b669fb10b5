//! # beacon-core
//!
//! Core types, policy enums, and error types for Beacon.
//!
//! This crate provides the foundational types shared across all Beacon crates:
//! - Entity structs for the session attribution record and UTM parameter set
//! - Policy enums with `snake_case` serialization, including the per-form
//!   annotation state machine
//! - The logical hidden-field table with accepted name aliases
//! - Session storage key constants (the JS-visible external contract)
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod fields;
pub mod keys;
