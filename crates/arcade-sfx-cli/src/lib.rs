//! Arcade SFX CLI library.
//!
//! This crate provides the core functionality for the `arcade-sfx` binary:
//! descriptor loading, batch manifests, and the command implementations.

pub mod commands;
pub mod config;
pub mod input;
