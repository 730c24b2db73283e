//! Core types and definitions for the arena shooter simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, snapshots, events, tuning and constants.
//! It has no dependency on any rendering or windowing framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
