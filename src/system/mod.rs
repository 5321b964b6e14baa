//! # System Interaction Layer
//!
//! Thin wrappers over the process environment that the output layer needs.
//!
//! ## Modules
//!
//! - **`terminal`**: TTY detection for stdin, used to decide whether prompts may block
//!   for user input.

pub mod terminal;
