//! `cmdsig`: declare commands with compact signature strings, bind process
//! arguments into typed values and render terminal output.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod output;
pub mod system;
