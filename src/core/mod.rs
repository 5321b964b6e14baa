// src/core/mod.rs

//! The signature language: declaration parsing, kinds and argument binding.

pub mod binder;
pub mod config_loader;
pub mod declaration;
pub mod kind;
pub mod signature;

pub use declaration::{ArgumentDeclaration, SignatureError};
pub use kind::ArgumentKind;
pub use signature::{
    Arguments, bind_all, first_error_message, get_value, is_valid, parse_declarations, parse_name,
};
