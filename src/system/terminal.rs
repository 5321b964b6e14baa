// src/system/terminal.rs

use std::io::{self, IsTerminal};

/// Returns `true` when stdin is attached to a terminal, i.e. a prompt can
/// actually wait for the user.
pub fn is_interactive_input() -> bool {
    io::stdin().is_terminal()
}

