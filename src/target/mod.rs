//! Target file handling: read, substitute tokens, write back.

pub mod file;
pub mod substitute;

pub use file::{read_target, write_target};
pub use substitute::apply_to_text;

/// Default target file name, resolved against the working directory.
pub const DEFAULT_TARGET_PATH: &str = "game.js";
