//! Workspace cleanup
//!
//! Finds editor backups, lock files, logs and other tool droppings below a
//! project root and removes them after confirmation.

mod patterns;
mod scanner;

use std::io::{self, BufRead, Write};

pub use patterns::{CleanupRules, DEFAULT_PATTERNS, PROTECTED_BATCH_DIR};
pub use scanner::{delete_files, CleanupScanner, DeletionReport};

/// Prompt shown before anything is deleted
pub const CONFIRM_PROMPT: &str = "Do you want to proceed with deletion? [Y/N] (default: N): ";

/// Ask for confirmation; only `y` (any case) counts as yes
///
/// End of input is treated as "no".
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "\n{}", CONFIRM_PROMPT)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
