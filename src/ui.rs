// Output layer: turns a lookup outcome into the one line the tool prints.

use std::io::{self, Write};

use crate::api::UserId;
use crate::error::LookupError;

/// Printed for every failed lookup, whatever the cause.
pub const SENTINEL: &str = "None";

pub fn render(outcome: &Result<UserId, LookupError>) -> String {
    match outcome {
        Ok(id) => id.to_string(),
        Err(_) => SENTINEL.to_string(),
    }
}

/// Write the rendered outcome followed by a newline.
pub fn print_lookup<W: Write>(out: &mut W, outcome: &Result<UserId, LookupError>) -> io::Result<()> {
    writeln!(out, "{}", render(outcome))?;
    out.flush()
}
