//! JSON output formatting

use std::io::{self, Write};

use crate::error::Result;
use crate::tree::Node;

/// Serialize a node tree as pretty-printed JSON.
pub fn to_json(node: &Node) -> Result<String> {
    Ok(serde_json::to_string_pretty(node)?)
}

/// Print a node tree as pretty-printed JSON to stdout.
pub fn print_json(node: &Node) -> Result<()> {
    let json = to_json(node)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}
