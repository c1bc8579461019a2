//! Tree formatting and display
//!
//! This module provides formatters for outputting object trees:
//! - Console output, plain or colored
//! - JSON output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Connectors and size column formatting
//! - `tree` - Tree formatter for complete `Node` trees
//! - `json` - JSON output

mod config;
mod json;
mod tree;
mod utils;

// Re-export public types and functions
pub use config::{OutputConfig, SizeFormat};
pub use json::{print_json, to_json};
pub use tree::{TreeFormatter, TreeLine};
pub use utils::{format_size, group_thousands};
