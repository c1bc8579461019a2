//! Tree formatter for object trees
//!
//! This module provides `TreeFormatter` which renders a complete `Node` tree
//! one line per node: deep size, shallow size, then the label behind ASCII
//! tree connectors.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::tree::{Node, NodeKind};

use super::config::OutputConfig;
use super::utils::{BLANK, BRANCH, PIPE, size_column};

/// One line of the tree before the size columns are formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine<'a> {
    pub deep_size: u64,
    pub shallow_size: u64,
    /// Inherited prefix plus this node's connector. Empty for the root.
    pub lead: String,
    pub label: &'a str,
    pub kind: NodeKind,
}

/// Formatter for object trees.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Pre-order lines of `node`, children in attachment order.
    pub fn lines<'n>(&self, node: &'n Node) -> Vec<TreeLine<'n>> {
        let mut lines = Vec::with_capacity(node.count());
        self.collect_lines(node, &mut String::new(), &mut String::new(), 0, &mut lines);
        lines
    }

    fn collect_lines<'n>(
        &self,
        node: &'n Node,
        prefix: &mut String,
        lead: &mut String,
        depth: usize,
        lines: &mut Vec<TreeLine<'n>>,
    ) {
        lines.push(TreeLine {
            deep_size: node.deep_size(),
            shallow_size: node.shallow_size(),
            lead: std::mem::take(lead),
            label: node.label(),
            kind: node.kind(),
        });

        if self.config.max_depth.is_some_and(|max| depth >= max) {
            return;
        }

        let len = prefix.len();
        let mut children = node.children().iter().peekable();
        while let Some(child) = children.next() {
            lead.push_str(prefix);
            lead.push_str(BRANCH);
            prefix.push_str(if children.peek().is_some() { PIPE } else { BLANK });
            self.collect_lines(child, prefix, lead, depth + 1, lines);
            prefix.truncate(len);
        }
    }

    pub fn format_line(&self, line: &TreeLine<'_>) -> String {
        format!(
            "{} {}  {}{}",
            size_column(line.deep_size, self.config.size_format),
            size_column(line.shallow_size, self.config.size_format),
            line.lead,
            line.label
        )
    }

    pub fn format(&self, node: &Node) -> String {
        let mut output = String::new();
        for line in self.lines(node) {
            output.push_str(&self.format_line(&line));
            output.push('\n');
        }
        output
    }

    /// Write uncolored lines to any sink.
    pub fn write<W: Write>(&self, node: &Node, sink: &mut W) -> io::Result<()> {
        self.write_color(node, &mut NoColor::new(sink))
    }

    /// Write lines with sizes dimmed and markers highlighted. The text is
    /// identical to [`TreeFormatter::format`].
    pub fn write_color<W: WriteColor>(&self, node: &Node, out: &mut W) -> io::Result<()> {
        let format = self.config.size_format;
        for line in self.lines(node) {
            out.set_color(ColorSpec::new().set_dimmed(true))?;
            write!(
                out,
                "{} {}",
                size_column(line.deep_size, format),
                size_column(line.shallow_size, format)
            )?;
            out.reset()?;
            write!(out, "  {}", line.lead)?;
            match line.kind {
                NodeKind::Seen => {
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                }
                NodeKind::Null => {
                    out.set_color(ColorSpec::new().set_dimmed(true))?;
                }
                NodeKind::Object => {}
            }
            write!(out, "{}", line.label)?;
            out.reset()?;
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn print(&self, node: &Node) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let stdout = StandardStream::stdout(choice);
        let mut stdout = stdout.lock();
        self.write_color(node, &mut stdout)?;
        stdout.flush()
    }
}
