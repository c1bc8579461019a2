//! Shared utility functions for output formatting

use super::config::SizeFormat;

/// Connector drawn in front of every child's label.
pub const BRANCH: &str = "+- ";
/// Prefix inherited by descendants of a child that has later siblings.
pub const PIPE: &str = "|  ";
/// Prefix inherited by descendants of the last child.
pub const BLANK: &str = "   ";

/// Width of each size column.
pub const SIZE_WIDTH: usize = 8;

/// Group digits in threes with `,`, independent of locale.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

pub fn size_column(bytes: u64, format: SizeFormat) -> String {
    let text = match format {
        SizeFormat::Bytes => group_thousands(bytes),
        SizeFormat::Human => format_size(bytes),
    };
    format!("{:>width$}", text, width = SIZE_WIDTH)
}
