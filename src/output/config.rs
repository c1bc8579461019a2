//! Output configuration types

/// How the two size columns are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizeFormat {
    /// Exact byte counts with `,` thousands separators.
    #[default]
    Bytes,
    /// Rounded `1.5K` style figures.
    Human,
}

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    pub size_format: SizeFormat,
    /// Stop rendering below this depth. Sizes still cover the whole subtree.
    pub max_depth: Option<usize>,
}

impl OutputConfig {
    /// Uncolored, exact sizes, no depth limit.
    pub fn plain() -> Self {
        Self {
            use_color: false,
            ..Self::default()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            size_format: SizeFormat::Bytes,
            max_depth: None,
        }
    }
}
