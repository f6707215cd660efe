use std::path::PathBuf;

/// Rendering and export settings shared by every report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    /// Cells per bar in the expense breakdown.
    pub bar_width: usize,
    /// Minimum width of the category column in bar chart lines.
    pub label_width: usize,
    /// Directory export files are written to.
    pub export_dir: PathBuf,
    /// How many months before the report month the trend window reaches back.
    pub trend_months: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bar_width: 20,
            label_width: 12,
            export_dir: PathBuf::from("."),
            trend_months: 3,
        }
    }
}

impl Config {
    pub(crate) fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }
}
