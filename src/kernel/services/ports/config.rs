use serde::{Deserialize, Serialize};

/// Presentation options for the read-only code view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub show_line_numbers: bool,
    pub tab_size: u8,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            show_line_numbers: true,
            tab_size: 4,
        }
    }
}

impl ViewerConfig {
    /// Spaces a tab character expands to; never zero.
    pub fn tab_width(&self) -> usize {
        usize::from(self.tab_size.max(1))
    }
}
