use crate::config::{ABSENT_PLACEHOLDER, ScanConfig};

/// Predicate deciding which log lines are printed.
///
/// Needles are normalised once on construction so `matches` only does
/// substring searches per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFilter {
    level: String,
    text: String,
    filter: String,
}

impl Default for LineFilter {
    fn default() -> Self {
        Self {
            level: String::new(),
            text: ABSENT_PLACEHOLDER.to_lowercase(),
            filter: ABSENT_PLACEHOLDER.to_string(),
        }
    }
}

impl LineFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new()
            .with_level(&config.level)
            .with_text(config.text.as_deref())
            .with_filter(config.filter.as_deref())
    }

    pub fn with_level(mut self, level: &str) -> Self {
        self.level = level.to_uppercase();
        self
    }

    pub fn with_text(mut self, text: Option<&str>) -> Self {
        self.text = text.unwrap_or(ABSENT_PLACEHOLDER).to_lowercase();
        self
    }

    pub fn with_filter(mut self, filter: Option<&str>) -> Self {
        self.filter = filter.unwrap_or(ABSENT_PLACEHOLDER).to_string();
        self
    }

    /// Level-or-text match, before the filter narrows it.
    pub fn is_candidate(&self, line: &str) -> bool {
        line.contains(&self.level) || line.to_lowercase().contains(&self.text)
    }

    pub fn matches(&self, line: &str) -> bool {
        if !self.is_candidate(line) {
            return false;
        }

        // `contains("")` is always true, which covers the empty filter.
        line.contains(&self.filter)
    }
}
