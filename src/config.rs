use std::path::PathBuf;

pub const DEFAULT_FILE: &str = "27_Month_rolling.xlsx";
pub const DEFAULT_SHEET: &str = "Rolling Periods 27 Month";

pub const FILE_ENV: &str = "ROLLING_SALES_FILE";
pub const SHEET_ENV: &str = "ROLLING_SALES_SHEET";

/// Where the sales data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub path: PathBuf,
    /// Worksheet name; only used for workbook formats.
    pub sheet: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FILE),
            sheet: DEFAULT_SHEET.to_string(),
        }
    }
}

impl SourceConfig {
    /// Defaults, overridden by `ROLLING_SALES_FILE` / `ROLLING_SALES_SHEET`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(FILE_ENV).filter(|v| !v.trim().is_empty()) {
            config.path = PathBuf::from(path);
        }
        if let Some(sheet) = lookup(SHEET_ENV).filter(|v| !v.trim().is_empty()) {
            config.sheet = sheet;
        }
        config
    }

    /// Same sheet, different file (File → Open…).
    pub fn with_path(&self, path: PathBuf) -> Self {
        Self {
            path,
            sheet: self.sheet.clone(),
        }
    }
}
