use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

/// How a project block with a non-numeric commission is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommissionPolicy {
    /// Drop the block, report it and keep loading.
    #[default]
    SkipRecord,
    /// Fail the whole project load.
    AbortLoad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
    Tsv,
}

pub trait ConfigProvider {
    fn projects_file(&self) -> &str;
    fn resources_file(&self) -> &str;
    /// Pre-selected project number; `None` means prompt on stdin.
    fn choice(&self) -> Option<i64>;
    fn output_format(&self) -> OutputFormat;
    fn commission_policy(&self) -> CommissionPolicy;
}
