pub mod cli;

#[cfg(feature = "cli")]
use crate::core::{CommissionPolicy, ConfigProvider, OutputFormat};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "resource-allocator")]
#[command(about = "Match projects to available resources by domain and speciality")]
#[command(version)]
pub struct CliConfig {
    /// Project catalog (brace-delimited "Key": value blocks)
    pub projects_file: String,

    /// Resource catalog (comma-separated, first line is a header)
    pub resources_file: String,

    /// Directory relative catalog paths are resolved against
    #[arg(long, default_value = ".")]
    pub base_dir: String,

    /// Project number to allocate for instead of prompting (0 exits)
    #[arg(long, allow_negative_numbers = true)]
    pub choice: Option<i64>,

    /// Output format for the allocation report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fail the whole project load on the first non-numeric commission
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Only log errors (load diagnostics are still printed)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn projects_file(&self) -> &str {
        &self.projects_file
    }

    fn resources_file(&self) -> &str {
        &self.resources_file
    }

    fn choice(&self) -> Option<i64> {
        self.choice
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn commission_policy(&self) -> CommissionPolicy {
        if self.strict {
            CommissionPolicy::AbortLoad
        } else {
            CommissionPolicy::SkipRecord
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("projects_file", &self.projects_file)?;
        validation::validate_path("resources_file", &self.resources_file)?;
        validation::validate_non_empty_string("base_dir", &self.base_dir)?;
        Ok(())
    }
}
