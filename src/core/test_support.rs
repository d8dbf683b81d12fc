use crate::core::{CommissionPolicy, ConfigProvider, OutputFormat, Storage};
use crate::utils::error::{AllocatorError, Result};
use std::collections::HashMap;

#[derive(Clone, Default)]
pub struct MockStorage {
    files: HashMap<String, Vec<u8>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.as_bytes().to_vec());
        self
    }
}

impl Storage for MockStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            AllocatorError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path),
            ))
        })
    }
}

pub struct MockConfig {
    choice: Option<i64>,
    format: OutputFormat,
    policy: CommissionPolicy,
}

impl MockConfig {
    pub fn new() -> Self {
        Self {
            choice: None,
            format: OutputFormat::Text,
            policy: CommissionPolicy::SkipRecord,
        }
    }

    pub fn with_choice(mut self, choice: i64) -> Self {
        self.choice = Some(choice);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_policy(mut self, policy: CommissionPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl ConfigProvider for MockConfig {
    fn projects_file(&self) -> &str {
        "projects.json"
    }

    fn resources_file(&self) -> &str {
        "resources.csv"
    }

    fn choice(&self) -> Option<i64> {
        self.choice
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn commission_policy(&self) -> CommissionPolicy {
        self.policy
    }
}
