pub mod engine;
pub mod matcher;
pub mod project_loader;
pub mod report;
pub mod resource_loader;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{Allocation, Catalog, LoadWarning, Project, Resource};
pub use crate::domain::ports::{CommissionPolicy, ConfigProvider, OutputFormat, Storage};
pub use crate::utils::error::Result;
