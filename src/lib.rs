pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::engine::{AllocationEngine, Catalogs, SessionOutcome};
pub use crate::core::matcher::{find_matches, select_and_match, MatchOutcome, Selection};
pub use crate::domain::model::{Allocation, Project, Resource};
pub use crate::utils::error::{AllocatorError, Result};
