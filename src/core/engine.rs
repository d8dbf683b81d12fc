use crate::core::matcher::{self, MatchOutcome, Selection};
use crate::core::project_loader::ProjectLoader;
use crate::core::resource_loader::ResourceLoader;
use crate::core::{report, ConfigProvider, LoadWarning, OutputFormat, Project, Resource, Storage};
use crate::utils::error::{AllocatorError, Result};
use std::io::{BufRead, Write};

/// Something worth telling the operator on stderr after loading.
#[derive(Debug)]
pub enum Diagnostic {
    Error(AllocatorError),
    Warning(LoadWarning),
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::Error(e) => write!(f, "{}", e.user_friendly_message()),
            Diagnostic::Warning(w) => write!(f, "{}", w),
        }
    }
}

#[derive(Debug, Default)]
pub struct Catalogs {
    pub projects: Vec<Project>,
    pub resources: Vec<Resource>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    NoProjects,
    Quit,
    InvalidChoice(i64),
    Allocated { project: String, matched: usize },
}

pub struct AllocationEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> AllocationEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Loads both catalogs independently. A catalog that fails to load is
    /// empty and its error is kept as a diagnostic.
    pub fn load(&self) -> Catalogs {
        let mut catalogs = Catalogs::default();

        let projects = ProjectLoader::new(&self.storage, self.config.commission_policy())
            .load(self.config.projects_file());
        match projects {
            Ok(catalog) => {
                catalogs.projects = catalog.records;
                catalogs
                    .diagnostics
                    .extend(catalog.warnings.into_iter().map(Diagnostic::Warning));
            }
            Err(e) => {
                tracing::debug!("Project catalog unavailable: {}", e);
                catalogs.diagnostics.push(Diagnostic::Error(e));
            }
        }

        match ResourceLoader::new(&self.storage).load(self.config.resources_file()) {
            Ok(catalog) => {
                catalogs.resources = catalog.records;
                catalogs
                    .diagnostics
                    .extend(catalog.warnings.into_iter().map(Diagnostic::Warning));
            }
            Err(e) => {
                tracing::debug!("Resource catalog unavailable: {}", e);
                catalogs.diagnostics.push(Diagnostic::Error(e));
            }
        }

        catalogs
    }

    /// One full session: load, show the menu, take a selection, report.
    ///
    /// Stdin is only read when no choice was configured. Only output errors
    /// are returned; every catalog or selection problem ends the session
    /// normally.
    pub fn run<R, W, E>(&self, input: &mut R, out: &mut W, err: &mut E) -> Result<SessionOutcome>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let format = self.config.output_format();
        let catalogs = self.load();

        for diagnostic in &catalogs.diagnostics {
            writeln!(err, "{}", diagnostic)?;
        }

        if catalogs.projects.is_empty() {
            self.status(out, err, "No projects found.")?;
            return Ok(SessionOutcome::NoProjects);
        }

        if format == OutputFormat::Text {
            report::write_menu(out, &catalogs.projects)?;
        }

        let selection = match self.config.choice() {
            Some(choice) => Selection::from(choice),
            None => {
                if format == OutputFormat::Text {
                    report::write_prompt(out)?;
                }
                matcher::read_selection(input)?
            }
        };
        tracing::debug!("Selection: {:?}", selection);

        let choice = match selection {
            Selection::Quit => return Ok(SessionOutcome::Quit),
            Selection::Project(choice) => choice,
        };

        match matcher::select_and_match(&catalogs.projects, &catalogs.resources, choice) {
            MatchOutcome::InvalidChoice(choice) => {
                self.status(out, err, "Invalid choice.")?;
                Ok(SessionOutcome::InvalidChoice(choice))
            }
            MatchOutcome::Allocated(allocation) => {
                tracing::info!(
                    "Project '{}' matched {} of {} resources",
                    allocation.project.name,
                    allocation.matches.len(),
                    catalogs.resources.len()
                );
                report::write_allocation(out, &allocation, format)?;
                out.flush()?;
                Ok(SessionOutcome::Allocated {
                    project: allocation.project.name.clone(),
                    matched: allocation.matches.len(),
                })
            }
        }
    }

    /// Status lines go to stdout for text sessions and to stderr otherwise,
    /// keeping structured stdout parseable.
    fn status<W: Write, E: Write>(&self, out: &mut W, err: &mut E, message: &str) -> Result<()> {
        if self.config.output_format() == OutputFormat::Text {
            writeln!(out, "{}", message)?;
        } else {
            writeln!(err, "{}", message)?;
        }
        Ok(())
    }
}
