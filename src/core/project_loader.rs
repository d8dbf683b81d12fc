use crate::core::{Catalog, CommissionPolicy, LoadWarning, Project, Storage};
use crate::utils::error::{AllocatorError, Result};
use crate::utils::text::{leading_integer, trim};

/// Line-oriented reader for the project catalog.
///
/// The format is a loose sequence of `{ ... }` blocks with one `"Key": value`
/// pair per line. It is not JSON: nesting, arrays and multi-pair lines are
/// not understood. A block still open at end of input is dropped.
pub struct ProjectLoader<'a, S: Storage> {
    storage: &'a S,
    policy: CommissionPolicy,
}

impl<'a, S: Storage> ProjectLoader<'a, S> {
    pub fn new(storage: &'a S, policy: CommissionPolicy) -> Self {
        Self { storage, policy }
    }

    pub fn load(&self, path: &str) -> Result<Catalog<Project>> {
        let bytes = self
            .storage
            .read_file(path)
            .map_err(|e| AllocatorError::CatalogOpenError {
                path: path.to_string(),
                source: match e {
                    AllocatorError::IoError(io) => io,
                    other => std::io::Error::other(other.to_string()),
                },
            })?;

        let catalog = parse_projects(&String::from_utf8_lossy(&bytes), self.policy)?;
        tracing::info!("Loaded {} projects from {}", catalog.records.len(), path);
        Ok(catalog)
    }
}

struct PendingProject {
    project: Project,
    bad_commission: Option<(usize, String)>,
}

enum ParseState {
    Outside,
    Collecting(PendingProject),
}

pub fn parse_projects(content: &str, policy: CommissionPolicy) -> Result<Catalog<Project>> {
    let mut catalog = Catalog::default();
    let mut state = ParseState::Outside;

    for (index, raw_line) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = trim(raw_line);
        if line.is_empty() {
            continue;
        }

        state = match state {
            _ if line.contains('{') => ParseState::Collecting(PendingProject {
                project: Project::default(),
                bad_commission: None,
            }),
            ParseState::Collecting(pending) if line.contains('}') => {
                match pending.bad_commission {
                    Some((line_number, value)) => {
                        tracing::debug!(
                            "Dropping project '{}': bad commission",
                            pending.project.name
                        );
                        catalog
                            .warnings
                            .push(LoadWarning::InvalidCommission { line_number, value });
                    }
                    None => catalog.records.push(pending.project),
                }
                ParseState::Outside
            }
            ParseState::Collecting(mut pending) => {
                if let Some((key, value)) = split_field(line) {
                    apply_field(&mut pending, key, value, line_number, policy)?;
                }
                ParseState::Collecting(pending)
            }
            ParseState::Outside => ParseState::Outside,
        };
    }

    if let ParseState::Collecting(pending) = state {
        tracing::debug!(
            "Unterminated project block at end of input dropped (name: '{}')",
            pending.project.name
        );
    }

    Ok(catalog)
}

/// Splits `"Key": value` into key and value.
///
/// The key is whatever sits between the first character and the character
/// before the colon, so it assumes `"Key"` with quotes at line start. The
/// value is the quoted string after the colon, or the bare token after the
/// first space up to the next comma.
fn split_field(line: &str) -> Option<(&str, &str)> {
    let colon = line.find(':')?;

    let key = if colon >= 2 {
        line.get(1..colon - 1)
    } else {
        line.get(1..)
    };
    let key = trim(key.unwrap_or(""));

    let rest = &line[colon + 1..];
    let value = match rest.find('"') {
        Some(open) => {
            let quoted = &rest[open + 1..];
            quoted.find('"').map(|close| trim(&quoted[..close])).unwrap_or("")
        }
        None => match rest.find(' ') {
            Some(space) => {
                let bare = &rest[space + 1..];
                trim(bare.split(',').next().unwrap_or(bare))
            }
            None => "",
        },
    };

    Some((key, value))
}

fn apply_field(
    pending: &mut PendingProject,
    key: &str,
    value: &str,
    line_number: usize,
    policy: CommissionPolicy,
) -> Result<()> {
    let project = &mut pending.project;
    match key {
        "Project Name" => project.name = value.to_string(),
        "Domain" => project.domain = value.to_string(),
        "Start Date" => project.start_date = value.to_string(),
        "End Date" => project.end_date = value.to_string(),
        "Commission" => match leading_integer(value) {
            Some(commission) => project.commission = commission,
            None => match policy {
                CommissionPolicy::AbortLoad => {
                    return Err(AllocatorError::InvalidCommissionError {
                        line: line_number,
                        value: value.to_string(),
                    });
                }
                CommissionPolicy::SkipRecord => {
                    pending
                        .bad_commission
                        .get_or_insert_with(|| (line_number, value.to_string()));
                }
            },
        },
        "Company Name" => project.company_name = value.to_string(),
        "Contact Person" => project.contact_person = value.to_string(),
        "Contact Person Phone" => project.contact_person_phone = value.to_string(),
        other => tracing::debug!(
            "Ignoring unknown project key '{}' (line {})",
            other,
            line_number
        ),
    }
    Ok(())
}
