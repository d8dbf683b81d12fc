use crate::core::{Allocation, Project, Resource};
use crate::utils::error::Result;
use crate::utils::text::{leading_integer, to_lower};
use std::io::BufRead;

/// What the operator asked for at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Quit,
    Project(i64),
}

impl From<i64> for Selection {
    fn from(choice: i64) -> Self {
        if choice == 0 {
            Selection::Quit
        } else {
            Selection::Project(choice)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome<'a> {
    Allocated(Allocation<'a>),
    InvalidChoice(i64),
}

/// Reads the integer at the start of the first whitespace-separated token,
/// ignoring anything after its digits (`"2abc"` is 2, `"1.5"` is 1). A token
/// without leading digits ends the session like `0` does.
pub fn parse_selection(input: &str) -> Selection {
    input
        .split_whitespace()
        .next()
        .and_then(leading_integer)
        .map(Selection::from)
        .unwrap_or(Selection::Quit)
}

/// Reads lines until one carries a token. End of input is a quit.
pub fn read_selection<R: BufRead>(input: &mut R) -> Result<Selection> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(Selection::Quit);
        }
        if !line.trim().is_empty() {
            return Ok(parse_selection(&line));
        }
    }
}

pub fn speciality_matches(resource: &Resource, domain: &str) -> bool {
    to_lower(&resource.speciality) == to_lower(domain)
}

/// Every resource whose speciality equals `domain` ignoring ASCII case, in
/// catalog order.
pub fn find_matches<'a>(resources: &'a [Resource], domain: &str) -> Vec<&'a Resource> {
    resources
        .iter()
        .filter(|resource| speciality_matches(resource, domain))
        .collect()
}

/// `choice` is the 1-based project number shown in the menu.
pub fn select_and_match<'a>(
    projects: &'a [Project],
    resources: &'a [Resource],
    choice: i64,
) -> MatchOutcome<'a> {
    let project = usize::try_from(choice)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| projects.get(index));

    match project {
        Some(project) => MatchOutcome::Allocated(Allocation {
            project,
            matches: find_matches(resources, &project.domain),
        }),
        None => MatchOutcome::InvalidChoice(choice),
    }
}
