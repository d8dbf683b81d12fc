use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub domain: String,
    pub start_date: String,
    pub end_date: String,
    pub commission: i64,
    pub company_name: String,
    pub contact_person: String,
    pub contact_person_phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub first_name: String,
    pub last_name: String,
    pub speciality: String,
    pub availability: String,
    pub phone: String,
    pub email: String,
    pub location: String,
}

impl Resource {
    pub const FIELD_COUNT: usize = 7;

    /// Labelled fields in display order.
    pub fn labelled_fields(&self) -> [(&'static str, &str); Self::FIELD_COUNT] {
        [
            ("First Name", self.first_name.as_str()),
            ("Last Name", self.last_name.as_str()),
            ("Speciality", self.speciality.as_str()),
            ("Availability", self.availability.as_str()),
            ("Phone", self.phone.as_str()),
            ("Email", self.email.as_str()),
            ("Location", self.location.as_str()),
        ]
    }
}

/// A diagnostic raised while loading a catalog. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// Resource row whose column count is not 7.
    ColumnCount {
        line_number: usize,
        line: String,
        found: usize,
    },
    /// Project block dropped because its commission is not a number.
    InvalidCommission { line_number: usize, value: String },
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadWarning::ColumnCount {
                line_number,
                line,
                found,
            } => write!(
                f,
                "Warning: Incorrect number of columns in row ({}). Line {}: \"{}\"",
                found, line_number, line
            ),
            LoadWarning::InvalidCommission { line_number, value } => write!(
                f,
                "Warning: Skipping project with invalid commission '{}' (line {})",
                value, line_number
            ),
        }
    }
}

/// Result of loading one catalog: records in file order plus diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog<T> {
    pub records: Vec<T>,
    pub warnings: Vec<LoadWarning>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// The selected project and every resource whose speciality matches its domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation<'a> {
    pub project: &'a Project,
    pub matches: Vec<&'a Resource>,
}
