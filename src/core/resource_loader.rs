use crate::core::{Catalog, LoadWarning, Resource, Storage};
use crate::utils::error::{AllocatorError, Result};
use crate::utils::text::trim;

pub struct ResourceLoader<'a, S: Storage> {
    storage: &'a S,
}

impl<'a, S: Storage> ResourceLoader<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    pub fn load(&self, path: &str) -> Result<Catalog<Resource>> {
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

        let catalog = parse_resources(&String::from_utf8_lossy(&bytes));
        tracing::info!(
            "Loaded {} resources from {} ({} rows skipped)",
            catalog.records.len(),
            path,
            catalog.warnings.len()
        );
        Ok(catalog)
    }
}

/// Parses the comma-separated resource table. The first line is a header and
/// is never validated. Fields cannot contain commas: there is no quoting.
pub fn parse_resources(content: &str) -> Catalog<Resource> {
    let mut catalog = Catalog::default();

    for (index, raw_line) in content.lines().enumerate().skip(1) {
        let line: String = raw_line.chars().filter(|&c| c != '\r').collect();
        let fields = split_fields(&line);

        if let [first_name, last_name, speciality, availability, phone, email, location] =
            fields.as_slice()
        {
            catalog.records.push(Resource {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                speciality: speciality.to_string(),
                availability: availability.to_string(),
                phone: phone.to_string(),
                email: email.to_string(),
                location: location.to_string(),
            });
        } else if !line.is_empty() {
            tracing::debug!("Skipping row {} with {} columns", index + 1, fields.len());
            catalog.warnings.push(LoadWarning::ColumnCount {
                line_number: index + 1,
                found: fields.len(),
                line,
            });
        }
    }

    catalog
}

/// Comma split with stream-reader semantics: one trailing empty field
/// (a line ending in a comma) is not counted.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').collect();
    if fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields.into_iter().map(trim).collect()
}
