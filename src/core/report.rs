use crate::core::{Allocation, OutputFormat, Project, Resource};
use crate::utils::error::Result;
use std::io::Write;

pub const RESOURCE_HEADERS: [&str; Resource::FIELD_COUNT] = [
    "first_name",
    "last_name",
    "speciality",
    "availability",
    "phone",
    "email",
    "location",
];

pub const PROMPT: &str =
    "Enter the number of the project to allocate resources for (or 0 to exit): ";

pub fn write_menu<W: Write>(out: &mut W, projects: &[Project]) -> Result<()> {
    writeln!(out, "Available Projects:")?;
    for (index, project) in projects.iter().enumerate() {
        writeln!(out, "{}. {} ({})", index + 1, project.name, project.domain)?;
    }
    Ok(())
}

pub fn write_prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;
    Ok(())
}

pub fn write_allocation<W: Write>(
    out: &mut W,
    allocation: &Allocation<'_>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, allocation),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, allocation)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => write_delimited(out, &allocation.matches, b','),
        OutputFormat::Tsv => write_delimited(out, &allocation.matches, b'\t'),
    }
}

fn write_text<W: Write>(out: &mut W, allocation: &Allocation<'_>) -> Result<()> {
    let project = allocation.project;
    writeln!(
        out,
        "\nAllocating resources for: {} (Domain: {})",
        project.name, project.domain
    )?;

    for resource in &allocation.matches {
        writeln!(out, "\nMatching Resource Found:")?;
        for (label, value) in resource.labelled_fields() {
            writeln!(out, "  {}: {}", label, value)?;
        }
    }

    if allocation.matches.is_empty() {
        writeln!(
            out,
            "No resources found with the speciality: {}",
            project.domain
        )?;
    }
    Ok(())
}

/// Header row is always written, even with no matches.
fn write_delimited<W: Write>(out: &mut W, resources: &[&Resource], delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(out);

    writer.write_record(RESOURCE_HEADERS)?;
    for resource in resources {
        writer.serialize(resource)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Resource {
        Resource {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            speciality: "cloud".to_string(),
            availability: "Immediate".to_string(),
            phone: "555-0001".to_string(),
            email: "jane@example.com".to_string(),
            location: "Berlin".to_string(),
        }
    }

    fn alpha() -> Project {
        Project {
            name: "Alpha".to_string(),
            domain: "Cloud".to_string(),
            commission: 5000,
            ..Default::default()
        }
    }

    fn render(allocation: &Allocation<'_>, format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_allocation(&mut out, allocation, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_menu_is_numbered_from_one() {
        let projects = vec![alpha(), Project {
            name: "Beta".to_string(),
            domain: "Data".to_string(),
            ..Default::default()
        }];
        let mut out = Vec::new();
        write_menu(&mut out, &projects).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Available Projects:\n1. Alpha (Cloud)\n2. Beta (Data)\n"
        );
    }

    #[test]
    fn test_text_report_lists_labelled_fields() {
        let project = alpha();
        let resource = jane();
        let allocation = Allocation {
            project: &project,
            matches: vec![&resource],
        };

        assert_eq!(
            render(&allocation, OutputFormat::Text),
            "\nAllocating resources for: Alpha (Domain: Cloud)\n\
             \nMatching Resource Found:\n\
             \x20 First Name: Jane\n\
             \x20 Last Name: Doe\n\
             \x20 Speciality: cloud\n\
             \x20 Availability: Immediate\n\
             \x20 Phone: 555-0001\n\
             \x20 Email: jane@example.com\n\
             \x20 Location: Berlin\n"
        );
    }

    #[test]
    fn test_text_report_without_matches() {
        let project = alpha();
        let allocation = Allocation {
            project: &project,
            matches: vec![],
        };

        let text = render(&allocation, OutputFormat::Text);
        assert!(text.ends_with("No resources found with the speciality: Cloud\n"));
        assert!(!text.contains("Matching Resource Found"));
    }

    #[test]
    fn test_json_report() {
        let project = alpha();
        let resource = jane();
        let allocation = Allocation {
            project: &project,
            matches: vec![&resource],
        };

        let value: serde_json::Value =
            serde_json::from_str(&render(&allocation, OutputFormat::Json)).unwrap();
        assert_eq!(value["project"]["name"], "Alpha");
        assert_eq!(value["project"]["commission"], 5000);
        assert_eq!(value["matches"][0]["email"], "jane@example.com");
    }

    #[test]
    fn test_csv_and_tsv_reports() {
        let project = alpha();
        let resource = jane();
        let allocation = Allocation {
            project: &project,
            matches: vec![&resource],
        };

        assert_eq!(
            render(&allocation, OutputFormat::Csv),
            "first_name,last_name,speciality,availability,phone,email,location\n\
             Jane,Doe,cloud,Immediate,555-0001,jane@example.com,Berlin\n"
        );
        assert_eq!(
            render(&allocation, OutputFormat::Tsv).lines().nth(1),
            Some("Jane\tDoe\tcloud\tImmediate\t555-0001\tjane@example.com\tBerlin")
        );
    }

    #[test]
    fn test_csv_report_without_matches_has_header_only() {
        let project = alpha();
        let allocation = Allocation {
            project: &project,
            matches: vec![],
        };

        assert_eq!(
            render(&allocation, OutputFormat::Csv),
            "first_name,last_name,speciality,availability,phone,email,location\n"
        );
    }
}
