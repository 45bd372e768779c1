use std::io;

use anyhow::{Context, Result};
use serde::Serialize;

use super::input::load_contacts;
use crate::models::{Company, Person};

/// Flat CSV row for a person.
#[derive(Debug, Serialize)]
struct PersonRow<'a> {
    id: &'a str,
    name: &'a str,
    title: &'a str,
    seniority: &'a str,
    email: &'a str,
    phone: &'a str,
    city: &'a str,
    linkedin: &'a str,
    company_id: &'a str,
    company: &'a str,
}

/// Flat CSV row for a company.
#[derive(Debug, Serialize)]
struct CompanyRow<'a> {
    id: &'a str,
    name: &'a str,
    founded_year: i64,
    revenue: f64,
    intent_strength: &'a str,
    funds_received: f64,
    seed_round: String,
    website_url: &'a str,
    linkedin_url: &'a str,
    primary_phone: &'a str,
}

/// Execute the export command
pub fn run_export(file: &str, companies: bool, output: Option<&str>) -> Result<()> {
    let contacts = load_contacts(file)?;

    match output {
        Some(path) => {
            let mut writer = csv::Writer::from_path(path)
                .with_context(|| format!("Failed to create file: {}", path))?;
            let rows = if companies {
                write_companies(&mut writer, &contacts.companies)?
            } else {
                write_people(&mut writer, &contacts.people)?
            };
            eprintln!("Wrote {} rows to {}", rows, path);
        }
        None => {
            let mut writer = csv::Writer::from_writer(io::stdout());
            if companies {
                write_companies(&mut writer, &contacts.companies)?;
            } else {
                write_people(&mut writer, &contacts.people)?;
            }
        }
    }

    Ok(())
}

fn write_people<W: io::Write>(writer: &mut csv::Writer<W>, people: &[Person]) -> Result<usize> {
    for person in people {
        writer.serialize(PersonRow {
            id: &person.id,
            name: &person.name,
            title: &person.title,
            seniority: person.seniority.as_str(),
            email: &person.email,
            phone: &person.phone,
            city: &person.city,
            linkedin: &person.linkedin,
            company_id: &person.company.id,
            company: &person.company.name,
        })?;
    }
    writer.flush()?;
    Ok(people.len())
}

fn write_companies<W: io::Write>(
    writer: &mut csv::Writer<W>,
    companies: &[Company],
) -> Result<usize> {
    for company in companies {
        writer.serialize(CompanyRow {
            id: &company.id,
            name: &company.name,
            founded_year: company.founded_year,
            revenue: company.revenue,
            intent_strength: company.intent_strength.as_str(),
            funds_received: company.funds_received,
            seed_round: company.seed_round.to_string(),
            website_url: &company.website_url,
            linkedin_url: &company.linkedin_url,
            primary_phone: &company.primary_phone,
        })?;
    }
    writer.flush()?;
    Ok(companies.len())
}
