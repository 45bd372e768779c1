//! Turns raw profile exports into display-ready companies and people.
//!
//! The pipeline is pure and never fails: profile order drives output order,
//! and every missing field degrades to a default rather than an error.

mod amount;

pub use amount::parse_amount;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Company, EmploymentEntry, IntentStrength, Person, Seniority};
use crate::raw::{RawAmount, RawEmployment, RawOrganization, RawPerson, RawProfile};

/// The two derived sets a profile export normalizes into.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSet {
    pub companies: Vec<Company>,
    pub people: Vec<Person>,
}

impl ContactSet {
    /// People whose joined company carries the given id.
    pub fn related_people(&self, company_id: &str) -> Vec<&Person> {
        self.people
            .iter()
            .filter(|p| p.company.id == company_id)
            .collect()
    }
}

/// Financial scalars of one profile envelope, remembered per organization.
#[derive(Debug, Clone, Default)]
struct ProfileFunding {
    funds_received: RawAmount,
    seed_round: RawAmount,
}

/// Normalize a profile export into companies and people.
///
/// Companies come first from flattening every envelope's organizations, each
/// carrying its own profile's funding scalars. People then join a company by
/// organization id, falling back to a synthesized company so the field is
/// never absent.
pub fn normalize(profiles: Vec<RawProfile>) -> ContactSet {
    // Flatten the envelopes, remembering each profile's funding scalars per
    // organization id. A recurring id keeps the last profile's scalars.
    let mut funding: HashMap<String, ProfileFunding> = HashMap::new();
    let mut organizations: Vec<RawOrganization> = Vec::new();
    let mut raw_people: Vec<RawPerson> = Vec::new();

    for profile in profiles {
        let Some(data) = profile.data else { continue };

        if let Some(orgs) = data.organizations {
            for org in &orgs {
                funding.insert(
                    org.id.clone().unwrap_or_default(),
                    ProfileFunding {
                        funds_received: data.funds_received.clone().unwrap_or_default(),
                        seed_round: data.seed_round.clone().unwrap_or_default(),
                    },
                );
            }
            organizations.extend(orgs);
        }
        if let Some(people) = data.people {
            raw_people.extend(people);
        }
    }

    let companies: Vec<Company> = organizations
        .into_iter()
        .map(|org| {
            let scalars = funding
                .get(org.id.as_deref().unwrap_or_default())
                .cloned()
                .unwrap_or_default();
            company_from_org(org, parse_amount(&scalars.funds_received), scalars.seed_round)
        })
        .collect();

    // Join index: the first company wins for a duplicated id.
    let mut by_id: HashMap<&str, usize> = HashMap::new();
    for (idx, company) in companies.iter().enumerate() {
        by_id.entry(company.id.as_str()).or_insert(idx);
    }

    let people = raw_people
        .into_iter()
        .map(|person| person_from_raw(person, &companies, &by_id))
        .collect();

    ContactSet { companies, people }
}

fn company_from_org(org: RawOrganization, funds_received: f64, seed_round: RawAmount) -> Company {
    Company {
        id: org.id.unwrap_or_default(),
        name: org.name.unwrap_or_default(),
        logo: org.logo_url.clone().unwrap_or_default(),
        logo_url: org.logo_url.unwrap_or_default(),
        revenue: org.organization_revenue.unwrap_or(0.0),
        organization_revenue: org.organization_revenue.unwrap_or(0.0),
        founded_year: org.founded_year.unwrap_or(0),
        intent_strength: IntentStrength::parse(org.intent_strength.as_deref()),
        website_url: org.website_url.unwrap_or_default(),
        linkedin_url: org.linkedin_url.unwrap_or_default(),
        primary_phone: org.primary_phone.and_then(|p| p.number).unwrap_or_default(),
        sanitized_phone: org.sanitized_phone.unwrap_or_default(),
        funds_received,
        seed_round,
    }
}

/// Stand-in company for a person whose organization has no match in the
/// derived set. Financial fields are zeroed, not looked up.
fn fallback_company(fragment: Option<RawOrganization>) -> Company {
    company_from_org(fragment.unwrap_or_default(), 0.0, RawAmount::Number(0.0))
}

fn person_from_raw(
    person: RawPerson,
    companies: &[Company],
    by_id: &HashMap<&str, usize>,
) -> Person {
    // Join key: the embedded fragment's id when present, else the bare
    // organization_id field, else empty.
    let key = person
        .organization
        .as_ref()
        .and_then(|org| org.id.clone())
        .or_else(|| person.organization_id.clone())
        .unwrap_or_default();

    // The phone lives on the embedded fragment only; the joined company's
    // number is never consulted.
    let phone = person
        .organization
        .as_ref()
        .and_then(|org| org.primary_phone.as_ref())
        .and_then(|p| p.number.clone())
        .unwrap_or_default();

    let company = match by_id.get(key.as_str()) {
        Some(&idx) => companies[idx].clone(),
        None => fallback_company(person.organization),
    };

    let employment_history = person
        .employment_history
        .unwrap_or_default()
        .into_iter()
        .map(employment_from_raw)
        .collect();

    Person {
        id: person.id.unwrap_or_default(),
        name: person.name.unwrap_or_default(),
        title: person.title.unwrap_or_default(),
        photo: person.photo_url.clone().unwrap_or_default(),
        photo_url: person.photo_url.unwrap_or_default(),
        headline: person.headline.unwrap_or_default(),
        email: person.email.unwrap_or_default(),
        phone,
        linkedin: person.linkedin_url.unwrap_or_default(),
        city: person.city.unwrap_or_default(),
        seniority: Seniority::normalize(person.seniority.as_deref()),
        company,
        employment_history,
    }
}

fn employment_from_raw(raw: RawEmployment) -> EmploymentEntry {
    EmploymentEntry {
        company: raw.organization_name.unwrap_or_default(),
        position: raw.title.unwrap_or_default(),
        start_date: raw.start_date.unwrap_or_default(),
        end_date: raw.end_date.unwrap_or_default(),
        current: raw.current.unwrap_or(false),
    }
}
