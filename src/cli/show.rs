use anyhow::{anyhow, Result};

use super::display::{print_company, print_person};
use super::input::load_contacts;
use crate::models::{Company, Person};
use crate::normalize::ContactSet;

/// How an identifier resolved against a contact set.
enum ShowTarget<'a> {
    Person(&'a Person),
    Company(&'a Company),
    Ambiguous {
        people: Vec<&'a Person>,
        companies: Vec<&'a Company>,
    },
    NotFound,
}

/// Execute the show command
pub fn run_show(file: &str, identifier: &str) -> Result<()> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(anyhow!("Identifier cannot be empty."));
    }

    let contacts = load_contacts(file)?;

    match find_target(&contacts, identifier) {
        ShowTarget::Person(person) => print_person(person),
        ShowTarget::Company(company) => {
            print_company(company, &contacts.related_people(&company.id))
        }
        ShowTarget::Ambiguous { people, companies } => {
            println!("{} matches:\n", people.len() + companies.len());
            for person in &people {
                println!("  person   {}  {}", person.id, person.name);
            }
            for company in &companies {
                println!("  company  {}  {}", company.id, company.name);
            }
            println!("\nShow one of them by id.");
        }
        ShowTarget::NotFound => println!("No matches."),
    }

    Ok(())
}

/// Resolve an identifier: exact person id, then exact company id, then a
/// case-insensitive name search across both sets.
fn find_target<'a>(contacts: &'a ContactSet, identifier: &str) -> ShowTarget<'a> {
    if let Some(person) = contacts.people.iter().find(|p| p.id == identifier) {
        return ShowTarget::Person(person);
    }
    if let Some(company) = contacts.companies.iter().find(|c| c.id == identifier) {
        return ShowTarget::Company(company);
    }

    let needle = identifier.to_lowercase();
    let people: Vec<&Person> = contacts
        .people
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect();
    let companies: Vec<&Company> = contacts
        .companies
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect();

    match (people.len(), companies.len()) {
        (0, 0) => ShowTarget::NotFound,
        (1, 0) => ShowTarget::Person(people[0]),
        (0, 1) => ShowTarget::Company(companies[0]),
        _ => ShowTarget::Ambiguous { people, companies },
    }
}
