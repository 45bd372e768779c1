use std::collections::BTreeMap;

use anyhow::Result;

use super::display::format_amount;
use super::input::load_profiles;
use crate::models::IntentStrength;
use crate::normalize::{normalize, ContactSet};

/// Counters summarizing a normalized profile export.
#[derive(Debug, Default, PartialEq)]
pub struct ContactStats {
    pub profiles: usize,
    pub companies: usize,
    pub people: usize,
    pub funded_companies: usize,
    pub total_funds: f64,
    pub high_intent: usize,
    pub medium_intent: usize,
    pub low_intent: usize,
    pub seniority: BTreeMap<String, usize>,
}

/// Execute the stats command
pub fn run_stats(file: &str) -> Result<()> {
    let profiles = load_profiles(file)?;
    let profile_count = profiles.len();
    let contacts = normalize(profiles);
    print_stats(&compute_stats(profile_count, &contacts));
    Ok(())
}

pub fn compute_stats(profiles: usize, contacts: &ContactSet) -> ContactStats {
    let mut stats = ContactStats {
        profiles,
        companies: contacts.companies.len(),
        people: contacts.people.len(),
        ..Default::default()
    };

    for company in &contacts.companies {
        if company.has_funding() {
            stats.funded_companies += 1;
            stats.total_funds += company.funds_received;
        }
        match company.intent_strength {
            IntentStrength::High => stats.high_intent += 1,
            IntentStrength::Medium => stats.medium_intent += 1,
            IntentStrength::Low => stats.low_intent += 1,
        }
    }

    for person in &contacts.people {
        *stats
            .seniority
            .entry(person.seniority.as_str().to_string())
            .or_insert(0) += 1;
    }

    stats
}

fn print_stats(stats: &ContactStats) {
    println!("Profiles:  {}", stats.profiles);
    println!("Companies: {}", stats.companies);
    println!("People:    {}", stats.people);

    println!("\nFunding");
    println!("  Companies with funds: {}", stats.funded_companies);
    println!("  Total funds received: {}", format_amount(stats.total_funds));

    println!("\nIntent");
    println!("  High:   {}", stats.high_intent);
    println!("  Medium: {}", stats.medium_intent);
    println!("  Low:    {}", stats.low_intent);

    if !stats.seniority.is_empty() {
        println!("\nSeniority");
        for (level, count) in &stats.seniority {
            println!("  {}: {}", level, count);
        }
    }
}
