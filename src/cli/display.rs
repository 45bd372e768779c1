use crate::models::{Company, EmploymentEntry, Person};

/// Print a person detail view with clean formatting (only non-empty fields)
pub fn print_person(person: &Person) {
    let name = if person.name.is_empty() {
        "(unnamed)"
    } else {
        person.name.as_str()
    };
    println!("{}\n", name);

    // Role line
    let title_part = if person.title.is_empty() {
        String::new()
    } else {
        format!("{} at ", person.title)
    };
    if !title_part.is_empty() || !person.company.name.is_empty() {
        println!("  {}{}", title_part, person.company.name);
    }
    println!("  {}", person.seniority);

    if !person.email.is_empty() {
        println!("  {}", person.email);
    }
    if !person.phone.is_empty() {
        println!("  {}", person.phone);
    }
    if !person.city.is_empty() {
        println!("  {}", person.city);
    }
    if !person.linkedin.is_empty() {
        println!("  {}", person.linkedin);
    }

    // Headline (truncated)
    if !person.headline.is_empty() {
        println!("  {}", truncate_line(&person.headline, 60));
    }

    if !person.employment_history.is_empty() {
        println!();
        for entry in &person.employment_history {
            let span = employment_span(entry);
            if span.is_empty() {
                println!("  {}", employment_role(entry));
            } else {
                println!("  {} ({})", employment_role(entry), span);
            }
        }
    }
}

/// Print a company detail view followed by the people who work there
pub fn print_company(company: &Company, people: &[&Person]) {
    let name = if company.name.is_empty() {
        "(unnamed)"
    } else {
        company.name.as_str()
    };
    println!("{}\n", name);

    if company.founded_year != 0 {
        println!("  Founded: {}", company.founded_year);
    }
    if company.revenue != 0.0 {
        println!("  Revenue: {}", format_amount(company.revenue));
    }
    if company.funds_received != 0.0 {
        println!("  Funds received: {}", format_amount(company.funds_received));
    }
    // The seed round is whatever shape upstream had, shown verbatim.
    let seed = company.seed_round.to_string();
    if !seed.is_empty() && seed != "0" {
        println!("  Seed round: {}", seed);
    }
    println!("  Intent: {}", company.intent_strength.as_str());

    if !company.website_url.is_empty() {
        println!("  {}", company.website_url);
    }
    if !company.linkedin_url.is_empty() {
        println!("  {}", company.linkedin_url);
    }
    if !company.primary_phone.is_empty() {
        println!("  {}", company.primary_phone);
    }

    if !people.is_empty() {
        println!("\n  People ({})", people.len());
        for person in people {
            let title_part = if person.title.is_empty() {
                String::new()
            } else {
                format!(", {}", person.title)
            };
            println!("    {}{}", person.name, title_part);
        }
    }
}

/// Format a dollar amount with thousands grouping
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let digits = (amount.abs().round() as u64).to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

fn employment_role(entry: &EmploymentEntry) -> String {
    match (entry.position.is_empty(), entry.company.is_empty()) {
        (false, false) => format!("{} at {}", entry.position, entry.company),
        (false, true) => entry.position.clone(),
        (true, false) => entry.company.clone(),
        (true, true) => "(unknown role)".to_string(),
    }
}

fn employment_span(entry: &EmploymentEntry) -> String {
    let end = if entry.current {
        "now"
    } else {
        entry.end_date.as_str()
    };
    match (entry.start_date.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (true, false) => format!("until {}", end),
        (false, true) => format!("since {}", entry.start_date),
        (false, false) => format!("{} - {}", entry.start_date, end),
    }
}

/// Truncate text to first line and max length
fn truncate_line(text: &str, max_len: usize) -> String {
    let first_line = text.lines().next().unwrap_or("");
    let trimmed = first_line.trim();

    if trimmed.chars().count() <= max_len {
        trimmed.to_string()
    } else {
        let truncated: String = trimmed.chars().take(max_len - 1).collect();
        format!("{}…", truncated.trim_end())
    }
}
