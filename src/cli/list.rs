use anyhow::Result;

use crate::cli::display::format_amount;
use crate::cli::input::load_contacts;
use crate::models::{Company, Person};

/// Execute the list command
pub fn run_list(file: &str, companies: bool, limit: u32) -> Result<()> {
    let contacts = load_contacts(file)?;

    if companies {
        print_company_table(&contacts.companies, limit);
    } else {
        print_people_table(&contacts.people, limit);
    }

    Ok(())
}

/// Get terminal width, defaulting to 80 if unavailable
fn get_term_width() -> usize {
    crossterm::terminal::size()
        .map(|(w, _)| w as usize)
        .unwrap_or(80)
}

/// Column layout based on terminal width
struct ColumnLayout {
    name_width: usize,
    detail_width: usize,
    show_extra: bool,
}

impl ColumnLayout {
    fn for_width(width: usize) -> Self {
        if width >= 80 {
            // Full display: Name | Detail | Extra
            ColumnLayout {
                name_width: 30,
                detail_width: 24,
                show_extra: true,
            }
        } else {
            // Compact display: Name | Detail
            ColumnLayout {
                name_width: 25,
                detail_width: width.saturating_sub(27),
                show_extra: false,
            }
        }
    }
}

fn effective_rows(total: usize, limit: u32) -> usize {
    if limit == 0 {
        total
    } else {
        (limit as usize).min(total)
    }
}

fn print_people_table(people: &[Person], limit: u32) {
    if people.is_empty() {
        println!("No people.");
        return;
    }

    let layout = ColumnLayout::for_width(get_term_width());
    println!("People ({} total)\n", people.len());

    if layout.show_extra {
        println!(
            "{:<name_w$}  {:<detail_w$}  COMPANY",
            "NAME",
            "TITLE",
            name_w = layout.name_width,
            detail_w = layout.detail_width
        );
    } else {
        println!("{:<name_w$}  TITLE", "NAME", name_w = layout.name_width);
    }

    let shown = effective_rows(people.len(), limit);
    for person in &people[..shown] {
        print_person_row(person, &layout);
    }

    if shown < people.len() {
        println!("\n... and {} more", people.len() - shown);
    }
}

fn print_person_row(person: &Person, layout: &ColumnLayout) {
    let name = truncate(&person.name, layout.name_width);
    let title = truncate(&person.title, layout.detail_width);

    if layout.show_extra {
        println!(
            "{:<name_w$}  {:<detail_w$}  {}",
            name,
            title,
            truncate(&person.company.name, 20),
            name_w = layout.name_width,
            detail_w = layout.detail_width
        );
    } else {
        println!("{:<name_w$}  {}", name, title, name_w = layout.name_width);
    }
}

fn print_company_table(companies: &[Company], limit: u32) {
    if companies.is_empty() {
        println!("No companies.");
        return;
    }

    let layout = ColumnLayout::for_width(get_term_width());
    println!("Companies ({} total)\n", companies.len());

    if layout.show_extra {
        println!(
            "{:<name_w$}  {:<detail_w$}  WEBSITE",
            "NAME",
            "FUNDS RECEIVED",
            name_w = layout.name_width,
            detail_w = layout.detail_width
        );
    } else {
        println!(
            "{:<name_w$}  FUNDS RECEIVED",
            "NAME",
            name_w = layout.name_width
        );
    }

    let shown = effective_rows(companies.len(), limit);
    for company in &companies[..shown] {
        print_company_row(company, &layout);
    }

    if shown < companies.len() {
        println!("\n... and {} more", companies.len() - shown);
    }
}

fn print_company_row(company: &Company, layout: &ColumnLayout) {
    let name = truncate(&company.name, layout.name_width);
    let funds = if company.has_funding() {
        format_amount(company.funds_received)
    } else {
        String::new()
    };

    if layout.show_extra {
        println!(
            "{:<name_w$}  {:<detail_w$}  {}",
            name,
            funds,
            truncate(&company.website_url, 30),
            name_w = layout.name_width,
            detail_w = layout.detail_width
        );
    } else {
        println!("{:<name_w$}  {}", name, funds, name_w = layout.name_width);
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::raw::parse_profiles;

    fn sample_contacts() -> crate::normalize::ContactSet {
        let input = r#"[{
            "data": {
                "organizations": [
                    {"id": "1", "name": "Acme", "website_url": "https://acme.test"},
                    {"id": "2", "name": "Globex"}
                ],
                "people": [
                    {"id": "p1", "name": "Jo Doe", "title": "CTO", "organization_id": "1"},
                    {"id": "p2", "name": "Sam Roe", "organization_id": "2"}
                ],
                "FundsReceived": "$2M"
            }
        }]"#;
        normalize(parse_profiles(input).unwrap())
    }

    #[test]
    fn test_effective_rows() {
        assert_eq!(effective_rows(10, 0), 10);
        assert_eq!(effective_rows(10, 3), 3);
        assert_eq!(effective_rows(2, 5), 2);
        assert_eq!(effective_rows(0, 0), 0);
    }

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        let result = truncate("a very long company name here", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn test_column_layout_wide() {
        let layout = ColumnLayout::for_width(100);
        assert!(layout.show_extra);
        assert_eq!(layout.name_width, 30);
    }

    #[test]
    fn test_column_layout_narrow() {
        let layout = ColumnLayout::for_width(60);
        assert!(!layout.show_extra);
        assert_eq!(layout.name_width, 25);
        assert_eq!(layout.detail_width, 33);
    }

    #[test]
    fn test_print_tables_do_not_panic() {
        let contacts = sample_contacts();
        print_people_table(&contacts.people, 0);
        print_people_table(&contacts.people, 1);
        print_company_table(&contacts.companies, 0);
        print_people_table(&[], 0);
        print_company_table(&[], 0);
    }
}
