use std::fs;

use anyhow::{Context, Result};

use super::input::load_profiles;
use crate::normalize::normalize;

/// Execute the normalize command
pub fn run_normalize(file: &str, pretty: bool, output: Option<&str>) -> Result<()> {
    let profiles = load_profiles(file)?;
    let profile_count = profiles.len();
    let contacts = normalize(profiles);

    eprintln!(
        "Normalized {} profiles into {} companies and {} people",
        profile_count,
        contacts.companies.len(),
        contacts.people.len()
    );

    let mut json = if pretty {
        serde_json::to_string_pretty(&contacts)?
    } else {
        serde_json::to_string(&contacts)?
    };
    json.push('\n');

    match output {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("Failed to write file: {}", path))?;
            eprintln!("Wrote {}", path);
        }
        None => print!("{}", json),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn input_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{
                "data": {
                    "organizations": [{
                        "id": "1",
                        "name": "Acme",
                        "logo_url": "https://acme.test/logo.png"
                    }],
                    "people": [{"id": "p1", "name": "Jo", "organization_id": "1"}],
                    "FundsReceived": "$2M",
                    "SeedRound": "500K"
                }
            }]"#,
        )
        .unwrap();
        file
    }

    #[test]
    fn writes_normalized_json_to_a_file() {
        let input = input_file();
        let output = NamedTempFile::new().unwrap();
        let output_path = output.path().to_str().unwrap().to_string();

        run_normalize(
            input.path().to_str().unwrap(),
            false,
            Some(output_path.as_str()),
        )
        .unwrap();

        let written = fs::read_to_string(&output_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();

        let company = &value["companies"][0];
        assert_eq!(company["name"], "Acme");
        assert_eq!(company["logo"], "https://acme.test/logo.png");
        assert_eq!(company["logoUrl"], "https://acme.test/logo.png");
        assert_eq!(company["fundsReceived"], 2_000_000.0);
        assert_eq!(company["seedRound"], "500K");

        let person = &value["people"][0];
        assert_eq!(person["name"], "Jo");
        assert_eq!(person["seniority"], "Junior");
        assert_eq!(person["company"]["name"], "Acme");
    }

    #[test]
    fn pretty_output_is_multiline() {
        let input = input_file();
        let output = NamedTempFile::new().unwrap();
        let output_path = output.path().to_str().unwrap().to_string();

        run_normalize(
            input.path().to_str().unwrap(),
            true,
            Some(output_path.as_str()),
        )
        .unwrap();

        let written = fs::read_to_string(&output_path).unwrap();
        assert!(written.lines().count() > 1);
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn missing_input_file_fails() {
        assert!(run_normalize("/nonexistent/export.json", false, None).is_err());
    }

    #[test]
    fn malformed_input_fails() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"not\": \"an array\"}").unwrap();
        assert!(run_normalize(file.path().to_str().unwrap(), false, None).is_err());
    }
}
