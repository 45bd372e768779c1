use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::normalize::{normalize, ContactSet};
use crate::raw::{parse_profiles, RawProfile};

/// Read and decode a profile export from a file, or stdin when the path
/// is "-".
pub fn load_profiles(path: &str) -> Result<Vec<RawProfile>> {
    let input = if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        buffer
    } else {
        if !Path::new(path).exists() {
            bail!("File not found: {}", path);
        }
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?
    };

    Ok(parse_profiles(&input)?)
}

/// Load a profile export and normalize it in one step.
pub fn load_contacts(path: &str) -> Result<ContactSet> {
    Ok(normalize(load_profiles(path)?))
}
