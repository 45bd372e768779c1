//! Raw profile export types, exactly as upstream ships them.
//!
//! Every field an envelope may carry is optional here; missing values only
//! become defaults during normalization. Decoding fails solely when the
//! input is not an array of profile-shaped objects.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when the input is not a JSON array of profile records.
#[derive(Debug, Error)]
#[error("invalid profile input: {0}")]
pub struct InvalidInputError(#[from] serde_json::Error);

/// A financial figure as upstream ships it: sometimes a bare number,
/// sometimes a decorated string like "$5M", "250K", or "Seed".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl Default for RawAmount {
    /// The stand-in for an absent financial scalar.
    fn default() -> Self {
        RawAmount::Text("0".to_string())
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole values print without the trailing ".0", but only inside
            // the range where the integer cast is exact.
            RawAmount::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                write!(f, "{}", *n as i64)
            }
            RawAmount::Number(n) => write!(f, "{}", n),
            RawAmount::Text(s) => f.write_str(s),
        }
    }
}

/// One record of an upstream profile export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProfile {
    pub data: Option<ProfileData>,
}

/// The envelope inside a profile record.
///
/// The two financial scalars keep their odd upstream capitalization and
/// apply to every organization listed in the same envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileData {
    pub organizations: Option<Vec<RawOrganization>>,
    pub people: Option<Vec<RawPerson>>,
    #[serde(rename = "FundsReceived")]
    pub funds_received: Option<RawAmount>,
    #[serde(rename = "SeedRound")]
    pub seed_round: Option<RawAmount>,
}

/// An organization as upstream ships it. `id` is the join key and degrades
/// to an empty string when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOrganization {
    pub id: Option<String>,
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub organization_revenue: Option<f64>,
    pub founded_year: Option<i64>,
    pub intent_strength: Option<String>,
    pub website_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub primary_phone: Option<RawPhone>,
    pub sanitized_phone: Option<String>,
}

/// Nested phone object on an organization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPhone {
    pub number: Option<String>,
}

/// A person as upstream ships them. The embedded `organization` fragment is
/// a partial copy of the employer and is the only source for the person's
/// phone number.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPerson {
    pub id: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub photo_url: Option<String>,
    pub headline: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub city: Option<String>,
    pub seniority: Option<String>,
    pub organization: Option<RawOrganization>,
    pub organization_id: Option<String>,
    pub employment_history: Option<Vec<RawEmployment>>,
}

/// One entry of a person's employment history, upstream field names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEmployment {
    pub organization_name: Option<String>,
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
}

/// Decode a profile export: a JSON array of profile records.
///
/// Unknown fields are ignored and absent or null fields decode to `None`.
/// The only failure is a contract violation, input that is not an array of
/// profile-shaped objects at all.
pub fn parse_profiles(input: &str) -> Result<Vec<RawProfile>, InvalidInputError> {
    Ok(serde_json::from_str(input)?)
}
