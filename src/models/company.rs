use serde::{Deserialize, Serialize};

use crate::raw::RawAmount;

/// Display-ready company record derived from a raw organization.
///
/// `logo`/`logo_url` and `revenue`/`organization_revenue` carry the same
/// value under two names because downstream consumers read different ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub logo_url: String,
    pub revenue: f64,
    pub organization_revenue: f64,
    pub founded_year: i64,
    pub intent_strength: IntentStrength,
    pub website_url: String,
    pub linkedin_url: String,
    pub primary_phone: String,
    pub sanitized_phone: String,
    /// Parsed from the profile envelope's FundsReceived scalar.
    pub funds_received: f64,
    /// Carried through exactly as the envelope held it, never parsed.
    pub seed_round: RawAmount,
}

impl Company {
    /// Whether any funding was recorded for this company.
    pub fn has_funding(&self) -> bool {
        self.funds_received != 0.0
    }
}

/// Three-level buying-intent signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntentStrength {
    #[default]
    Low,
    Medium,
    High,
}

impl IntentStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentStrength::Low => "Low",
            IntentStrength::Medium => "Medium",
            IntentStrength::High => "High",
        }
    }

    /// Decode the raw field; anything but the two stronger names reads as
    /// `Low`, including absent values and unknown spellings.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("Medium") => IntentStrength::Medium,
            Some("High") => IntentStrength::High,
            _ => IntentStrength::Low,
        }
    }
}
