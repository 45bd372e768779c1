use serde::{Deserialize, Serialize};

/// One role in a person's employment history, in upstream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentEntry {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case() {
        let entry = EmploymentEntry {
            company: "Acme".to_string(),
            position: "CTO".to_string(),
            start_date: "2015-01-01".to_string(),
            end_date: "".to_string(),
            current: true,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["company"], "Acme");
        assert_eq!(json["position"], "CTO");
        assert_eq!(json["startDate"], "2015-01-01");
        assert_eq!(json["endDate"], "");
        assert_eq!(json["current"], true);
    }
}
