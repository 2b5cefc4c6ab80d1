//! Employee DTOs exchanged with the backend.
//!
//! # Design
//! These mirror the mock-server schema but are defined independently; the
//! integration tests catch drift between the two crates.

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier. The client never invents one.
pub type RecordId = u64;

/// An employee as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    #[serde(deserialize_with = "salary_from_json")]
    pub salary: f64,
    pub city: String,
}

impl Record {
    /// The three editable fields, as sent back on update.
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            salary: self.salary,
            city: self.city.clone(),
        }
    }
}

/// Body of create and update requests. Update is a full replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordFields {
    pub name: String,
    #[serde(deserialize_with = "salary_from_json")]
    pub salary: f64,
    pub city: String,
}

// Some backends serialize decimal columns as strings.
fn salary_from_json<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Salary {
        Number(f64),
        Text(String),
    }

    match Salary::deserialize(deserializer)? {
        Salary::Number(value) => Ok(value),
        Salary::Text(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| serde::de::Error::custom(format!("salary is not numeric: {text:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_decodes_numeric_salary() {
        let record: Record =
            serde_json::from_str(r#"{"id":1,"name":"Al","salary":9.99,"city":"NY"}"#).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.salary, 9.99);
    }

    #[test]
    fn record_decodes_string_salary() {
        let record: Record =
            serde_json::from_str(r#"{"id":2,"name":"Bo","salary":"1200.50","city":"LA"}"#)
                .unwrap();
        assert_eq!(record.salary, 1200.5);
    }

    #[test]
    fn record_rejects_garbage_salary() {
        let result: Result<Record, _> =
            serde_json::from_str(r#"{"id":2,"name":"Bo","salary":"lots","city":"LA"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn record_rejects_non_finite_salary_text() {
        for salary in ["NaN", "inf", "-infinity"] {
            let json = format!(r#"{{"id":2,"name":"Bo","salary":"{salary}","city":"LA"}}"#);
            assert!(serde_json::from_str::<Record>(&json).is_err(), "{salary}");
        }
    }

    #[test]
    fn fields_serialize_without_id() {
        let fields = RecordFields {
            name: "Al".to_string(),
            salary: 5.0,
            city: "NY".to_string(),
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Al");
        assert_eq!(json["salary"], 5.0);
    }

    #[test]
    fn fields_copies_editable_values() {
        let record = Record {
            id: 3,
            name: "Cy".to_string(),
            salary: 10.0,
            city: "SF".to_string(),
        };
        let fields = record.fields();
        assert_eq!(fields.name, "Cy");
        assert_eq!(fields.salary, 10.0);
        assert_eq!(fields.city, "SF");
    }
}
