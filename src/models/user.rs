use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::datetime;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representative_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representative_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<String>,
    #[serde(default, with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, with = "datetime::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl UserProfile {
    /// Booking is gated on a complete profile: name, contact, both
    /// representative fields, and the GST number must all be present.
    /// Email is not part of the gate.
    pub fn is_complete(&self) -> bool {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());

        !self.name.is_empty()
            && !self.contact.is_empty()
            && filled(&self.representative_name)
            && filled(&self.representative_contact)
            && filled(&self.gst_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            name: "Acme Traders".to_string(),
            email: "ops@acme.example".to_string(),
            contact: "9876543210".to_string(),
            representative_name: Some("Priya".to_string()),
            representative_contact: Some("9123456780".to_string()),
            gst_number: Some("22AAAAA0000A1Z5".to_string()),
            customer_type: Some("business".to_string()),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_complete_profile() {
        assert!(profile().is_complete());
    }

    #[test]
    fn test_missing_gst_number_is_incomplete() {
        let mut p = profile();
        p.gst_number = None;
        assert!(!p.is_complete());
    }

    #[test]
    fn test_empty_representative_is_incomplete() {
        let mut p = profile();
        p.representative_name = Some(String::new());
        assert!(!p.is_complete());
    }

    #[test]
    fn test_missing_email_does_not_gate_booking() {
        let mut p = profile();
        p.email = String::new();
        assert!(p.is_complete());
    }
}
