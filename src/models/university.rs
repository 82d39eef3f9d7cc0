//! University profile as returned by `GET /university/profile`.

use serde::{Deserialize, Serialize};

/// Image shown when the university has not uploaded a logo.
pub const PLACEHOLDER_LOGO: &str = "assets/university-placeholder.png";

/// Uploaded logo reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub secure_url: String,
}

/// The university's descriptive record.
///
/// Field names follow the wire format; the body is stored as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    #[serde(rename = "universityName")]
    pub name: String,
    #[serde(rename = "universityEmail")]
    pub email: String,
    #[serde(rename = "universityLogo", default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
}

impl University {
    /// Logo URL, or the placeholder reference when none was uploaded.
    pub fn logo_url(&self) -> &str {
        self.logo
            .as_ref()
            .map(|logo| logo.secure_url.as_str())
            .unwrap_or(PLACEHOLDER_LOGO)
    }}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_logo() {
        let json = r#"{"universityName":"Alpha U","universityEmail":"a@x.edu"}"#;
        let university: University = serde_json::from_str(json).unwrap();

        assert_eq!(university.name, "Alpha U");
        assert_eq!(university.email, "a@x.edu");
        assert!(university.logo.is_none());
        assert_eq!(university.logo_url(), PLACEHOLDER_LOGO);
    }

    #[test]
    fn test_deserialize_with_logo() {
        let json = r#"{
            "universityName": "Beta Institute",
            "universityEmail": "admin@beta.edu",
            "universityLogo": { "secure_url": "https://cdn.example.com/beta.png" }
        }"#;
        let university: University = serde_json::from_str(json).unwrap();

        assert_eq!(university.logo_url(), "https://cdn.example.com/beta.png");
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{"universityName":"G","universityEmail":"g@g.edu","_id":"abc123"}"#;
        let university: University = serde_json::from_str(json).unwrap();
        assert_eq!(university.name, "G");
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let json = r#"{"universityEmail":"a@x.edu"}"#;
        assert!(serde_json::from_str::<University>(json).is_err());
    }
}
