//! Wire types for the search service API.
//!
//! Field names here are the request/response contract with the search
//! service; do not rename without coordinating a backend change.

use serde::{Deserialize, Serialize};

/// The payload POSTed to the search endpoint. Built fresh on every submit
/// by [`crate::search::build_query`] and discarded after the request.
///
/// Every field is an array of zero or more strings; `locations` carries at
/// most one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub areas_of_concern: Vec<String>,
    pub preferred_treatment_modality: Vec<String>,
    pub languages: Vec<String>,
    pub payment_methods: Vec<String>,
    pub therapist_preferences: Vec<String>,
    pub locations: Vec<String>,
}

/// One matched provider, as returned by the search service.
///
/// The service also sends delimited `treatment_modality` and
/// `areas_of_concern` strings; the page does not render those, so they are
/// left out here and ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRecord {
    pub first_name: String,
    pub last_name: String,
    pub gender_identity: Option<String>,
    pub ethnic_identity: Option<String>,
    pub location: String,
    pub language: Option<String>,
    pub bio: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_serializes_with_wire_field_names() {
        let query = SearchQuery {
            areas_of_concern: vec!["anxiety".into()],
            languages: vec!["english".into()],
            locations: vec!["ca".into()],
            ..SearchQuery::default()
        };

        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["areas_of_concern"], serde_json::json!(["anxiety"]));
        assert_eq!(json["preferred_treatment_modality"], serde_json::json!([]));
        assert_eq!(json["languages"], serde_json::json!(["english"]));
        assert_eq!(json["payment_methods"], serde_json::json!([]));
        assert_eq!(json["therapist_preferences"], serde_json::json!([]));
        assert_eq!(json["locations"], serde_json::json!(["ca"]));
        // empty selections serialize as empty arrays, never null
        assert!(json.as_object().unwrap().values().all(|v| v.is_array()));
    }

    #[test]
    fn provider_decodes_with_optional_fields_missing() {
        let json = r#"{
            "first_name": "Ada",
            "last_name": "Nguyen",
            "location": "ca",
            "bio": "Trauma-informed care."
        }"#;

        let provider: ProviderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(provider.first_name, "Ada");
        assert_eq!(provider.gender_identity, None);
        assert_eq!(provider.ethnic_identity, None);
        assert_eq!(provider.language, None);
    }

    #[test]
    fn provider_decodes_ignoring_unrendered_backend_fields() {
        let json = r#"{
            "first_name": "Ada",
            "last_name": "Nguyen",
            "gender_identity": "Female",
            "ethnic_identity": null,
            "location": "ca",
            "language": "English",
            "bio": "Trauma-informed care.",
            "treatment_modality": "CBT, EMDR",
            "areas_of_concern": "Anxiety\nGrief"
        }"#;

        let provider: ProviderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(provider.gender_identity.as_deref(), Some("Female"));
        assert_eq!(provider.ethnic_identity, None);
        assert_eq!(provider.language.as_deref(), Some("English"));
    }

    #[test]
    fn response_body_decodes_as_array() {
        let body = r#"[
            {"first_name": "Ada", "last_name": "Nguyen", "location": "ca", "bio": "a"},
            {"first_name": "Ben", "last_name": "Okafor", "location": "ny", "bio": "b"}
        ]"#;

        let providers: Vec<ProviderRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(providers.len(), 2);
        assert_eq!(providers[1].last_name, "Okafor");

        let empty: Vec<ProviderRecord> = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());
    }
}
