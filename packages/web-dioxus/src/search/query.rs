//! Translation from form state to the wire payload.

use crate::state::{FilterField, FilterState};
use crate::types::SearchQuery;

/// Build the request payload from the current selections. Pure and
/// deterministic: set fields become sequences in insertion order, language
/// values and the location code are lower-cased, every other dimension
/// keeps its stored casing, and an empty selection becomes an empty array.
pub fn build_query(state: &FilterState) -> SearchQuery {
    let location = state.location();
    SearchQuery {
        areas_of_concern: state.selection(FilterField::AreasOfConcern).to_vec(),
        preferred_treatment_modality: state.selection(FilterField::Modalities).to_vec(),
        languages: state
            .selection(FilterField::Languages)
            .iter()
            .map(|lang| lang.to_lowercase())
            .collect(),
        payment_methods: state.selection(FilterField::PaymentMethods).to_vec(),
        therapist_preferences: state.selection(FilterField::TherapistPreferences).to_vec(),
        locations: if location.is_empty() {
            Vec::new()
        } else {
            vec![location.to_lowercase()]
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_yields_english_and_empty_arrays() {
        let query = build_query(&FilterState::default());

        assert_eq!(query.languages, vec!["english"]);
        assert!(query.areas_of_concern.is_empty());
        assert!(query.preferred_treatment_modality.is_empty());
        assert!(query.payment_methods.is_empty());
        assert!(query.therapist_preferences.is_empty());
        assert!(query.locations.is_empty());
    }

    #[test]
    fn build_query_is_pure() {
        let mut state = FilterState::default();
        state.toggle(FilterField::AreasOfConcern, "anxiety");
        state.set_location("CA");

        assert_eq!(build_query(&state), build_query(&state));
    }

    #[test]
    fn areas_of_concern_scenario() {
        let mut state = FilterState::default();
        state.toggle(FilterField::AreasOfConcern, "anxiety");
        state.toggle(FilterField::AreasOfConcern, "grief");

        let query = build_query(&state);
        assert_eq!(query.areas_of_concern, vec!["anxiety", "grief"]);
        assert_eq!(query.languages, vec!["english"]);
        assert!(query.preferred_treatment_modality.is_empty());
        assert!(query.payment_methods.is_empty());
        assert!(query.therapist_preferences.is_empty());
        assert!(query.locations.is_empty());
    }

    #[test]
    fn location_is_lowercased_and_at_most_one() {
        let mut state = FilterState::default();
        state.set_location("CA");
        assert_eq!(build_query(&state).locations, vec!["ca"]);

        state.set_location("NY");
        assert_eq!(build_query(&state).locations, vec!["ny"]);

        state.set_location("");
        assert!(build_query(&state).locations.is_empty());
    }

    #[test]
    fn languages_are_lowercased_other_casing_kept() {
        let mut state = FilterState::default();
        state.toggle(FilterField::Languages, "Spanish");
        state.toggle(FilterField::Modalities, "CBT");
        state.toggle(FilterField::Modalities, "Psychodynamic");

        let query = build_query(&state);
        assert_eq!(query.languages, vec!["english", "spanish"]);
        // modalities keep their submission casing verbatim
        assert_eq!(query.preferred_treatment_modality, vec!["CBT", "Psychodynamic"]);
    }

    #[test]
    fn output_length_matches_selection_count() {
        let mut state = FilterState::default();
        for value in ["insurance", "cash", "medicare"] {
            state.toggle(FilterField::PaymentMethods, value);
        }
        state.toggle(FilterField::TherapistPreferences, "bipoc");

        let query = build_query(&state);
        assert_eq!(query.payment_methods.len(), 3);
        assert_eq!(query.therapist_preferences.len(), 1);
    }
}
