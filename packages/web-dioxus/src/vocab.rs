//! The fixed filter vocabularies the form presents.
//!
//! These are closed lists; the backend matches on the `value` strings, so
//! values are part of the search service contract. `label` is what the
//! visitor sees, `id` keys the checkbox element, and the two differ for
//! several treatment modalities (the label spells the acronym out).

use crate::state::FilterField;

/// One selectable option in a multi-valued filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    /// Stable element id for the checkbox; never submitted.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Submission value as the backend expects it.
    pub value: &'static str,
}

/// A US state for the location selector. Submission value is the
/// lower-cased two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsState {
    pub code: &'static str,
    pub name: &'static str,
}

pub const AREAS_OF_CONCERN: &[FilterOption] = &[
    FilterOption { id: "area-anger-management", label: "Anger Management", value: "anger management" },
    FilterOption { id: "area-anxiety", label: "Anxiety", value: "anxiety" },
    FilterOption { id: "area-career", label: "Career", value: "career" },
    FilterOption { id: "area-depression", label: "Depression", value: "depression" },
    FilterOption { id: "area-family-issues", label: "Family Issues", value: "family issues" },
    FilterOption { id: "area-grief", label: "Grief", value: "grief" },
    FilterOption { id: "area-identity", label: "Identity", value: "identity" },
    FilterOption { id: "area-life-transitions", label: "Life Transitions", value: "life transitions" },
    FilterOption { id: "area-relationships", label: "Relationships", value: "relationships" },
    FilterOption { id: "area-self-esteem", label: "Self-esteem", value: "self-esteem" },
    FilterOption { id: "area-stress", label: "Stress", value: "stress" },
    FilterOption { id: "area-trauma", label: "Trauma", value: "trauma" },
];

pub const PAYMENT_METHODS: &[FilterOption] = &[
    FilterOption { id: "payment-cash", label: "Cash", value: "cash" },
    FilterOption { id: "payment-check", label: "Check", value: "check" },
    FilterOption { id: "payment-credit-card", label: "Credit Card", value: "credit card" },
    FilterOption { id: "payment-insurance", label: "Insurance", value: "insurance" },
    FilterOption { id: "payment-medicaid", label: "Medicaid", value: "medicaid" },
    FilterOption { id: "payment-medicare", label: "Medicare", value: "medicare" },
    FilterOption { id: "payment-sliding-scale", label: "Sliding Scale", value: "sliding scale" },
];

pub const THERAPIST_PREFERENCES: &[FilterOption] = &[
    FilterOption { id: "pref-bipoc", label: "BIPOC", value: "bipoc" },
    FilterOption { id: "pref-female", label: "Female", value: "female" },
    FilterOption { id: "pref-lgbtq", label: "LGBTQ+", value: "lgbtq+" },
    FilterOption { id: "pref-male", label: "Male", value: "male" },
    FilterOption { id: "pref-non-binary", label: "Non-binary", value: "non-binary" },
];

/// Label-sorted. Several labels spell out an acronym whose submission value
/// stays abbreviated ("Cognitive Behavioral Therapy (CBT)" submits "CBT").
pub const TREATMENT_MODALITIES: &[FilterOption] = &[
    FilterOption { id: "act", label: "Acceptance and Commitment Therapy (ACT)", value: "Acceptance and Commitment Therapy" },
    FilterOption { id: "art", label: "Art Therapy", value: "Art Therapy" },
    FilterOption { id: "cbt", label: "Cognitive Behavioral Therapy (CBT)", value: "CBT" },
    FilterOption { id: "contextual", label: "Contextual Therapy", value: "Contextual Therapy" },
    FilterOption { id: "dbt", label: "Dialectical Behavioral Therapy (DBT)", value: "DBT" },
    FilterOption { id: "emdr", label: "EMDR", value: "EMDR" },
    FilterOption { id: "eft", label: "Emotionally Focused Therapy", value: "Emotionally Focused Therapy" },
    FilterOption { id: "family", label: "Family Systems Therapy", value: "Family Systems Therapy" },
    FilterOption { id: "mbct", label: "Mindfulness-Based (MBCT)", value: "MBCT" },
    FilterOption { id: "mi", label: "Motivational Interviewing", value: "MI" },
    FilterOption { id: "narrative", label: "Narrative Therapy", value: "Narrative Therapy" },
    FilterOption { id: "person", label: "Person Centered Therapy", value: "Person Centered Therapy" },
    FilterOption { id: "prolonged", label: "Prolonged Exposure Therapy", value: "Prolonged Exposure Therapy" },
    FilterOption { id: "psychodynamic", label: "Psychodynamic Therapy", value: "Psychodynamic" },
    FilterOption { id: "relational", label: "Relational-Cultural Therapy", value: "Relational-Cultural Therapy" },
    FilterOption { id: "restoration", label: "Restoration Therapy", value: "Restoration Therapy" },
    FilterOption { id: "tfcbt", label: "Trauma Focused CBT", value: "Trauma Focused CBT" },
];

/// Languages keep their regional grouping rather than alphabetical order.
/// The id is the checkbox key only; the full name is what gets submitted
/// (lower-cased at query build time).
pub const LANGUAGES: &[FilterOption] = &[
    FilterOption { id: "en", label: "English", value: "English" },
    FilterOption { id: "zh", label: "Mandarin", value: "Mandarin" },
    FilterOption { id: "zh2", label: "Cantonese", value: "Cantonese" },
    FilterOption { id: "ja", label: "Japanese", value: "Japanese" },
    FilterOption { id: "ko", label: "Korean", value: "Korean" },
    FilterOption { id: "hi", label: "Hindi", value: "Hindi" },
    FilterOption { id: "th", label: "Thai", value: "Thai" },
    FilterOption { id: "vi", label: "Vietnamese", value: "Vietnamese" },
    FilterOption { id: "id", label: "Indonesian", value: "Indonesian" },
    FilterOption { id: "ms", label: "Malay", value: "Malay" },
    FilterOption { id: "tl", label: "Tagalog", value: "Tagalog" },
    FilterOption { id: "es", label: "Spanish", value: "Spanish" },
    FilterOption { id: "fr", label: "French", value: "French" },
    FilterOption { id: "de", label: "German", value: "German" },
    FilterOption { id: "it", label: "Italian", value: "Italian" },
    FilterOption { id: "pt", label: "Portuguese", value: "Portuguese" },
    FilterOption { id: "ru", label: "Russian", value: "Russian" },
    FilterOption { id: "ar", label: "Arabic", value: "Arabic" },
    FilterOption { id: "tr", label: "Turkish", value: "Turkish" },
    FilterOption { id: "fa", label: "Persian", value: "Persian" },
    FilterOption { id: "bn", label: "Bengali", value: "Bengali" },
    FilterOption { id: "ur", label: "Urdu", value: "Urdu" },
    FilterOption { id: "my", label: "Burmese", value: "Burmese" },
    FilterOption { id: "km", label: "Khmer", value: "Khmer" },
    FilterOption { id: "lo", label: "Lao", value: "Lao" },
];

pub const US_STATES: &[UsState] = &[
    UsState { code: "AL", name: "Alabama" },
    UsState { code: "AK", name: "Alaska" },
    UsState { code: "AZ", name: "Arizona" },
    UsState { code: "AR", name: "Arkansas" },
    UsState { code: "CA", name: "California" },
    UsState { code: "CO", name: "Colorado" },
    UsState { code: "CT", name: "Connecticut" },
    UsState { code: "DE", name: "Delaware" },
    UsState { code: "FL", name: "Florida" },
    UsState { code: "GA", name: "Georgia" },
    UsState { code: "HI", name: "Hawaii" },
    UsState { code: "ID", name: "Idaho" },
    UsState { code: "IL", name: "Illinois" },
    UsState { code: "IN", name: "Indiana" },
    UsState { code: "IA", name: "Iowa" },
    UsState { code: "KS", name: "Kansas" },
    UsState { code: "KY", name: "Kentucky" },
    UsState { code: "LA", name: "Louisiana" },
    UsState { code: "ME", name: "Maine" },
    UsState { code: "MD", name: "Maryland" },
    UsState { code: "MA", name: "Massachusetts" },
    UsState { code: "MI", name: "Michigan" },
    UsState { code: "MN", name: "Minnesota" },
    UsState { code: "MS", name: "Mississippi" },
    UsState { code: "MO", name: "Missouri" },
    UsState { code: "MT", name: "Montana" },
    UsState { code: "NE", name: "Nebraska" },
    UsState { code: "NV", name: "Nevada" },
    UsState { code: "NH", name: "New Hampshire" },
    UsState { code: "NJ", name: "New Jersey" },
    UsState { code: "NM", name: "New Mexico" },
    UsState { code: "NY", name: "New York" },
    UsState { code: "NC", name: "North Carolina" },
    UsState { code: "ND", name: "North Dakota" },
    UsState { code: "OH", name: "Ohio" },
    UsState { code: "OK", name: "Oklahoma" },
    UsState { code: "OR", name: "Oregon" },
    UsState { code: "PA", name: "Pennsylvania" },
    UsState { code: "RI", name: "Rhode Island" },
    UsState { code: "SC", name: "South Carolina" },
    UsState { code: "SD", name: "South Dakota" },
    UsState { code: "TN", name: "Tennessee" },
    UsState { code: "TX", name: "Texas" },
    UsState { code: "UT", name: "Utah" },
    UsState { code: "VT", name: "Vermont" },
    UsState { code: "VA", name: "Virginia" },
    UsState { code: "WA", name: "Washington" },
    UsState { code: "WV", name: "West Virginia" },
    UsState { code: "WI", name: "Wisconsin" },
    UsState { code: "WY", name: "Wyoming" },
];

/// The option table backing a multi-valued dimension.
pub fn options_for(field: FilterField) -> &'static [FilterOption] {
    match field {
        FilterField::AreasOfConcern => AREAS_OF_CONCERN,
        FilterField::Languages => LANGUAGES,
        FilterField::Modalities => TREATMENT_MODALITIES,
        FilterField::PaymentMethods => PAYMENT_METHODS,
        FilterField::TherapistPreferences => THERAPIST_PREFERENCES,
    }
}
