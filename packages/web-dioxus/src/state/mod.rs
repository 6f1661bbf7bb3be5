//! Filter state for the provider search form.
//!
//! `FilterState` is the sole owner of the form's selections: one
//! single-valued location plus five multi-valued dimensions backed by
//! [`OrderedSet`]. It performs no I/O and no parsing, so none of its
//! operations can fail.

/// An insertion-ordered set of strings with case-insensitive identity.
///
/// Iteration order is insertion order; that order is visible in the
/// submitted payload (it carries no meaning for the backend, but keeping it
/// deterministic keeps tests deterministic). Stored casing is whatever was
/// first inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSet {
    items: Vec<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.items.iter().position(|v| v.eq_ignore_ascii_case(value))
    }

    pub fn contains(&self, value: &str) -> bool {
        self.position(value).is_some()
    }

    /// Remove `value` if present, insert it otherwise. Well-defined for any
    /// string; there is no error condition.
    pub fn toggle(&mut self, value: &str) {
        match self.position(value) {
            Some(idx) => {
                self.items.remove(idx);
            }
            None => self.items.push(value.to_string()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Snapshot the members as an ordered sequence.
    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        for value in iter {
            let value = value.into();
            if !set.contains(&value) {
                set.items.push(value);
            }
        }
        set
    }
}

/// The five multi-valued filter dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    AreasOfConcern,
    Languages,
    Modalities,
    PaymentMethods,
    TherapistPreferences,
}

/// The whole form state. Created with defaults when the page mounts and
/// mutated only through [`FilterState::toggle`] and
/// [`FilterState::set_location`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    location: String,
    areas_of_concern: OrderedSet,
    languages: OrderedSet,
    modalities: OrderedSet,
    payment_methods: OrderedSet,
    therapist_preferences: OrderedSet,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            location: String::new(),
            areas_of_concern: OrderedSet::new(),
            languages: ["English"].into_iter().collect(),
            modalities: OrderedSet::new(),
            payment_methods: OrderedSet::new(),
            therapist_preferences: OrderedSet::new(),
        }
    }
}

impl FilterState {
    fn set_mut(&mut self, field: FilterField) -> &mut OrderedSet {
        match field {
            FilterField::AreasOfConcern => &mut self.areas_of_concern,
            FilterField::Languages => &mut self.languages,
            FilterField::Modalities => &mut self.modalities,
            FilterField::PaymentMethods => &mut self.payment_methods,
            FilterField::TherapistPreferences => &mut self.therapist_preferences,
        }
    }

    /// Current selection for a multi-valued dimension.
    pub fn selection(&self, field: FilterField) -> &OrderedSet {
        match field {
            FilterField::AreasOfConcern => &self.areas_of_concern,
            FilterField::Languages => &self.languages,
            FilterField::Modalities => &self.modalities,
            FilterField::PaymentMethods => &self.payment_methods,
            FilterField::TherapistPreferences => &self.therapist_preferences,
        }
    }

    pub fn is_selected(&self, field: FilterField, value: &str) -> bool {
        self.selection(field).contains(value)
    }

    /// Toggle membership of `value` in one of the multi-valued dimensions.
    pub fn toggle(&mut self, field: FilterField, value: &str) {
        self.set_mut(field).toggle(value);
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Replace the location. The empty string means "no constraint". No
    /// validation happens here; an unknown code simply matches nothing
    /// on the backend.
    pub fn set_location(&mut self, value: impl Into<String>) {
        self.location = value.into();
    }

    /// Back to the documented defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Where the page is in its search cycle. Displayed-with-zero-results is a
/// distinct state from Idle, where no search has run yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
    Displayed,
}

/// Monotonic submit counter. Each submit takes a fresh sequence number and
/// a response is applied only while its number is still the latest, so
/// "last submit wins" holds even when an older request resolves later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next sequence number for a new submit.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_inserts_then_removes() {
        let mut set = OrderedSet::new();
        set.toggle("anxiety");
        assert!(set.contains("anxiety"));
        set.toggle("anxiety");
        assert!(!set.contains("anxiety"));
        assert!(set.is_empty());
    }

    #[test]
    fn double_toggle_restores_original_contents() {
        let mut state = FilterState::default();
        state.toggle(FilterField::PaymentMethods, "cash");
        let before = state.selection(FilterField::PaymentMethods).clone();

        state.toggle(FilterField::PaymentMethods, "insurance");
        state.toggle(FilterField::PaymentMethods, "insurance");

        assert_eq!(state.selection(FilterField::PaymentMethods), &before);
    }

    #[test]
    fn identity_is_case_insensitive() {
        let mut set = OrderedSet::new();
        set.toggle("English");
        assert!(set.contains("english"));
        assert!(set.contains("ENGLISH"));
        // toggling in another casing removes the existing member
        set.toggle("english");
        assert!(set.is_empty());
    }

    #[test]
    fn iteration_order_is_insertion_order() {
        let mut set = OrderedSet::new();
        set.toggle("anxiety");
        set.toggle("grief");
        set.toggle("career");
        assert_eq!(set.to_vec(), vec!["anxiety", "grief", "career"]);

        // removing and re-adding moves a member to the end
        set.toggle("anxiety");
        set.toggle("anxiety");
        assert_eq!(set.to_vec(), vec!["grief", "career", "anxiety"]);
    }

    #[test]
    fn from_iterator_deduplicates() {
        let set: OrderedSet = ["English", "english", "Spanish"].into_iter().collect();
        assert_eq!(set.to_vec(), vec!["English", "Spanish"]);
    }

    #[test]
    fn default_state_selects_only_english() {
        let state = FilterState::default();
        assert_eq!(state.selection(FilterField::Languages).to_vec(), vec!["English"]);
        assert!(state.selection(FilterField::AreasOfConcern).is_empty());
        assert!(state.selection(FilterField::Modalities).is_empty());
        assert!(state.selection(FilterField::PaymentMethods).is_empty());
        assert!(state.selection(FilterField::TherapistPreferences).is_empty());
        assert_eq!(state.location(), "");
    }

    #[test]
    fn set_location_accepts_any_string_including_empty() {
        let mut state = FilterState::default();
        state.set_location("CA");
        assert_eq!(state.location(), "CA");
        state.set_location("");
        assert_eq!(state.location(), "");
        state.set_location("not-a-state");
        assert_eq!(state.location(), "not-a-state");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = FilterState::default();
        state.toggle(FilterField::AreasOfConcern, "anxiety");
        state.toggle(FilterField::Languages, "Spanish");
        state.set_location("NY");

        state.reset();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn request_sequence_last_submit_wins() {
        let mut seq = RequestSequence::new();
        let first = seq.begin();
        let second = seq.begin();

        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));

        let third = seq.begin();
        assert!(seq.is_latest(third));
        assert!(!seq.is_latest(second));
    }
}
