//! Filter form inputs bound to the shared `FilterState` signal.

use dioxus::prelude::*;

use crate::state::{FilterField, FilterState};
use crate::vocab;

/// Props for CheckboxGroup
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxGroupProps {
    pub filters: Signal<FilterState>,
    pub field: FilterField,
}

/// Checkbox grid for one multi-valued dimension. A click toggles the
/// option's submission value in the store; checked state reflects set
/// membership so double-toggling visibly round-trips.
#[component]
pub fn CheckboxGroup(props: CheckboxGroupProps) -> Element {
    let mut filters = props.filters;
    let field = props.field;
    let options = vocab::options_for(field);

    rsx! {
        div {
            class: "grid grid-cols-2 md:grid-cols-3 gap-2",
            for option in options.iter() {
                div {
                    key: "{option.id}",
                    class: "flex items-center",
                    input {
                        r#type: "checkbox",
                        id: "{option.id}",
                        class: "mr-2",
                        checked: filters.read().is_selected(field, option.value),
                        onchange: move |_| filters.write().toggle(field, option.value),
                    }
                    label {
                        r#for: "{option.id}",
                        "{option.label}"
                    }
                }
            }
        }
    }
}

/// Props for StateSelect
#[derive(Props, Clone, PartialEq)]
pub struct StateSelectProps {
    pub filters: Signal<FilterState>,
}

/// Single-valued location selector over the 50 US states. Selecting the
/// blank entry clears the constraint.
#[component]
pub fn StateSelect(props: StateSelectProps) -> Element {
    let mut filters = props.filters;
    let selected = filters.read().location().to_string();

    rsx! {
        select {
            id: "state",
            name: "state",
            class: "px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
            value: "{selected}",
            onchange: move |e| filters.write().set_location(e.value()),
            option { value: "", "Select a State" }
            for state in vocab::US_STATES.iter() {
                option {
                    key: "{state.code}",
                    value: "{state.code}",
                    "{state.name} - {state.code}"
                }
            }
        }
    }
}
