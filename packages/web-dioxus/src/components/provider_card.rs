//! Provider result card.

use dioxus::prelude::*;

use crate::types::ProviderRecord;

/// Props for ProviderCard
#[derive(Props, Clone, PartialEq)]
pub struct ProviderCardProps {
    pub provider: ProviderRecord,
}

/// One card per matched provider, in response order. Optional fields are
/// omitted entirely (container included) when absent or empty; text is
/// interpolated through rsx, so bio and name content cannot inject markup.
#[component]
pub fn ProviderCard(props: ProviderCardProps) -> Element {
    let provider = &props.provider;

    rsx! {
        article {
            class: "bg-white border border-gray-200 rounded-lg p-6 hover:shadow-md transition-shadow",

            header {
                class: "flex items-start justify-between mb-3",
                h2 {
                    class: "text-lg font-semibold text-gray-900",
                    "{provider.first_name} {provider.last_name}"
                }
                div {
                    class: "flex flex-col items-end gap-1 text-sm text-gray-500",
                    if let Some(gender) = non_empty(&provider.gender_identity) {
                        div { class: "bg-gray-100 px-2 py-0.5 rounded", "{gender}" }
                    }
                    if let Some(ethnicity) = non_empty(&provider.ethnic_identity) {
                        div { class: "bg-gray-100 px-2 py-0.5 rounded", "{ethnicity}" }
                    }
                }
            }

            div {
                class: "space-y-2 text-sm",
                div {
                    span {
                        class: "text-gray-500 uppercase tracking-wide",
                        "{provider.location}"
                    }
                }

                if let Some(language) = non_empty(&provider.language) {
                    div {
                        div { class: "text-gray-600", "Speaks {language}" }
                    }
                }

                div {
                    p { class: "text-gray-700", "{provider.bio}" }
                }
            }
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_filters_absent_and_blank() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("Female".into())), Some("Female"));
    }
}
