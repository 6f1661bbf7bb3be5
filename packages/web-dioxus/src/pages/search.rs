//! Provider search page component

use dioxus::prelude::*;

use crate::components::{CheckboxGroup, ProviderCard, SearchingIndicator, StateSelect};
use crate::search::build_query;
use crate::state::{FilterField, FilterState, RequestSequence, SearchPhase};
use crate::types::{ProviderRecord, SearchQuery};

/// Search page - filter criteria plus the matched provider list
#[component]
pub fn Search() -> Element {
    let filters = use_signal(FilterState::default);
    let mut results = use_signal(Vec::<ProviderRecord>::new);
    let mut phase = use_signal(|| SearchPhase::Idle);
    // The phase the page last completed in: Idle until a search succeeds,
    // Displayed afterwards. Never Searching, so a failure knows where to
    // land even while other submits are in flight.
    let mut settled = use_signal(|| SearchPhase::Idle);
    let mut error = use_signal(|| None::<String>);
    let mut sequence = use_signal(RequestSequence::new);

    let handle_search = move |_| {
        // Snapshot the payload now; edits made while the request is in
        // flight must not change what was submitted.
        let query = build_query(&filters.read());
        let seq = sequence.write().begin();

        spawn(async move {
            do_search(
                query,
                seq,
                &mut sequence,
                &mut results,
                &mut phase,
                &mut settled,
                &mut error,
            )
            .await;
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",

            // Header
            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-4xl mx-auto px-4 py-8",
                    h1 {
                        class: "text-3xl font-bold text-gray-900 mb-2",
                        "Find a mental health services provider"
                    }
                    p {
                        class: "text-gray-600",
                        "Tell us what you're looking for and we'll match you with providers."
                    }
                }
            }

            // Filter form
            form {
                class: "max-w-4xl mx-auto px-4 py-6",
                onsubmit: handle_search,

                h2 { class: "text-xl font-semibold mb-4", "Location" }
                StateSelect { filters }

                h2 { class: "text-xl font-semibold mt-8 mb-4", "Areas of Concern" }
                p { class: "mb-4 text-gray-600", "Select the areas you'd like to work on with your provider." }
                CheckboxGroup { filters, field: FilterField::AreasOfConcern }

                h2 { class: "text-xl font-semibold mt-8 mb-4", "Languages" }
                p { class: "mb-4 text-gray-600", "Choose any languages you're comfortable speaking to your health provider in." }
                CheckboxGroup { filters, field: FilterField::Languages }

                h2 { class: "text-xl font-semibold mt-8 mb-4", "Preferred Treatment Modality" }
                p { class: "mb-4 text-gray-600", "If there are any treatment modalities you prefer, select them below." }
                CheckboxGroup { filters, field: FilterField::Modalities }

                h2 { class: "text-xl font-semibold mt-8 mb-4", "Payment Methods" }
                p { class: "mb-4 text-gray-600", "Select your preferred payment methods." }
                CheckboxGroup { filters, field: FilterField::PaymentMethods }

                h2 { class: "text-xl font-semibold mt-8 mb-4", "Therapist Preferences" }
                p { class: "mb-4 text-gray-600", "Select any preferences you have regarding your therapist." }
                CheckboxGroup { filters, field: FilterField::TherapistPreferences }

                button {
                    r#type: "submit",
                    class: "p-4 w-64 block mx-auto mt-8 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors font-medium",
                    "Search"
                }
            }

            // Results
            main {
                class: "max-w-4xl mx-auto px-4 py-6",

                if let Some(err) = error() {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg mb-6",
                        "{err}"
                    }
                }

                if phase() == SearchPhase::Searching {
                    SearchingIndicator {}
                } else if phase() == SearchPhase::Displayed {
                    if results().is_empty() {
                        div {
                            class: "text-center py-12",
                            p { class: "text-gray-500", "No providers matched your criteria." }
                        }
                    } else {
                        div {
                            class: "space-y-4",
                            p {
                                class: "text-sm text-gray-500 mb-4",
                                "Found {results().len()} provider"
                                if results().len() != 1 { "s" }
                            }
                            for provider in results() {
                                ProviderCard { provider }
                            }
                        }
                    }
                }
            }
        }
    }
}

async fn do_search(
    query: SearchQuery,
    seq: u64,
    sequence: &mut Signal<RequestSequence>,
    results: &mut Signal<Vec<ProviderRecord>>,
    phase: &mut Signal<SearchPhase>,
    settled: &mut Signal<SearchPhase>,
    error: &mut Signal<Option<String>>,
) {
    phase.set(SearchPhase::Searching);
    error.set(None);

    let outcome = search_providers(query).await;

    let is_latest = sequence.peek().is_latest(seq);
    let last_settled = *settled.peek();
    match settle(outcome, is_latest, last_settled) {
        Settlement::Ignore => {}
        Settlement::Display(providers) => {
            results.set(providers);
            settled.set(SearchPhase::Displayed);
            phase.set(SearchPhase::Displayed);
        }
        Settlement::Fail { resume, detail } => {
            tracing::error!("provider search failed: {detail}");
            error.set(Some(
                "Something went wrong while searching. Please try again.".to_string(),
            ));
            phase.set(resume);
        }
    }
}

/// What a finished request does to the page.
#[derive(Debug, PartialEq)]
enum Settlement {
    /// A newer submit owns the display; drop this response unseen.
    Ignore,
    /// Replace the result list wholesale and show it.
    Display(Vec<ProviderRecord>),
    /// Keep the current results and return to the last settled phase.
    Fail { resume: SearchPhase, detail: String },
}

/// Decide how a finished request applies to the page. `last_settled` is the
/// phase the page last completed in, never the transient Searching phase,
/// so overlapping submits that all fail land back on Idle instead of an
/// empty Displayed that no search ever produced.
fn settle<E: std::fmt::Display>(
    outcome: Result<Vec<ProviderRecord>, E>,
    is_latest: bool,
    last_settled: SearchPhase,
) -> Settlement {
    if !is_latest {
        return Settlement::Ignore;
    }

    match outcome {
        Ok(providers) => Settlement::Display(providers),
        Err(e) => Settlement::Fail {
            resume: last_settled,
            detail: e.to_string(),
        },
    }
}

#[server]
async fn search_providers(query: SearchQuery) -> Result<Vec<ProviderRecord>, ServerFnError> {
    let client = crate::search::server_client();
    client
        .search(&query)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
