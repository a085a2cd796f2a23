//! Chat Page
//!
//! Free-text questions about energy usage, answered by the chat service.
//! Answers may carry a stats block and/or a telemetry series, rendered with
//! the same summary and chart layout as the dashboard.

use leptos::*;

use crate::api::client::ChatApi;
use crate::api::types::ChatResponse;
use crate::components::{Loading, StatSummary, TelemetryChart};
use crate::state::requests::Generation;

/// Chat page component
#[component]
pub fn Chat() -> impl IntoView {
    let api = use_context::<ChatApi>().expect("ChatApi not found");

    let (query, set_query) = create_signal(String::new());
    let (response, set_response) = create_signal(None::<ChatResponse>);
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let generation = Generation::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let text = query.get().trim().to_string();
        if text.is_empty() {
            return;
        }

        let tag = generation.begin();
        set_loading.set(true);
        set_error.set(None);

        let api = api.clone();
        spawn_local(async move {
            let result = api.query(&text).await;
            // A newer submission supersedes this one
            if !generation.is_current(tag) {
                return;
            }
            match result {
                Ok(answer) => {
                    set_response.set(Some(answer));
                    // The question is cleared only once the answer is in; a
                    // failed submission keeps it in the field.
                    set_query.set(String::new());
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            // Query form with example questions
            <section class="bg-gray-800 rounded-xl p-6">
                <h1 class="text-2xl font-bold mb-2">"Ask about your energy usage"</h1>
                <p class="text-gray-400 text-sm mb-1">"Example questions:"</p>
                <ul class="text-gray-400 text-sm mb-4 space-y-1">
                    <li>"• How much energy did my fridge use yesterday?"</li>
                    <li>"• Which device consumed the most power last week?"</li>
                    <li>"• What's my total energy consumption today?"</li>
                </ul>

                <form on:submit=on_submit class="space-y-4">
                    <input
                        type="text"
                        placeholder="Type your question here..."
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                        disabled=move || loading.get()
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none
                               disabled:opacity-50"
                    />
                    <button
                        type="submit"
                        disabled=move || loading.get() || query.get().trim().is_empty()
                        class="px-6 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if loading.get() { "Thinking..." } else { "Ask" }}
                    </button>
                </form>
            </section>

            // Inline error slot, overwritten by the latest failure
            {move || error.get().map(|message| view! {
                <div class="bg-red-600/20 border border-red-600 text-red-300 rounded-lg px-4 py-3">
                    {message}
                </div>
            })}

            {move || loading.get().then(|| view! { <Loading /> })}

            // Latest answer, replaced on every new submission
            {move || response.get().map(|answer| view! { <AnswerCard response=answer /> })}
        </div>
    }
}

/// One chat answer: text, plus optional stats and telemetry payloads.
/// A missing telemetry key suppresses the chart entirely; an empty series
/// still gets a chart with zero points.
#[component]
fn AnswerCard(response: ChatResponse) -> impl IntoView {
    let ChatResponse { answer, data, .. } = response;

    let stats_view = data.stats.map(|stats| {
        view! {
            <div class="mt-6">
                <h3 class="text-lg font-semibold mb-3">"Statistics"</h3>
                <StatSummary stats=stats />
            </div>
        }
    });

    let chart_view = data.telemetry.map(|points| {
        view! {
            <div class="mt-6">
                <h3 class="text-lg font-semibold mb-3">"Energy Usage Over Time"</h3>
                <TelemetryChart points=Signal::derive(move || points.clone()) />
            </div>
        }
    });

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <p class="text-gray-200 leading-relaxed whitespace-pre-wrap">{answer}</p>
            {stats_view}
            {chart_view}
        </section>
    }
}
