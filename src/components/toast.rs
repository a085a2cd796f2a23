//! Toast Notification Component
//!
//! Transient success notices. Errors render inline in the view that owns
//! them, so there is no error variant here.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2">
            {move || {
                state.success.get().map(|message| view! {
                    <div class="flex items-center space-x-3 bg-green-600 text-white px-4 py-3 \
                                rounded-lg shadow-lg transform transition-all duration-300 ease-out">
                        <span class="text-lg">"✓"</span>
                        <span class="text-sm font-medium">{message}</span>
                    </div>
                })
            }}
        </div>
    }
}
