//! Global Application State
//!
//! Cross-view notification state. Fetch errors render inline in the view
//! that owns them; only transient success notices are global.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }
}
