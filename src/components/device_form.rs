//! Device Form Component
//!
//! Modal dialog for registering a new device.

use leptos::*;

use crate::api::client::TelemetryApi;
use crate::api::types::DEVICE_TYPES;
use crate::state::global::GlobalState;

/// Add-device modal dialog. `on_created` fires after a successful create,
/// before the dialog closes; the owning page refetches there.
#[component]
pub fn AddDeviceDialog(
    on_close: impl Fn() + 'static + Clone,
    on_created: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let api = use_context::<TelemetryApi>().expect("TelemetryApi not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (device_type, set_device_type) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    // Clone on_close for each place it's used
    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close.clone();
    let on_close_for_submit = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let n = name.get();
        let t = device_type.get();

        if n.trim().is_empty() || t.is_empty() {
            set_error.set(Some("Name and device type are required".to_string()));
            return;
        }

        set_submitting.set(true);

        let api = api.clone();
        let state = state.clone();
        let on_created = on_created.clone();
        let on_close = on_close_for_submit.clone();
        spawn_local(async move {
            match api.create_device(n.trim(), &t).await {
                Ok(_device) => {
                    state.show_success("Device added");
                    set_name.set(String::new());
                    set_device_type.set(String::new());
                    set_error.set(None);
                    on_created();
                    on_close();
                }
                Err(e) => {
                    // Leave the entered values intact for retry
                    set_error.set(Some(e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-semibold">"Add New Device"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                // Inline error banner; the dialog stays open for retry
                {move || error.get().map(|message| view! {
                    <div class="mb-4 bg-red-600/20 border border-red-600 text-red-300 text-sm \
                                rounded-lg px-4 py-3">
                        {message}
                    </div>
                })}

                <form on:submit=on_submit class="space-y-4">
                    // Name
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Device Name"</label>
                        <input
                            type="text"
                            placeholder="e.g., Freezer"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    // Device type
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Device Type"</label>
                        <select
                            on:change=move |ev| set_device_type.set(event_target_value(&ev))
                            prop:value=move || device_type.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="" disabled>"Select a type"</option>
                            {DEVICE_TYPES.iter().map(|type_name| view! {
                                <option value=*type_name>{*type_name}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    // Buttons
                    <div class="flex space-x-3 pt-4">
                        <button
                            type="button"
                            on:click=move |_| on_close_for_cancel()
                            class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="flex-1 px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if submitting.get() { "Adding..." } else { "Add" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
