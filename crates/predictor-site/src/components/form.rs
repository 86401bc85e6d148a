//! Prediction form: spec inputs, the predict action, and the result panel

use leptos::*;
use predictor_core::{
    estimate, EstimateError, EstimateMode, EstimatorConfig, MemoryCard, PredictRequest,
    Processor, SimSupport, SpecForm,
};
use crate::client;

#[component]
pub fn PredictionForm() -> impl IntoView {
    let config = use_context::<EstimatorConfig>().unwrap_or_default();
    let currency = config.currency;

    let (rating, set_rating) = create_signal(String::new());
    let (ram, set_ram) = create_signal(String::new());
    let (display, set_display) = create_signal(String::new());
    let (camera_mp, set_camera_mp) = create_signal(String::new());
    let (battery, set_battery) = create_signal(String::new());
    let (processor, set_processor) = create_signal(Processor::Snapdragon);
    let (card, set_card) = create_signal(MemoryCard::NotSupported);
    let (sim, set_sim) = create_signal(SimSupport::Single);

    // Absent until the first estimate lands; reset only by a page reload.
    let (price, set_price) = create_signal(None::<f64>);
    let (calculating, set_calculating) = create_signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = SpecForm {
            rating: rating.get(),
            ram: ram.get(),
            display: display.get(),
            camera_mp: camera_mp.get(),
            battery_capacity: battery.get(),
            processor_type: processor.get(),
            card: card.get(),
            sim: sim.get(),
        };

        match config.mode {
            EstimateMode::Local => {
                set_calculating.set(true);
                spawn_local(async move {
                    client::settle_delay().await;
                    let value = estimate(config.formula, &form.parse_or_default());
                    tracing::debug!(value, "local estimate ready");
                    set_price.set(Some(value));
                    set_calculating.set(false);
                });
            }
            EstimateMode::Remote => {
                // Validation happens before the busy flag flips, so a
                // blocked attempt leaves the form fully interactive.
                let missing = form.missing_required();
                if !missing.is_empty() {
                    let message =
                        format!("Please fill in {} before predicting.", missing.join(", "));
                    tracing::warn!(
                        error = %EstimateError::MissingFields(missing),
                        "submission blocked"
                    );
                    client::alert(&message);
                    return;
                }
                let request = PredictRequest::from_form(&form);
                set_calculating.set(true);
                spawn_local(async move {
                    match client::fetch_estimate(config.endpoint, &request).await {
                        Ok(value) => set_price.set(Some(value)),
                        Err(err) => {
                            tracing::error!(%err, "prediction request failed");
                            client::alert(&format!(
                                "Could not reach the prediction service at {}. \
                                 Start the companion API server and try again.",
                                config.endpoint
                            ));
                        }
                    }
                    set_calculating.set(false);
                });
            }
        }
    };

    view! {
        <div class="bg-white/5 border border-white/10 rounded-2xl shadow-lg backdrop-blur-md p-6 sm:p-8 max-w-4xl mx-auto">
            <form on:submit=on_submit>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-5">
                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-2">"⭐ Rating (1-5)"</label>
                        <input
                            type="number"
                            step="0.1"
                            min="0"
                            max="5"
                            class="w-full px-4 py-3 bg-gray-900/60 border border-white/10 rounded-lg placeholder-gray-600 focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 focus:outline-none"
                            placeholder="e.g. 4.5"
                            on:input=move |ev| set_rating.set(event_target_value(&ev))
                            prop:value=rating
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-2">"💾 RAM (GB)"</label>
                        <input
                            type="number"
                            min="0"
                            class="w-full px-4 py-3 bg-gray-900/60 border border-white/10 rounded-lg placeholder-gray-600 focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 focus:outline-none"
                            placeholder="e.g. 12"
                            on:input=move |ev| set_ram.set(event_target_value(&ev))
                            prop:value=ram
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-2">"🖥️ Display Size (Inches)"</label>
                        <input
                            type="number"
                            step="0.1"
                            min="0"
                            class="w-full px-4 py-3 bg-gray-900/60 border border-white/10 rounded-lg placeholder-gray-600 focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 focus:outline-none"
                            placeholder="e.g. 6.7"
                            on:input=move |ev| set_display.set(event_target_value(&ev))
                            prop:value=display
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-2">"📷 Camera (MP)"</label>
                        <input
                            type="number"
                            min="0"
                            class="w-full px-4 py-3 bg-gray-900/60 border border-white/10 rounded-lg placeholder-gray-600 focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 focus:outline-none"
                            placeholder="e.g. 108"
                            on:input=move |ev| set_camera_mp.set(event_target_value(&ev))
                            prop:value=camera_mp
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-2">"🔋 Battery (mAh)"</label>
                        <input
                            type="number"
                            min="0"
                            class="w-full px-4 py-3 bg-gray-900/60 border border-white/10 rounded-lg placeholder-gray-600 focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 focus:outline-none"
                            placeholder="e.g. 5000"
                            on:input=move |ev| set_battery.set(event_target_value(&ev))
                            prop:value=battery
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-2">"⚙️ Processor"</label>
                        <select
                            class="w-full px-4 py-3 bg-gray-900/60 border border-white/10 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 focus:outline-none"
                            on:change=move |ev| set_processor.set(Processor::from_value(&event_target_value(&ev)))
                        >
                            {Processor::ALL
                                .iter()
                                .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-2">"💽 Memory Card"</label>
                        <select
                            class="w-full px-4 py-3 bg-gray-900/60 border border-white/10 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 focus:outline-none"
                            on:change=move |ev| set_card.set(MemoryCard::from_value(&event_target_value(&ev)))
                        >
                            <option value="not-supported">"Not Supported"</option>
                            <option value="supported">"Supported"</option>
                        </select>
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-300 mb-2">"📶 SIM Type"</label>
                        <select
                            class="w-full px-4 py-3 bg-gray-900/60 border border-white/10 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-indigo-500 focus:outline-none"
                            on:change=move |ev| set_sim.set(SimSupport::from_value(&event_target_value(&ev)))
                        >
                            <option value="single">"Single SIM"</option>
                            <option value="dual">"Dual SIM"</option>
                        </select>
                    </div>
                </div>

                // Result + action row
                <div class="flex flex-col sm:flex-row sm:items-end justify-between gap-6 mt-8 pt-6 border-t border-white/10">
                    <div class="flex-1">
                        <p class="text-xs font-semibold uppercase tracking-widest text-indigo-400 mb-1">
                            "Estimated Value"
                        </p>
                        <div class="flex items-baseline gap-2">
                            <span class="text-3xl sm:text-4xl font-bold">
                                {move || currency.format(price.get().unwrap_or(0.0))}
                            </span>
                            <span class="text-sm text-gray-400">{currency.code()}</span>
                        </div>
                        <p class="text-xs italic text-gray-500 mt-1">
                            "Calculated based on current market trends & specs."
                        </p>
                    </div>

                    <button
                        type="submit"
                        disabled=move || calculating.get()
                        class="px-8 py-4 bg-indigo-600 hover:bg-indigo-700 disabled:opacity-60 disabled:cursor-not-allowed text-white font-semibold rounded-lg transition"
                    >
                        {move || if calculating.get() { "Calculating..." } else { "Predict Price" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
