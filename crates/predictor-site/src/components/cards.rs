//! Card components for the estimator page

use leptos::*;

#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white/5 border border-white/10 rounded-xl p-6 backdrop-blur-md hover:border-indigo-400/40 transition">
            <div class="text-3xl mb-4">{icon}</div>
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="text-gray-400 text-sm">{description}</p>
        </div>
    }
}
