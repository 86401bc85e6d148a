//! Site footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-white/10">
            <div class="container mx-auto px-4 py-8 text-center">
                <p class="text-gray-500 text-sm">
                    "© 2024 PredictorPro Systems. Powered by Advanced Intelligence."
                </p>
            </div>
        </footer>
    }
}
