//! Home page

use leptos::*;
use crate::components::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="w-full max-w-5xl">
            // Hero
            <div class="text-center mb-10 lg:mb-14">
                <h1 class="text-3xl sm:text-4xl lg:text-5xl font-bold tracking-tight">
                    "Mobile Price Estimator"
                </h1>
                <p class="text-base sm:text-lg text-gray-400 max-w-2xl mx-auto mt-3">
                    "Harness AI to predict market value with professional-grade precision."
                </p>
            </div>

            <PredictionForm/>

            // Feature highlights
            <div class="grid md:grid-cols-3 gap-6 mt-12 lg:mt-16">
                <FeatureCard
                    icon="📊"
                    title="Market Analysis"
                    description="Real-time data synchronization with top global retailers for accurate pricing."
                />
                <FeatureCard
                    icon="🧠"
                    title="ML Algorithm"
                    description="Advanced neural networks processing over 50 technical parameters."
                />
                <FeatureCard
                    icon="🛡️"
                    title="98% Accuracy"
                    description="Verified predictions with a minimal margin of error compared to MSRP."
                />
            </div>
        </div>
    }
}
