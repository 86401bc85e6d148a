//! Main application component

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use predictor_core::EstimatorConfig;
use crate::pages::*;
use crate::components::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    // One config for the whole page; server render and hydration see the
    // same compiled-in values.
    provide_context(EstimatorConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/predictor-site.css"/>
        <Title text="PredictorPro | Mobile Price Estimator"/>
        <Meta
            name="description"
            content="Estimate the market price of any phone from its specifications."
        />
        <Link rel="icon" href="/assets/favicon.svg"/>

        <Router>
            <div class="relative min-h-screen overflow-hidden bg-gray-950 text-white">
                // Ambient glow layers behind everything
                <div
                    class="pointer-events-none absolute -top-40 left-1/2 h-96 w-96 -translate-x-1/2 rounded-full bg-indigo-600/20 blur-3xl"
                    aria-hidden="true"
                ></div>
                <div
                    class="pointer-events-none absolute bottom-0 right-0 h-80 w-80 rounded-full bg-cyan-500/10 blur-3xl"
                    aria-hidden="true"
                ></div>

                <div class="relative z-10 min-h-screen flex flex-col">
                    <Navbar/>
                    <main class="flex-1 flex flex-col items-center px-4 py-10 sm:px-6 lg:py-16">
                        <Routes>
                            <Route path="/" view=HomePage/>
                        </Routes>
                    </main>
                    <Footer/>
                </div>
            </div>
        </Router>
    }
}
