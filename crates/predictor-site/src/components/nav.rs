//! Site navigation component

use leptos::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);

    view! {
        <nav class="bg-gray-950/80 backdrop-blur-md border-b border-white/10 sticky top-0 z-50">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    // Logo
                    <div class="flex items-center">
                        <a href="/" class="flex items-center">
                            <span class="text-2xl mr-2">"📱"</span>
                            <span class="text-xl font-bold">
                                "Predictor" <span class="text-indigo-400">"Pro"</span>
                            </span>
                        </a>
                    </div>

                    // Desktop Nav
                    <div class="hidden md:flex items-center space-x-8">
                        <a href="#" class="text-gray-400 hover:text-white transition">"Dashboard"</a>
                        <a href="#" class="text-gray-400 hover:text-white transition">"Analytics"</a>
                        <a href="#" class="text-gray-400 hover:text-white transition">"History"</a>
                        <a href="#" class="text-gray-400 hover:text-white transition">"Pro Features"</a>
                        <button class="ml-4 px-5 py-2 border border-white/15 hover:bg-white/10 font-medium rounded-full transition">
                            "Account"
                        </button>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-gray-400 hover:text-white hover:bg-white/10"
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-white/10">
                    <div class="px-4 py-4 space-y-3">
                        <a href="#" class="block text-gray-400 hover:text-white">"Dashboard"</a>
                        <a href="#" class="block text-gray-400 hover:text-white">"Analytics"</a>
                        <a href="#" class="block text-gray-400 hover:text-white">"History"</a>
                        <a href="#" class="block text-gray-400 hover:text-white">"Pro Features"</a>
                        <div class="pt-4 border-t border-white/10">
                            <button class="block w-full text-center px-5 py-2 border border-white/15 font-medium rounded-full">
                                "Account"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
