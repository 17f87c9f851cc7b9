//! Home Page
//!
//! Full-width landing page with entry points into the dashboard.

use leptos::*;
use tauron::Tab;

/// Home panel, rendered without the sidebar
#[component]
pub fn Homepage(on_navigate: Callback<String>) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <header class="container mx-auto px-4 h-16 flex items-center space-x-3">
                <i data-lucide="activity" class="w-6 h-6 text-green-400"></i>
                <span class="text-xl font-bold">"Tauron"</span>
            </header>

            <section class="container mx-auto px-4 py-16 text-center">
                <h1 class="text-5xl font-bold mb-4">"Catch disease before it spreads"</h1>
                <p class="text-gray-400 text-lg max-w-2xl mx-auto mb-10">
                    "Daily risk scores for every animal, drawn from sensor data and herd contact patterns."
                </p>

                <div class="grid grid-cols-2 md:grid-cols-5 gap-4 max-w-4xl mx-auto">
                    {Tab::ALL
                        .into_iter()
                        .filter(|tab| tab.is_framed())
                        .map(|tab| view! {
                            <button
                                class="bg-gray-800 hover:bg-gray-700 border border-gray-700 rounded-xl p-6 flex flex-col items-center space-y-3 transition-colors"
                                on:click=move |_| on_navigate.call(tab.as_str().to_string())
                            >
                                <i data-lucide={tab.icon()} class="w-8 h-8 text-green-400"></i>
                                <span class="font-medium">{tab.label()}</span>
                            </button>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
