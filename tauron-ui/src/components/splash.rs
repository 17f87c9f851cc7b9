//! Landing Overlay Component
//!
//! Full-screen gate shown before the dashboard.

use leptos::*;
use tauron::SplashOverlay;

/// Landing overlay with logo, tagline and the single dismiss action
#[component]
pub fn Splash(overlay: SplashOverlay, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex flex-col items-center justify-center bg-gray-900 text-white">
            // Logo
            <div class="flex items-center space-x-3 mb-6">
                <i data-lucide="activity" class="w-12 h-12 text-green-400"></i>
                <span class="text-5xl font-bold tracking-tight">"Tauron"</span>
            </div>

            <p class="text-gray-400 text-lg mb-10 text-center max-w-md">{overlay.tagline}</p>

            <button
                class="px-8 py-3 bg-green-600 hover:bg-green-700 rounded-lg font-semibold tracking-widest transition-colors"
                on:click=move |_| on_dismiss.call(())
            >
                {overlay.action_label}
            </button>
        </div>
    }
}
