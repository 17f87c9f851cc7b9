//! Layout Component
//!
//! Sidebar chrome around every panel except home.

use leptos::*;
use tauron::Tab;

/// Sidebar layout wrapping a single panel
#[component]
pub fn Layout(
    /// Tab to highlight in the sidebar
    current_tab: Tab,
    /// Requests a tab change by identifier
    on_navigate: Callback<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white flex">
            <aside class="w-60 bg-gray-800 border-r border-gray-700 flex flex-col">
                // Logo and brand
                <button
                    class="flex items-center space-x-3 h-16 px-4"
                    on:click=move |_| on_navigate.call(Tab::Home.as_str().to_string())
                >
                    <i data-lucide="activity" class="w-6 h-6 text-green-400"></i>
                    <span class="text-xl font-bold">"Tauron"</span>
                </button>

                <nav class="flex-1 px-2 space-y-1">
                    {Tab::ALL
                        .into_iter()
                        .map(|tab| view! {
                            <NavItem tab=tab active={tab == current_tab} on_navigate=on_navigate />
                        })
                        .collect_view()}
                </nav>
            </aside>

            <main class="flex-1 px-8 py-8 overflow-y-auto">
                {children()}
            </main>
        </div>
    }
}

/// Individual sidebar entry
#[component]
fn NavItem(tab: Tab, active: bool, on_navigate: Callback<String>) -> impl IntoView {
    let class = if active {
        "w-full flex items-center space-x-3 px-3 py-2 rounded-lg bg-gray-700 text-white"
    } else {
        "w-full flex items-center space-x-3 px-3 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
    };

    view! {
        <button class=class on:click=move |_| on_navigate.call(tab.as_str().to_string())>
            <i data-lucide={tab.icon()} class="w-4 h-4"></i>
            <span>{tab.label()}</span>
        </button>
    }
}
