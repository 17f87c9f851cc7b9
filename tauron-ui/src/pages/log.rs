//! Data Entry Log Page

use leptos::*;
use tauron::Tab;

use super::PanelHeader;

#[component]
pub fn DataEntryLog() -> impl IntoView {
    view! {
        <div>
            <PanelHeader tab=Tab::Log subtitle="Manual observations and treatments" />

            <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-hidden">
                <table class="w-full text-sm">
                    <thead class="bg-gray-700 text-gray-300">
                        <tr>
                            <th class="text-left px-4 py-2">"Date"</th>
                            <th class="text-left px-4 py-2">"Animal"</th>
                            <th class="text-left px-4 py-2">"Observation"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <tr>
                            <td class="px-4 py-6 text-gray-500 text-center" colspan="3">
                                "No entries yet"
                            </td>
                        </tr>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
