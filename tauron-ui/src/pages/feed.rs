//! Morning Alert Feed Page

use leptos::*;
use tauron::Tab;

use super::PanelHeader;

#[component]
pub fn MorningAlertFeed() -> impl IntoView {
    view! {
        <div>
            <PanelHeader tab=Tab::Feed subtitle="Animals flagged since the last milking" />

            <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                <div class="flex items-center space-x-2 text-gray-400">
                    <i data-lucide="bell-off" class="w-5 h-5"></i>
                    <span>"No alerts this morning."</span>
                </div>
            </div>
        </div>
    }
}
