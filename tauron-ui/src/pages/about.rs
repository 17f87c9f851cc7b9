//! About Page
//!
//! Service tiers and project background.

use leptos::*;
use tauron::Tab;

use super::PanelHeader;

#[component]
pub fn TierAbout() -> impl IntoView {
    view! {
        <div>
            <PanelHeader tab=Tab::About subtitle="Plans and background" />

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-8">
                <TierCard name="Starter" detail="Daily risk scores for one herd" />
                <TierCard name="Farm" detail="Alerts, contact map and data entry" />
                <TierCard name="Co-op" detail="Multiple herds with shared reporting" />
            </div>

            <p class="text-gray-400 max-w-2xl">
                "Tauron combines a graph model of herd contacts with per-animal sensor \
                 trends to flag mastitis, respiratory disease and lameness early."
            </p>
        </div>
    }
}

#[component]
fn TierCard(name: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
            <h2 class="text-xl font-semibold mb-2">{name}</h2>
            <p class="text-gray-400 text-sm">{detail}</p>
        </div>
    }
}
