//! Sustainability Impact Page

use leptos::*;
use tauron::Tab;

use super::PanelHeader;

#[component]
pub fn SustainabilityImpact() -> impl IntoView {
    view! {
        <div>
            <PanelHeader tab=Tab::Impact subtitle="What early detection saves" />

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <ImpactCard icon="pill" label="Antibiotic courses avoided" />
                <ImpactCard icon="droplets" label="Milk not discarded" />
                <ImpactCard icon="cloud" label="Emissions per litre" />
            </div>
        </div>
    }
}

#[component]
fn ImpactCard(icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
            <i data-lucide=icon class="w-6 h-6 text-green-400 mb-3"></i>
            <div class="text-3xl font-bold">"--"</div>
            <div class="text-gray-400 text-sm mt-1">{label}</div>
        </div>
    }
}
