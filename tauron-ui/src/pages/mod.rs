//! Pages
//!
//! One presentational panel per navigation tab.

pub mod about;
pub mod feed;
pub mod home;
pub mod impact;
pub mod log;
pub mod map;

pub use about::TierAbout;
pub use feed::MorningAlertFeed;
pub use home::Homepage;
pub use impact::SustainabilityImpact;
pub use log::DataEntryLog;
pub use map::HerdMap;

use leptos::*;
use tauron::Tab;

/// Page header shared by the framed panels
#[component]
fn PanelHeader(tab: Tab, #[prop(into)] subtitle: String) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3 mb-8">
            <i data-lucide={tab.icon()} class="w-8 h-8 text-green-400"></i>
            <div>
                <h1 class="text-3xl font-bold">{tab.label()}</h1>
                <p class="text-gray-400 mt-1">{subtitle}</p>
            </div>
        </div>
    }
}
