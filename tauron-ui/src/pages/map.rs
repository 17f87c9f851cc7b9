//! Herd Map Page

use leptos::*;
use tauron::Tab;

use super::PanelHeader;

const PENS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

#[component]
pub fn HerdMap() -> impl IntoView {
    view! {
        <div>
            <PanelHeader tab=Tab::Map subtitle="Contact network across pens" />

            <div class="grid grid-cols-3 gap-4">
                {PENS
                    .into_iter()
                    .map(|pen| view! {
                        <div class="bg-gray-800 rounded-xl h-40 border border-gray-700 flex items-center justify-center">
                            <span class="text-gray-400">"Pen " {pen}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
