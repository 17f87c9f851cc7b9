//! App Root Component
//!
//! Entry point and the top-level shell component that picks what to mount.

use leptos::*;
use tauron::config::parse_flag;
use tauron::{Panel, ShellView, SplashConfig};

use crate::components::{Layout, Splash};
use crate::pages::{
    DataEntryLog, HerdMap, Homepage, MorningAlertFeed, SustainabilityImpact, TierAbout,
};
use crate::state::provide_shell_state;

/// Attach the dashboard to `root`. Called once at startup.
///
/// `data-splash="off"` on the root element starts the session without the
/// landing overlay.
pub fn start(root: web_sys::HtmlElement) {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = splash_config(root.get_attribute("data-splash").as_deref());
    tracing::info!(splash = config.enabled, "mounting dashboard");

    mount_to(root, move || view! { <App config=config /> });
}

/// Splash settings derived from the root element's `data-splash` attribute
pub fn splash_config(attr: Option<&str>) -> SplashConfig {
    let mut config = SplashConfig::default();
    if let Some(enabled) = attr.and_then(parse_flag) {
        config.enabled = enabled;
    }
    config
}

/// Root shell component
#[component]
pub fn App(config: SplashConfig) -> impl IntoView {
    let state = provide_shell_state(&config);

    let on_navigate = Callback::new(move |tab: String| state.select_tab(tab));
    let on_dismiss = Callback::new(move |_: ()| state.dismiss());

    // Icon placeholders change with every view; rescan after each commit
    create_effect(move |_| {
        state.view.track();
        request_animation_frame(move || state.after_render());
    });

    move || match state.view.get() {
        ShellView::Splash(overlay) => view! {
            <Splash overlay=overlay on_dismiss=on_dismiss />
        }
        .into_view(),
        ShellView::FullWidth { panel } => view! {
            <PanelView panel=panel on_navigate=on_navigate />
        }
        .into_view(),
        ShellView::Framed { current_tab, panel } => view! {
            <Layout current_tab=current_tab on_navigate=on_navigate>
                <PanelView panel=panel on_navigate=on_navigate />
            </Layout>
        }
        .into_view(),
    }
}

/// Mounts the collaborator for a panel
#[component]
fn PanelView(panel: Panel, on_navigate: Callback<String>) -> impl IntoView {
    match panel {
        Panel::Homepage => view! { <Homepage on_navigate=on_navigate /> }.into_view(),
        Panel::MorningAlertFeed => view! { <MorningAlertFeed /> }.into_view(),
        Panel::HerdMap => view! { <HerdMap /> }.into_view(),
        Panel::DataEntryLog => view! { <DataEntryLog /> }.into_view(),
        Panel::SustainabilityImpact => view! { <SustainabilityImpact /> }.into_view(),
        Panel::TierAbout => view! { <TierAbout /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_config_defaults_on() {
        assert!(splash_config(None).enabled);
        assert!(splash_config(Some("garbage")).enabled);
    }

    #[test]
    fn test_splash_config_attribute_off() {
        assert!(!splash_config(Some("off")).enabled);
        assert!(!splash_config(Some("false")).enabled);
        assert!(splash_config(Some("on")).enabled);
    }
}
