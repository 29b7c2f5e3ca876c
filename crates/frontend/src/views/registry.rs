//! View registry - the single source of truth for mapping the Selection key
//! to a renderable view.
//!
//! `render_view` is total: every input string renders exactly one view.
//! Unrecognized keys (including the empty string) fall through to the
//! placeholder, whose shortcut resets the Selection to the default key.

use contracts::enums::view_key::{EntityCode, ViewKey, DEFAULT_VIEW_KEY};
use leptos::logging::log;
use leptos::prelude::*;

use crate::analytics::AnalyticsMaturityView;
use crate::dashboards::{
    GacaDashboard, HomePage, MawaniDashboard, MtlsDashboard, RgaDashboard, SarDashboard,
    SplDashboard, TgaDashboard,
};
use crate::layout::nav_context::NavContext;
use crate::views::fallback::UnderDevelopmentView;

/// Renders the view for a raw Selection key.
///
/// # Arguments
/// * `key` - the raw Selection key exactly as written to the store
/// * `nav` - navigation store (used by views that navigate: home cards,
///   placeholder shortcut)
pub fn render_view(key: &str, nav: NavContext) -> AnyView {
    match ViewKey::resolve(key) {
        // ═══════════════════════════════════════════════════════════════════
        // Ecosystem overview
        // ═══════════════════════════════════════════════════════════════════
        ViewKey::Home => view! { <HomePage /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Entity dashboards
        // ═══════════════════════════════════════════════════════════════════
        ViewKey::Entity(EntityCode::Mtls) => view! { <MtlsDashboard /> }.into_any(),
        ViewKey::Entity(EntityCode::Tga) => view! { <TgaDashboard /> }.into_any(),
        ViewKey::Entity(EntityCode::Gaca) => view! { <GacaDashboard /> }.into_any(),
        ViewKey::Entity(EntityCode::Mawani) => view! { <MawaniDashboard /> }.into_any(),
        ViewKey::Entity(EntityCode::Sar) => view! { <SarDashboard /> }.into_any(),
        ViewKey::Entity(EntityCode::Rga) => view! { <RgaDashboard /> }.into_any(),
        ViewKey::Entity(EntityCode::Spl) => view! { <SplDashboard /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Analytics maturity categories
        // ═══════════════════════════════════════════════════════════════════
        ViewKey::Maturity(level) => {
            view! { <AnalyticsMaturityView initial_level=level /> }.into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // Unknown / fallback
        // ═══════════════════════════════════════════════════════════════════
        ViewKey::Unknown => {
            log!("⚠️ Unknown view key: '{}'", key);
            view! {
                <UnderDevelopmentView
                    raw_key=key.to_string()
                    on_home=Callback::new(move |_| nav.set_selection(DEFAULT_VIEW_KEY))
                />
            }
            .into_any()
        }
    }
}
