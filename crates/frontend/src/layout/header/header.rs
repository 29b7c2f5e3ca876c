//! Header component - application top bar.
//!
//! Contains:
//! - Menu button opening the sidebar overlay (narrow viewports)
//! - Brand block: logo, application title, active view subtitle
//! - Last-updated chip and notification/account actions

use crate::layout::nav_context::NavContext;
use crate::shared::icons::icon;
use crate::shared::logo::ObservatoryLogo;
use crate::views::view_labels::view_label_for_key;
use chrono::Utc;
use leptos::prelude::*;

/// Header component - main application top bar.
///
/// The subtitle follows the current selection; unknown keys show a neutral
/// prompt instead of an empty line.
#[component]
pub fn Header() -> impl IntoView {
    let nav = leptos::context::use_context::<NavContext>().expect("NavContext not found");

    let subtitle = move || {
        let label = view_label_for_key(&nav.selection.get());
        if label.is_empty() {
            "Select an entity".to_string()
        } else {
            label.to_string()
        }
    };

    let last_updated = Utc::now().format("%d %b %Y").to_string();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn top-header__menu-btn"
                    on:click=move |_| nav.open_sidebar()
                    title="Open navigation"
                >
                    {icon("menu")}
                </button>

                <ObservatoryLogo size=48 />

                <div class="top-header__titles">
                    <span class="top-header__title">"Saudi Observatory Dashboard"</span>
                    <span class="top-header__subtitle">{subtitle}</span>
                </div>
            </div>

            <div class="top-header__actions">
                <div class="top-header__updated">
                    <span class="top-header__updated-label">"Last Updated"</span>
                    <span class="top-header__updated-value">{last_updated}</span>
                </div>

                <button class="top-header__icon-btn" title="Notifications">
                    {icon("bell")}
                </button>

                <button class="top-header__icon-btn" title="Account">
                    {icon("user")}
                </button>
            </div>
        </header>
    }
}
