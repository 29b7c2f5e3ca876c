//! Sidebar component with the entity and analytics-maturity navigation.
//!
//! Every item writes the Selection through `NavContext::select_from_nav`,
//! which also dismisses the overlay panel on narrow viewports.

use contracts::domain::entity::ENTITY_DIRECTORY;
use contracts::enums::maturity_level::MaturityLevel;
use contracts::enums::view_key::DEFAULT_VIEW_KEY;
use leptos::prelude::*;

use crate::layout::nav_context::NavContext;
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = leptos::context::use_context::<NavContext>().expect("NavContext not found");

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__header">
                <h2 class="app-sidebar__heading">"Navigation"</h2>
                <button
                    class="app-sidebar__close-btn"
                    on:click=move |_| nav.close_sidebar()
                    title="Close navigation"
                >
                    {icon("x")}
                </button>
            </div>

            // Ecosystem overview
            <div class="app-sidebar__section">
                <div
                    class="app-sidebar__item"
                    class:app-sidebar__item--active=move || nav.selection.get() == DEFAULT_VIEW_KEY
                    on:click=move |_| nav.select_from_nav(DEFAULT_VIEW_KEY)
                >
                    <div class="app-sidebar__item-content">
                        {icon("globe")}
                        <span>"Ecosystem Overview"</span>
                    </div>
                </div>
            </div>

            // Entities
            <div class="app-sidebar__section">
                <h3 class="app-sidebar__section-title">"Entities"</h3>
                {ENTITY_DIRECTORY.iter().map(|info| {
                    let key = info.code.code();
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || nav.selection.get() == key
                            on:click=move |_| nav.select_from_nav(key)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(info.icon)}
                                <span class="app-sidebar__item-label">{info.name}</span>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            // Analytics maturity categories
            <div class="app-sidebar__section app-sidebar__section--bordered">
                <h3 class="app-sidebar__section-title">"Analytics Maturity"</h3>
                {MaturityLevel::all().into_iter().map(|level| {
                    let key = level.code();
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || nav.selection.get() == key
                            on:click=move |_| nav.select_from_nav(key)
                        >
                            <div class=format!("app-sidebar__item-icon {}", level.accent_class())>
                                {icon(level.icon())}
                            </div>
                            <div class="app-sidebar__item-text">
                                <span class="app-sidebar__item-label">{level.title()}</span>
                                <span class="app-sidebar__item-hint">{level.subtitle()}</span>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
