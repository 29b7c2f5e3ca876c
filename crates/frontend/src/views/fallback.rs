//! Placeholder view for Selection keys without a dedicated dashboard.

use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// "Under development" placeholder shown for unrecognized view keys.
///
/// Offers a one-click shortcut back to the default view.
#[component]
pub fn UnderDevelopmentView(raw_key: String, on_home: Callback<()>) -> impl IntoView {
    let shown_key = if raw_key.is_empty() {
        "(empty)".to_string()
    } else {
        raw_key
    };

    view! {
        <div class="placeholder-view">
            <div class="placeholder-view__card">
                <div class="placeholder-view__icon">{icon("construction")}</div>
                <h1 class="placeholder-view__title">"Dashboard Under Development"</h1>
                <p class="placeholder-view__text">
                    "There is no dashboard for \"" {shown_key} "\" yet. "
                    "Entity dashboards are rolled out in phases - pick an entity from the "
                    "sidebar, or return to the ecosystem overview."
                </p>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_home.run(())
                >
                    "Back to Overview"
                </Button>
            </div>
        </div>
    }
}
