use chrono::Utc;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Dashboard page header: icon tile, title, mission line, last-updated chip.
#[component]
pub fn PageHeader(
    icon_name: &'static str,
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    let today = Utc::now().format("%d %b %Y").to_string();

    view! {
        <div class="page-header">
            <div class="page-header__lead">
                <div class="page-header__icon">{icon(icon_name)}</div>
                <div>
                    <h1 class="page-header__title">{title}</h1>
                    <p class="page-header__subtitle">{subtitle}</p>
                </div>
            </div>
            <div class="page-header__meta">
                <span class="page-header__meta-label">"Last Updated"</span>
                <span class="page-header__meta-value">{today}</span>
            </div>
        </div>
    }
}
