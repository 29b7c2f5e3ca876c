use contracts::shared::indicators::KpiCard;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Grid of KPI cards at the top of a dashboard overview tab.
#[component]
pub fn KpiCardGrid(cards: &'static [KpiCard]) -> impl IntoView {
    view! {
        <div class="kpi-grid">
            {cards.iter().map(|card| view! { <KpiCardView card=card /> }).collect_view()}
        </div>
    }
}

/// One KPI card: value, change vs previous period, target, blurb.
#[component]
pub fn KpiCardView(card: &'static KpiCard) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <div class="kpi-card__top">
                <h3 class="kpi-card__title">{card.title}</h3>
                <div class="kpi-card__trend">{icon(card.trend.icon())}</div>
            </div>
            <div class="kpi-card__body">
                <div class="kpi-card__value-row">
                    <span class="kpi-card__value">{card.value}</span>
                    <span class=format!("kpi-card__change {}", card.trend.css_class())>
                        {card.change}
                    </span>
                </div>
                <div class="kpi-card__target">
                    "Target: " <span class="kpi-card__target-value">{card.target}</span>
                </div>
                <p class="kpi-card__description">{card.description}</p>
            </div>
        </div>
    }
}
