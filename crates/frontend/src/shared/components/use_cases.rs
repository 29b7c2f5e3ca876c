//! Analytics-tab content: use cases grouped by maturity level.

use contracts::shared::indicators::{UseCase, UseCaseGroup};
use leptos::prelude::*;

use crate::shared::components::status_badge::status_badge;
use crate::shared::icons::icon;

#[component]
pub fn UseCaseSections(groups: &'static [UseCaseGroup]) -> impl IntoView {
    view! {
        <div class="use-case-sections">
            {groups.iter().map(|group| {
                let level = group.level;
                view! {
                    <section class="use-case-section">
                        <div class="use-case-section__header">
                            <div class=format!("use-case-section__icon {}", level.accent_class())>
                                {icon(level.icon())}
                            </div>
                            <div>
                                <h2 class="use-case-section__title">{level.title()}</h2>
                                <p class="use-case-section__subtitle">{level.subtitle()}</p>
                            </div>
                        </div>
                        <div class="use-case-section__grid">
                            {group.cases.iter().map(|case| view! {
                                <UseCaseCard case=case />
                            }).collect_view()}
                        </div>
                    </section>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn UseCaseCard(case: &'static UseCase) -> impl IntoView {
    view! {
        <div class="use-case-card">
            <div class="use-case-card__top">
                <h3 class="use-case-card__title">{case.title}</h3>
                {status_badge(case.status)}
            </div>
            <p class="use-case-card__description">{case.description}</p>
            <div>
                <h4 class="use-case-card__metrics-label">"Key Metrics:"</h4>
                <div class="use-case-card__metrics">
                    {case.metrics.iter().map(|metric| view! {
                        <span class="use-case-card__metric">{*metric}</span>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
