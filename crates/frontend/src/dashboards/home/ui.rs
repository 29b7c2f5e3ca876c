//! Ecosystem overview page - the application's default view.

use contracts::domain::entity::ENTITY_DIRECTORY;
use leptos::prelude::*;
use thaw::*;

use super::data;
use crate::layout::nav_context::NavContext;
use crate::shared::charts::{LineChart, PieChart};
use crate::shared::components::status_badge::{maturity_badge, score_badge};
use crate::shared::icons::icon;

#[component]
pub fn HomePage() -> impl IntoView {
    let nav = leptos::context::use_context::<NavContext>().expect("NavContext not found");

    view! {
        <div class="home">
            // Hero banner
            <div class="home__hero">
                <div class="home__hero-heading">
                    {icon("globe")}
                    <h1 class="home__hero-title">"Saudi Observatory Dashboard"</h1>
                </div>
                <p class="home__hero-text">
                    "Unified performance view of the transport and logistics ecosystem: "
                    "seven government entities, one analytics maturity journey."
                </p>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| nav.set_selection("mtls")
                >
                    "Open the MTLS Dashboard"
                </Button>
            </div>

            // Ecosystem KPIs
            <div class="home__kpis">
                {data::ECOSYSTEM_KPIS.iter().map(|kpi| view! {
                    <div class="home-kpi">
                        <div class="home-kpi__label">{kpi.label}</div>
                        <div class="home-kpi__value-row">
                            <span class="home-kpi__value">{kpi.value}</span>
                            <span class=format!("home-kpi__trend {}", kpi.accent_class)>{kpi.trend}</span>
                        </div>
                    </div>
                }).collect_view()}
            </div>

            // Maturity coverage + cross-entity trends
            <div class="home__charts">
                <div class="chart-card">
                    <h3 class="chart-card__title">"Analytics Maturity Coverage"</h3>
                    <div class="maturity-coverage">
                        {data::MATURITY_COVERAGE.iter().map(|row| view! {
                            <div class="maturity-coverage__row">
                                <span class="maturity-coverage__level">{row.level}</span>
                                <div class="maturity-coverage__track">
                                    <div
                                        class="maturity-coverage__fill"
                                        style=format!("width:{}%;background:{}", row.coverage, row.color)
                                    ></div>
                                </div>
                                <span class="maturity-coverage__detail">
                                    {format!("{} of 7 entities ({}%)", row.entities, row.coverage)}
                                </span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                <div class="chart-card">
                    <h3 class="chart-card__title">"Six-Month Ecosystem Trends"</h3>
                    <LineChart labels=data::TREND_MONTHS series=data::TREND_SERIES.to_vec() />
                </div>
            </div>

            <div class="chart-card">
                <h3 class="chart-card__title">"Transport Mode Share"</h3>
                <PieChart slices=data::TRANSPORT_MODES />
            </div>

            // Entity directory cards
            <div class="home__entities">
                <h2 class="home__section-title">"Entities"</h2>
                <div class="home__entity-grid">
                    {ENTITY_DIRECTORY.iter().map(|info| {
                        let key = info.code.code();
                        view! {
                            <div class="entity-card" on:click=move |_| nav.set_selection(key)>
                                <div class="entity-card__top">
                                    <div class="entity-card__icon">{icon(info.icon)}</div>
                                    <div>
                                        <h3 class="entity-card__short">{info.short_name}</h3>
                                        <p class="entity-card__name">{info.name}</p>
                                    </div>
                                    <span class="entity-card__score">{info.score}</span>
                                </div>
                                <p class="entity-card__blurb">{info.blurb}</p>
                                <div class="entity-card__kpis">
                                    {info.highlight_kpis.iter().map(|kpi| view! {
                                        <span class="entity-card__kpi">{*kpi}</span>
                                    }).collect_view()}
                                </div>
                                <div class="entity-card__badges">
                                    {score_badge(info.score)}
                                    {maturity_badge(info.maturity)}
                                </div>
                                <div class="entity-card__open">
                                    <span>"Open dashboard"</span>
                                    {icon("arrow-right")}
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
