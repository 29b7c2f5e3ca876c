//! Analytics maturity framework view.
//!
//! All four maturity category keys resolve here; the key picks the initial
//! level tab. The tab key itself is view-local state - switching levels
//! never touches the application Selection.

use contracts::enums::maturity_level::MaturityLevel;
use leptos::prelude::*;

use crate::analytics::descriptive::DescriptivePanel;
use crate::analytics::diagnostic::DiagnosticPanel;
use crate::analytics::predictive::PredictivePanel;
use crate::analytics::prescriptive::PrescriptivePanel;
use crate::shared::components::{resolve_tab, PageHeader, TabSpec, TabStrip};
use crate::shared::icons::icon;

const TABS: &[TabSpec] = &[
    TabSpec { key: "overview", label: "Overview", icon: "globe" },
    TabSpec { key: "descriptive", label: "Descriptive", icon: "bar-chart" },
    TabSpec { key: "diagnostic", label: "Diagnostic", icon: "trending-up" },
    TabSpec { key: "predictive", label: "Predictive", icon: "target" },
    TabSpec { key: "prescriptive", label: "Prescriptive & AI", icon: "brain" },
];

/// Representative techniques per level, shown on the overview cards.
const LEVEL_EXAMPLES: &[(MaturityLevel, &[&str])] = &[
    (
        MaturityLevel::Descriptive,
        &["Performance Dashboards", "KPI Monitoring", "Historical Reports", "Data Visualization"],
    ),
    (
        MaturityLevel::Diagnostic,
        &["Root Cause Analysis", "Correlation Studies", "Drill-down Analysis", "Comparative Analysis"],
    ),
    (
        MaturityLevel::Predictive,
        &["Demand Forecasting", "Risk Assessment", "Trend Prediction", "Scenario Planning"],
    ),
    (
        MaturityLevel::Prescriptive,
        &["Route Optimization", "Resource Allocation", "Automated Decisions", "AI Recommendations"],
    ),
];

const LEVEL_IMPACTS: &[(&str, &str)] = &[
    ("Descriptive", "Foundation for data-driven decisions"),
    ("Diagnostic", "Faster issue resolution and improvement"),
    ("Predictive", "Strategic advantage and preparedness"),
    ("Prescriptive", "Maximum operational excellence"),
];

#[component]
pub fn AnalyticsMaturityView(initial_level: MaturityLevel) -> impl IntoView {
    let active_tab = RwSignal::new(initial_level.code().to_string());

    view! {
        <div class="dashboard">
            <PageHeader
                icon_name="brain"
                title="Analytics Maturity Framework"
                subtitle="From understanding the past to optimizing the future"
            />

            <div class="dashboard__panel">
                <TabStrip tabs=TABS active=active_tab />
                <div class="dashboard__tab-body">
                    {move || match resolve_tab(TABS, &active_tab.get()) {
                        "descriptive" => view! { <DescriptivePanel /> }.into_any(),
                        "diagnostic" => view! { <DiagnosticPanel /> }.into_any(),
                        "predictive" => view! { <PredictivePanel /> }.into_any(),
                        "prescriptive" => view! { <PrescriptivePanel /> }.into_any(),
                        _ => framework_overview().into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

fn framework_overview() -> impl IntoView {
    view! {
        <div class="maturity-overview">
            <div class="maturity-overview__hero">
                <h2 class="maturity-overview__hero-title">"Analytics Maturity Framework"</h2>
                <p class="maturity-overview__hero-text">
                    "A comprehensive approach to building analytics capabilities across the "
                    "Saudi transport and logistics ecosystem, progressing from basic reporting "
                    "to AI-powered optimization."
                </p>
                <div class="maturity-overview__hero-chips">
                    {MaturityLevel::all().into_iter().map(|level| view! {
                        <div class="maturity-overview__hero-chip">
                            {icon(level.icon())}
                            <span class="maturity-overview__hero-chip-title">{level.title()}</span>
                            <span class="maturity-overview__hero-chip-sub">{level.subtitle()}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>

            <div class="maturity-overview__grid">
                {LEVEL_EXAMPLES.iter().map(|(level, examples)| view! {
                    <div class="maturity-level-card">
                        <div class="maturity-level-card__top">
                            <div class=format!("maturity-level-card__icon {}", level.accent_class())>
                                {icon(level.icon())}
                            </div>
                            <div>
                                <h3 class="maturity-level-card__title">{level.title()}</h3>
                                <p class="maturity-level-card__subtitle">{level.subtitle()}</p>
                            </div>
                            <span class="badge badge--neutral">{level.stage()}</span>
                        </div>
                        <p class="maturity-level-card__blurb">{level.blurb()}</p>
                        <div class="maturity-level-card__examples">
                            {examples.iter().map(|example| view! {
                                <span class="maturity-level-card__example">{*example}</span>
                            }).collect_view()}
                        </div>
                    </div>
                }).collect_view()}
            </div>

            <div class="chart-card">
                <h3 class="chart-card__title">"What Each Level Unlocks"</h3>
                <div class="maturity-impacts">
                    {LEVEL_IMPACTS.iter().map(|(level, impact)| view! {
                        <div class="maturity-impacts__row">
                            {icon("check-circle")}
                            <span class="maturity-impacts__level">{*level}</span>
                            <span class="maturity-impacts__impact">{*impact}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
