//! Descriptive analytics level panel: "What happened?"

use leptos::prelude::*;

use crate::shared::charts::{ComposedChart, GroupedBarChart, PieChart, Series, Slice};
use crate::shared::icons::icon;

pub struct Capability {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub scope: &'static str,
    pub impact: &'static str,
}

const CAPABILITIES: &[Capability] = &[
    Capability {
        title: "Real-time Dashboards",
        description: "Live performance monitoring with up-to-the-minute data updates",
        icon: "monitor",
        features: &["Live KPI tracking", "Interactive visualizations", "Drill-down capabilities", "Mobile responsive"],
        scope: "All 7 entities implemented",
        impact: "Immediate visibility into operations",
    },
    Capability {
        title: "Historical Reporting",
        description: "Comprehensive historical analysis and trend identification",
        icon: "database",
        features: &["Time-series analysis", "Comparative reporting", "Automated scheduling", "Export capabilities"],
        scope: "Monthly, quarterly, yearly views",
        impact: "Data-driven decision making",
    },
    Capability {
        title: "KPI Monitoring",
        description: "Standardized performance indicators across all transport modes",
        icon: "activity",
        features: &["Target vs actual tracking", "Alert notifications", "Trend analysis", "Benchmark comparisons"],
        scope: "120+ KPIs across entities",
        impact: "Performance accountability",
    },
    Capability {
        title: "Data Visualization",
        description: "Rich visual representations of complex transport data",
        icon: "trending-up",
        features: &["Charts and graphs", "Geographic mapping", "Heat maps", "Custom views"],
        scope: "Multiple chart types per entity",
        impact: "Enhanced data comprehension",
    },
];

const ENTITIES: &[&str] = &["MTLS", "TGA", "GACA", "MAWANI", "SAR", "RGA", "SPL"];

const IMPLEMENTATION_SERIES: &[Series] = &[
    Series {
        name: "KPIs",
        color: "#3b82f6",
        values: &[15.0, 18.0, 16.0, 14.0, 17.0, 19.0, 13.0],
        dashed: false,
    },
    Series {
        name: "Dashboards",
        color: "#8bb5ff",
        values: &[4.0, 5.0, 4.0, 4.0, 5.0, 6.0, 4.0],
        dashed: false,
    },
];

const DATA_SOURCES: &[Slice] = &[
    Slice { label: "Real-time Sensors", value: 45.0, color: "#005430" },
    Slice { label: "Operational Systems", value: 32.0, color: "#8BAA99" },
    Slice { label: "External APIs", value: 18.0, color: "#3e9b87" },
    Slice { label: "Manual Entry", value: 5.0, color: "#58b5a3" },
];

const USAGE_MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

const VIEWS_SERIES: Series = Series {
    name: "Dashboard Views",
    color: "#8bb5ff",
    values: &[12500.0, 14200.0, 15800.0, 17200.0, 18900.0, 20500.0],
    dashed: false,
};

const USERS_SERIES: Series = Series {
    name: "Active Users",
    color: "#3b82f6",
    values: &[245.0, 268.0, 289.0, 312.0, 335.0, 358.0],
    dashed: false,
};

const BENEFITS: &[&str] = &[
    "Immediate visibility into current performance",
    "Historical trend analysis and pattern recognition",
    "Standardized reporting across all entities",
    "Data-driven decision making foundation",
    "Performance accountability and transparency",
    "Regulatory compliance monitoring",
];

#[component]
pub fn DescriptivePanel() -> impl IntoView {
    view! {
        <div class="level-panel">
            <div class="level-panel__hero level-panel__hero--blue">
                <div class="level-panel__hero-heading">
                    {icon("bar-chart")}
                    <h2 class="level-panel__hero-title">"Descriptive Analytics"</h2>
                </div>
                <p class="level-panel__hero-question">"What happened?"</p>
                <p class="level-panel__hero-text">
                    "Foundation-level analytics providing real-time visibility and historical "
                    "insights into transport and logistics performance. This is where "
                    "data-driven decision making begins."
                </p>
                <div class="level-panel__hero-stats">
                    <div class="level-panel__hero-stat"><strong>"120+ KPIs"</strong><span>"Across all entities"</span></div>
                    <div class="level-panel__hero-stat"><strong>"Real-time"</strong><span>"Live data updates"</span></div>
                    <div class="level-panel__hero-stat"><strong>"7 Entities"</strong><span>"Complete coverage"</span></div>
                    <div class="level-panel__hero-stat"><strong>"24/7"</strong><span>"Continuous monitoring"</span></div>
                </div>
            </div>

            <CapabilityGrid capabilities=CAPABILITIES accent="accent--blue" />

            <div class="dashboard__chart-row">
                <div class="chart-card">
                    <h3 class="chart-card__title">"Implementation by Entity"</h3>
                    <GroupedBarChart labels=ENTITIES series=IMPLEMENTATION_SERIES.to_vec() />
                </div>
                <div class="chart-card">
                    <h3 class="chart-card__title">"Data Sources Distribution"</h3>
                    <PieChart slices=DATA_SOURCES unit="" />
                </div>
            </div>

            <div class="chart-card">
                <h3 class="chart-card__title">"Dashboard Usage Analytics"</h3>
                <ComposedChart labels=USAGE_MONTHS bars=VIEWS_SERIES line=USERS_SERIES />
            </div>

            <BenefitList benefits=BENEFITS />

            <div class="level-panel__next">
                <div>
                    <h3 class="level-panel__next-title">"Ready for the Next Level?"</h3>
                    <p class="level-panel__next-text">
                        "Once descriptive analytics is established, advance to diagnostic "
                        "analytics to understand why things happen."
                    </p>
                </div>
                <div class="level-panel__next-link">
                    <span>"Explore Diagnostic Analytics"</span>
                    {icon("arrow-right")}
                </div>
            </div>
        </div>
    }
}

/// Capability card grid shared by all level panels.
#[component]
pub fn CapabilityGrid(capabilities: &'static [Capability], accent: &'static str) -> impl IntoView {
    view! {
        <div>
            <h3 class="level-panel__section-title">"Core Capabilities"</h3>
            <div class="capability-grid">
                {capabilities.iter().map(|cap| view! {
                    <div class="capability-card">
                        <div class=format!("capability-card__icon {}", accent)>{icon(cap.icon)}</div>
                        <div class="capability-card__body">
                            <h4 class="capability-card__title">{cap.title}</h4>
                            <p class="capability-card__description">{cap.description}</p>
                            <div class="capability-card__features">
                                {cap.features.iter().map(|feature| view! {
                                    <div class="capability-card__feature">
                                        {icon("check-circle")}
                                        <span>{*feature}</span>
                                    </div>
                                }).collect_view()}
                            </div>
                            <p class="capability-card__scope">{cap.scope}</p>
                            <p class="capability-card__impact">{cap.impact}</p>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

/// Benefit checklist shared by all level panels.
#[component]
pub fn BenefitList(benefits: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">"Key Benefits"</h3>
            <div class="benefit-list">
                {benefits.iter().map(|benefit| view! {
                    <div class="benefit-list__item">
                        {icon("check-circle")}
                        <span>{*benefit}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
