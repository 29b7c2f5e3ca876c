//! Diagnostic analytics level panel: "Why did it happen?"

use leptos::prelude::*;

use crate::analytics::descriptive::{BenefitList, Capability, CapabilityGrid};
use crate::shared::charts::{ComposedChart, GroupedBarChart, Series};
use crate::shared::icons::icon;

const CAPABILITIES: &[Capability] = &[
    Capability {
        title: "Root Cause Analysis",
        description: "Deep dive investigation into the underlying causes of performance issues",
        icon: "search",
        features: &["5-Why Analysis", "Fishbone Diagrams", "Pareto Analysis", "Impact Assessment"],
        scope: "Delay analysis, incident investigation",
        impact: "Faster problem resolution",
    },
    Capability {
        title: "Correlation Discovery",
        description: "Statistical analysis to identify relationships between different variables",
        icon: "trending-up",
        features: &["Statistical Correlation", "Pattern Recognition", "Trend Analysis", "Anomaly Detection"],
        scope: "Weather, traffic, seasonal effects",
        impact: "Better understanding of dependencies",
    },
    Capability {
        title: "Drill-down Analysis",
        description: "Hierarchical exploration from high-level metrics to detailed insights",
        icon: "zap",
        features: &["Multi-level Navigation", "Dynamic Filtering", "Cross-referencing", "Contextual Views"],
        scope: "Performance and regional breakdowns",
        impact: "Granular problem identification",
    },
    Capability {
        title: "Comparative Analysis",
        description: "Side-by-side comparison of metrics across time, entities, or conditions",
        icon: "alert-triangle",
        features: &["Benchmarking", "Variance Analysis", "Trend Comparison", "Performance Gaps"],
        scope: "Entity and before/after comparisons",
        impact: "Performance improvement insights",
    },
];

const CAUSES: &[&str] = &[
    "Weather",
    "Infrastructure",
    "Human Error",
    "Equipment",
    "Traffic",
    "System Failure",
];

const CAUSE_SERIES: &[Series] = &[
    Series {
        name: "Frequency (per quarter)",
        color: "#eab308",
        values: &[35.0, 28.0, 22.0, 18.0, 15.0, 12.0],
        dashed: false,
    },
    Series {
        name: "Avg Resolution (hrs)",
        color: "#8BAA99",
        values: &[48.0, 72.0, 24.0, 36.0, 12.0, 96.0],
        dashed: false,
    },
];

struct Correlation {
    metric: &'static str,
    correlation: f64,
    strength: &'static str,
}

const CORRELATIONS: &[Correlation] = &[
    Correlation { metric: "Weather vs Delays", correlation: 0.78, strength: "Strong" },
    Correlation { metric: "Traffic vs Travel Time", correlation: 0.85, strength: "Very Strong" },
    Correlation { metric: "Maintenance vs Downtime", correlation: -0.72, strength: "Strong Negative" },
    Correlation { metric: "Fuel Price vs Costs", correlation: 0.65, strength: "Moderate" },
    Correlation { metric: "Season vs Demand", correlation: 0.58, strength: "Moderate" },
];

const ANALYSIS_MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

const DELAYS_SERIES: Series = Series {
    name: "Recorded Delays",
    color: "#eab308",
    values: &[245.0, 198.0, 167.0, 189.0, 156.0, 134.0],
    dashed: false,
};

const INCIDENTS_SERIES: Series = Series {
    name: "Safety Incidents",
    color: "#005430",
    values: &[18.0, 15.0, 12.0, 14.0, 11.0, 9.0],
    dashed: false,
};

const BENEFITS: &[&str] = &[
    "Root cause identification instead of symptom fixing",
    "Pattern recognition across entities and seasons",
    "Faster issue resolution through drill-down context",
    "Correlation analysis for better planning assumptions",
    "Benchmarking against best-performing entities",
    "Evidence base for infrastructure investment",
];

#[component]
pub fn DiagnosticPanel() -> impl IntoView {
    view! {
        <div class="level-panel">
            <div class="level-panel__hero level-panel__hero--yellow">
                <div class="level-panel__hero-heading">
                    {icon("trending-up")}
                    <h2 class="level-panel__hero-title">"Diagnostic Analytics"</h2>
                </div>
                <p class="level-panel__hero-question">"Why did it happen?"</p>
                <p class="level-panel__hero-text">
                    "Root cause analysis and correlation discovery across the transport "
                    "network - turning the question \"performance dropped\" into \"here is "
                    "what drove it, and where\"."
                </p>
            </div>

            <CapabilityGrid capabilities=CAPABILITIES accent="accent--yellow" />

            <div class="dashboard__chart-row">
                <div class="chart-card">
                    <h3 class="chart-card__title">"Delay Root Causes"</h3>
                    <GroupedBarChart labels=CAUSES series=CAUSE_SERIES.to_vec() tilt_labels=true />
                </div>

                <div class="chart-card">
                    <h3 class="chart-card__title">"Cross-Network Incident Trends"</h3>
                    <ComposedChart labels=ANALYSIS_MONTHS bars=DELAYS_SERIES line=INCIDENTS_SERIES />
                </div>
            </div>

            <div class="chart-card">
                <h3 class="chart-card__title">"Correlation Studies"</h3>
                <div class="data-table-wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Relationship"</th>
                                <th>"Correlation"</th>
                                <th>"Strength"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {CORRELATIONS.iter().map(|row| view! {
                                <tr>
                                    <td class="data-table__strong">{row.metric}</td>
                                    <td>{format!("{:+.2}", row.correlation)}</td>
                                    <td>{row.strength}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>

            <BenefitList benefits=BENEFITS />

            <div class="level-panel__next">
                <div>
                    <h3 class="level-panel__next-title">"Ready for the Next Level?"</h3>
                    <p class="level-panel__next-text">
                        "With causes understood, predictive analytics anticipates what "
                        "happens next."
                    </p>
                </div>
                <div class="level-panel__next-link">
                    <span>"Explore Predictive Analytics"</span>
                    {icon("arrow-right")}
                </div>
            </div>
        </div>
    }
}
