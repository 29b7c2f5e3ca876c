//! Predictive analytics level panel: "What will happen?"

use contracts::shared::indicators::Severity;
use leptos::prelude::*;

use crate::analytics::descriptive::{BenefitList, Capability, CapabilityGrid};
use crate::shared::charts::{LineChart, Series};
use crate::shared::components::status_badge::severity_badge;
use crate::shared::icons::icon;

const CAPABILITIES: &[Capability] = &[
    Capability {
        title: "Demand Forecasting",
        description: "Predict future demand patterns using historical data and external factors",
        icon: "trending-up",
        features: &["Time Series Analysis", "Machine Learning", "Seasonal Decomposition", "External Factors"],
        scope: "Accuracy 85-92%, horizon 1-12 months",
        impact: "Capacity planning ahead of demand",
    },
    Capability {
        title: "Risk Assessment",
        description: "Identify and quantify potential risks across transport operations",
        icon: "alert-triangle",
        features: &["Risk Modeling", "Monte Carlo Simulation", "Probability Analysis", "Impact Assessment"],
        scope: "Accuracy 78-85%, horizon 1-6 months",
        impact: "Proactive risk mitigation",
    },
    Capability {
        title: "Predictive Maintenance",
        description: "Anticipate equipment failures and optimize maintenance schedules",
        icon: "wrench",
        features: &["Condition Monitoring", "Failure Analysis", "IoT Sensors", "Machine Learning"],
        scope: "Accuracy 80-95%, horizon 1-12 months",
        impact: "Downtime and cost reduction",
    },
    Capability {
        title: "Scenario Planning",
        description: "Model different future scenarios and their potential impacts",
        icon: "target",
        features: &["Scenario Modeling", "Sensitivity Analysis", "What-if Analysis", "Simulation"],
        scope: "Accuracy 70-85%, horizon 6-24 months",
        impact: "Strategy tested before commitment",
    },
];

const FORECAST_MONTHS: &[&str] = &["Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Actual volumes stop at September; the model line continues to year end.
const FORECAST_SERIES: &[Series] = &[
    Series {
        name: "Predicted (K passengers)",
        color: "#ea580c",
        values: &[2890.0, 3180.0, 2940.0, 3250.0, 3420.0, 3680.0],
        dashed: true,
    },
    Series {
        name: "Actual (K passengers)",
        color: "#005430",
        values: &[2850.0, 3120.0, 2980.0],
        dashed: false,
    },
];

struct EntityRisk {
    entity: &'static str,
    risk_score: f64,
    category: Severity,
    factors: &'static [&'static str],
}

const ENTITY_RISKS: &[EntityRisk] = &[
    EntityRisk { entity: "MTLS", risk_score: 0.25, category: Severity::Low, factors: &["Weather", "Policy Changes"] },
    EntityRisk { entity: "TGA", risk_score: 0.45, category: Severity::Medium, factors: &["Traffic", "Infrastructure"] },
    EntityRisk { entity: "GACA", risk_score: 0.35, category: Severity::Medium, factors: &["Weather", "Capacity"] },
    EntityRisk { entity: "MAWANI", risk_score: 0.65, category: Severity::High, factors: &["Global Trade", "Equipment"] },
    EntityRisk { entity: "SAR", risk_score: 0.30, category: Severity::Low, factors: &["Maintenance", "Demand"] },
    EntityRisk { entity: "RGA", risk_score: 0.55, category: Severity::High, factors: &["Traffic Growth", "Maintenance"] },
    EntityRisk { entity: "SPL", risk_score: 0.40, category: Severity::Medium, factors: &["E-commerce", "Capacity"] },
];

struct MaintenancePrediction {
    asset: &'static str,
    probability: f64,
    timeframe: &'static str,
    cost_msar: f64,
}

const MAINTENANCE_PREDICTIONS: &[MaintenancePrediction] = &[
    MaintenancePrediction { asset: "Airport Terminal A", probability: 0.85, timeframe: "2 months", cost_msar: 2.5 },
    MaintenancePrediction { asset: "Port Crane #12", probability: 0.72, timeframe: "3 months", cost_msar: 1.8 },
    MaintenancePrediction { asset: "Railway Bridge KM45", probability: 0.68, timeframe: "4 months", cost_msar: 4.2 },
    MaintenancePrediction { asset: "Highway Section A1", probability: 0.91, timeframe: "1 month", cost_msar: 3.1 },
    MaintenancePrediction { asset: "Sorting Facility B", probability: 0.56, timeframe: "6 months", cost_msar: 1.2 },
];

const BENEFITS: &[&str] = &[
    "Demand anticipated before it materializes",
    "Maintenance scheduled before failures occur",
    "Risk exposure quantified per entity",
    "Investment decisions stress-tested by scenario",
    "Resource allocation aligned to forecast load",
    "Fewer surprises in seasonal peaks",
];

#[component]
pub fn PredictivePanel() -> impl IntoView {
    view! {
        <div class="level-panel">
            <div class="level-panel__hero level-panel__hero--orange">
                <div class="level-panel__hero-heading">
                    {icon("target")}
                    <h2 class="level-panel__hero-title">"Predictive Analytics"</h2>
                </div>
                <p class="level-panel__hero-question">"What will happen?"</p>
                <p class="level-panel__hero-text">
                    "Forecasting and risk assessment with machine learning - passenger "
                    "demand, asset failures, and congestion seen months before they arrive."
                </p>
            </div>

            <CapabilityGrid capabilities=CAPABILITIES accent="accent--orange" />

            <div class="chart-card">
                <h3 class="chart-card__title">"Passenger Demand Forecast vs Actuals"</h3>
                <LineChart labels=FORECAST_MONTHS series=FORECAST_SERIES.to_vec() />
            </div>

            <div class="dashboard__chart-row">
                <div class="chart-card">
                    <h3 class="chart-card__title">"Entity Risk Assessment"</h3>
                    <div class="data-table-wrap">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Entity"</th>
                                    <th>"Risk Score"</th>
                                    <th>"Category"</th>
                                    <th>"Key Factors"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {ENTITY_RISKS.iter().map(|row| view! {
                                    <tr>
                                        <td class="data-table__strong">{row.entity}</td>
                                        <td>{format!("{:.2}", row.risk_score)}</td>
                                        <td>{severity_badge(row.category)}</td>
                                        <td>
                                            <div class="data-table__chips">
                                                {row.factors.iter().map(|factor| view! {
                                                    <span class="data-table__chip">{*factor}</span>
                                                }).collect_view()}
                                            </div>
                                        </td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>

                <div class="chart-card">
                    <h3 class="chart-card__title">"Failure Probability Watchlist"</h3>
                    <div class="data-table-wrap">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Asset"</th>
                                    <th>"Probability"</th>
                                    <th>"Timeframe"</th>
                                    <th>"Est. Cost (M SAR)"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {MAINTENANCE_PREDICTIONS.iter().map(|row| view! {
                                    <tr>
                                        <td class="data-table__strong">{row.asset}</td>
                                        <td>{format!("{:.0}%", row.probability * 100.0)}</td>
                                        <td>{row.timeframe}</td>
                                        <td>{format!("{:.1}", row.cost_msar)}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>

            <BenefitList benefits=BENEFITS />

            <div class="level-panel__next">
                <div>
                    <h3 class="level-panel__next-title">"Ready for the Next Level?"</h3>
                    <p class="level-panel__next-text">
                        "Prediction tells you what is coming; prescriptive analytics decides "
                        "what to do about it."
                    </p>
                </div>
                <div class="level-panel__next-link">
                    <span>"Explore Prescriptive & AI"</span>
                    {icon("arrow-right")}
                </div>
            </div>
        </div>
    }
}
