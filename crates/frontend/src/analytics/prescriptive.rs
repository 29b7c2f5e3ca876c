//! Prescriptive & AI level panel: "What should we do?"

use leptos::prelude::*;

use crate::analytics::descriptive::{BenefitList, Capability, CapabilityGrid};
use crate::shared::charts::{GroupedBarChart, Series};
use crate::shared::icons::icon;

const CAPABILITIES: &[Capability] = &[
    Capability {
        title: "Optimization Engines",
        description: "Mathematical optimization for routing, scheduling, and resource allocation",
        icon: "zap",
        features: &["Linear Programming", "Constraint Solving", "Multi-objective Optimization", "Real-time Re-planning"],
        scope: "Routing, berths, signals, budgets",
        impact: "Best decision under constraints",
    },
    Capability {
        title: "AI Recommendations",
        description: "Ranked, explainable actions with confidence and expected savings",
        icon: "brain",
        features: &["Action Ranking", "Confidence Scoring", "Savings Estimation", "Explainability"],
        scope: "One recommendation stream per entity",
        impact: "Decisions with quantified upside",
    },
    Capability {
        title: "Automated Decisions",
        description: "Closed-loop control for well-bounded operational choices",
        icon: "bot",
        features: &["Policy Guardrails", "Human Override", "Audit Trail", "Gradual Rollout"],
        scope: "Signal timing, sorting, dispatch",
        impact: "Seconds-level reaction time",
    },
    Capability {
        title: "Digital Twin Simulation",
        description: "Policy and investment impact tested on a virtual network first",
        icon: "monitor",
        features: &["Network Modeling", "Policy Simulation", "Impact Analysis", "Sensitivity Studies"],
        scope: "National network twin",
        impact: "Risk-free experimentation",
    },
];

const OPTIMIZATION_METRICS: &[&str] = &[
    "Route Efficiency",
    "Resource Utilization",
    "Cost Index",
    "Service Quality",
    "Energy Efficiency",
];

const OPTIMIZATION_SERIES: &[Series] = &[
    Series {
        name: "Before Optimization",
        color: "#9ca3af",
        values: &[72.0, 68.0, 100.0, 81.0, 65.0],
        dashed: false,
    },
    Series {
        name: "After Optimization",
        color: "#005430",
        values: &[89.0, 85.0, 78.0, 93.0, 84.0],
        dashed: false,
    },
];

struct Recommendation {
    entity: &'static str,
    recommendation: &'static str,
    impact: &'static str,
    confidence: f64,
    savings: &'static str,
    timeframe: &'static str,
}

const RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        entity: "MTLS",
        recommendation: "Implement cross-modal coordination system",
        impact: "High",
        confidence: 0.92,
        savings: "15-20%",
        timeframe: "3-6 months",
    },
    Recommendation {
        entity: "TGA",
        recommendation: "Deploy dynamic route optimization",
        impact: "High",
        confidence: 0.88,
        savings: "12-18%",
        timeframe: "2-4 months",
    },
    Recommendation {
        entity: "GACA",
        recommendation: "AI-powered air traffic management",
        impact: "Very High",
        confidence: 0.85,
        savings: "20-25%",
        timeframe: "6-12 months",
    },
    Recommendation {
        entity: "MAWANI",
        recommendation: "Smart berth allocation system",
        impact: "High",
        confidence: 0.90,
        savings: "18-22%",
        timeframe: "4-8 months",
    },
    Recommendation {
        entity: "SAR",
        recommendation: "Predictive maintenance scheduling",
        impact: "Medium",
        confidence: 0.87,
        savings: "10-15%",
        timeframe: "2-3 months",
    },
    Recommendation {
        entity: "RGA",
        recommendation: "Intelligent traffic signal optimization",
        impact: "High",
        confidence: 0.89,
        savings: "14-19%",
        timeframe: "3-5 months",
    },
    Recommendation {
        entity: "SPL",
        recommendation: "Dynamic last-mile routing",
        impact: "High",
        confidence: 0.86,
        savings: "12-16%",
        timeframe: "2-4 months",
    },
];

const BENEFITS: &[&str] = &[
    "Recommended actions instead of raw findings",
    "Continuous optimization of routes and schedules",
    "Quantified savings before committing budget",
    "Automated response to routine disruptions",
    "Policy changes rehearsed on the digital twin",
    "AI efficiency with human oversight",
];

#[component]
pub fn PrescriptivePanel() -> impl IntoView {
    view! {
        <div class="level-panel">
            <div class="level-panel__hero level-panel__hero--green">
                <div class="level-panel__hero-heading">
                    {icon("brain")}
                    <h2 class="level-panel__hero-title">"Prescriptive & AI"</h2>
                </div>
                <p class="level-panel__hero-question">"What should we do?"</p>
                <p class="level-panel__hero-text">
                    "The top of the maturity ladder: AI-powered optimization and automated "
                    "decision-making, from berth assignments to national investment plans."
                </p>
            </div>

            <CapabilityGrid capabilities=CAPABILITIES accent="accent--green" />

            <div class="chart-card">
                <h3 class="chart-card__title">"Optimization Results (Index, Before vs After)"</h3>
                <GroupedBarChart
                    labels=OPTIMIZATION_METRICS
                    series=OPTIMIZATION_SERIES.to_vec()
                    tilt_labels=true
                />
            </div>

            <div class="chart-card">
                <h3 class="chart-card__title">"AI Recommendations by Entity"</h3>
                <div class="data-table-wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Entity"</th>
                                <th>"Recommendation"</th>
                                <th>"Impact"</th>
                                <th>"Confidence"</th>
                                <th>"Est. Savings"</th>
                                <th>"Timeframe"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {RECOMMENDATIONS.iter().map(|row| view! {
                                <tr>
                                    <td class="data-table__strong">{row.entity}</td>
                                    <td>{row.recommendation}</td>
                                    <td>{row.impact}</td>
                                    <td>{format!("{:.0}%", row.confidence * 100.0)}</td>
                                    <td>{row.savings}</td>
                                    <td>{row.timeframe}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>

            <BenefitList benefits=BENEFITS />
        </div>
    }
}
