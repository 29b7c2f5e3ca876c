//! Literal datasets for the ministry-level dashboard.

use contracts::enums::maturity_level::MaturityLevel;
use contracts::shared::indicators::{KpiCard, Trend, UseCase, UseCaseGroup, UseCaseStatus};

use crate::shared::charts::{Series, Slice};

pub const KPI_CARDS: &[KpiCard] = &[
    KpiCard {
        title: "Logistics Performance Index",
        value: "3.7",
        change: "+0.3",
        trend: Trend::Up,
        target: "3.5",
        description: "Current LPI score vs national target",
    },
    KpiCard {
        title: "Logistics Cost (% of GDP)",
        value: "12.5%",
        change: "-1.2%",
        trend: Trend::Down,
        target: "10%",
        description: "Cost reduction towards Vision 2030",
    },
    KpiCard {
        title: "Total Freight (Million Tons)",
        value: "480M",
        change: "+6.7%",
        trend: Trend::Up,
        target: "500M",
        description: "Annual freight movement",
    },
    KpiCard {
        title: "Passenger Journeys (Million)",
        value: "295M",
        change: "+5.4%",
        trend: Trend::Up,
        target: "350M",
        description: "Total passenger transport",
    },
];

pub const LPI_MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub const LPI_SERIES: &[Series] = &[
    Series {
        name: "LPI Score",
        color: "#005430",
        values: &[3.2, 3.3, 3.4, 3.5, 3.6, 3.7],
        dashed: false,
    },
    Series {
        name: "National Target",
        color: "#8BAA99",
        values: &[3.5, 3.5, 3.5, 3.5, 3.5, 3.5],
        dashed: true,
    },
];

pub const MODAL_SPLIT: &[Slice] = &[
    Slice { label: "Road", value: 65.0, color: "#005430" },
    Slice { label: "Rail", value: 15.0, color: "#8BAA99" },
    Slice { label: "Air", value: 12.0, color: "#3e9b87" },
    Slice { label: "Sea", value: 8.0, color: "#58b5a3" },
];

pub const DEMAND_YEARS: &[&str] = &["2023", "2024", "2025", "2026", "2027"];

pub const DEMAND_SERIES: &[Series] = &[
    Series {
        name: "Freight (Million Tons)",
        color: "#005430",
        values: &[450.0, 480.0, 520.0, 565.0, 615.0],
        dashed: false,
    },
    Series {
        name: "Passenger (Million Journeys)",
        color: "#8BAA99",
        values: &[280.0, 295.0, 315.0, 340.0, 370.0],
        dashed: false,
    },
];

pub const USE_CASES: &[UseCaseGroup] = &[
    UseCaseGroup {
        level: MaturityLevel::Descriptive,
        cases: &[UseCase {
            title: "National Logistics Performance Dashboard",
            description: "Master dashboard tracking key national indicators against targets",
            status: UseCaseStatus::Active,
            metrics: &["LPI Score", "Cost % of GDP", "Freight Tonnage", "Passenger Journeys"],
        }],
    },
    UseCaseGroup {
        level: MaturityLevel::Diagnostic,
        cases: &[UseCase {
            title: "Cross-Modal Bottleneck Analysis",
            description: "Identify systemic delays where transport modes interact",
            status: UseCaseStatus::Active,
            metrics: &["Port-to-Rail Delays", "Airport-to-Last-Mile", "Intermodal Efficiency"],
        }],
    },
    UseCaseGroup {
        level: MaturityLevel::Predictive,
        cases: &[UseCase {
            title: "National Transport Demand Forecasting",
            description: "Long-term demand modeling for infrastructure investment",
            status: UseCaseStatus::Active,
            metrics: &["5-Year Freight Forecast", "10-Year Passenger Demand", "Infrastructure Needs"],
        }],
    },
    UseCaseGroup {
        level: MaturityLevel::Prescriptive,
        cases: &[
            UseCase {
                title: "Policy Simulation & Impact Analysis",
                description: "AI-powered digital twin for policy impact simulation",
                status: UseCaseStatus::Development,
                metrics: &["Cost Impact", "Time Savings", "CO2 Reduction", "Economic Benefits"],
            },
            UseCase {
                title: "Strategic Investment Optimization",
                description: "AI recommendations for budget allocation optimization",
                status: UseCaseStatus::Development,
                metrics: &["ROI Analysis", "Priority Ranking", "Resource Allocation", "Impact Modeling"],
            },
        ],
    },
];
