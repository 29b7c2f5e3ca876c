//! Literal datasets for the land-transport authority dashboard.

use contracts::enums::maturity_level::MaturityLevel;
use contracts::shared::indicators::{
    KpiCard, Severity, Trend, UseCase, UseCaseGroup, UseCaseStatus,
};

use crate::shared::charts::Series;

pub const KPI_CARDS: &[KpiCard] = &[
    KpiCard {
        title: "Public Transport On-Time Performance",
        value: "87%",
        change: "+3.2%",
        trend: Trend::Up,
        target: "90%",
        description: "Average on-time performance across all routes",
    },
    KpiCard {
        title: "Average Freight Trip Time",
        value: "3.8 hrs",
        change: "-0.4 hrs",
        trend: Trend::Down,
        target: "3.5 hrs",
        description: "Average time for major freight corridors",
    },
    KpiCard {
        title: "Road Safety Index",
        value: "8.2/10",
        change: "+0.5",
        trend: Trend::Up,
        target: "8.5/10",
        description: "Composite safety score across network",
    },
    KpiCard {
        title: "Compliance Rate",
        value: "88%",
        change: "+2.1%",
        trend: Trend::Up,
        target: "95%",
        description: "Transport operator compliance rate",
    },
];

pub const SERVICE_HOURS: &[&str] = &[
    "06:00", "08:00", "10:00", "12:00", "14:00", "16:00", "18:00", "20:00",
];

pub const PUBLIC_TRANSPORT_SERIES: &[Series] = &[
    Series {
        name: "On Time",
        color: "#005430",
        values: &[85.0, 78.0, 92.0, 88.0, 90.0, 82.0, 75.0, 87.0],
        dashed: false,
    },
    Series {
        name: "Delayed",
        color: "#f59e0b",
        values: &[12.0, 18.0, 6.0, 10.0, 8.0, 15.0, 20.0, 11.0],
        dashed: false,
    },
    Series {
        name: "Cancelled",
        color: "#ef4444",
        values: &[3.0, 4.0, 2.0, 2.0, 2.0, 3.0, 5.0, 2.0],
        dashed: false,
    },
];

pub const RISK_MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub const COMPLIANCE_RISK_SERIES: &[Series] = &[
    Series {
        name: "Low Risk",
        color: "#10b981",
        values: &[78.0, 82.0, 75.0, 80.0, 85.0, 88.0],
        dashed: false,
    },
    Series {
        name: "Medium Risk",
        color: "#f59e0b",
        values: &[18.0, 15.0, 20.0, 17.0, 12.0, 10.0],
        dashed: false,
    },
    Series {
        name: "High Risk",
        color: "#ef4444",
        values: &[4.0, 3.0, 5.0, 3.0, 3.0, 2.0],
        dashed: false,
    },
];

pub const CORRIDORS: &[&str] = &[
    "Riyadh-Dammam",
    "Jeddah-Riyadh",
    "Dammam-Jubail",
    "Riyadh-Qassim",
    "Jeddah-Makkah",
];

pub const CORRIDOR_SERIES: &[Series] = &[
    Series {
        name: "Avg Trip Time (hrs)",
        color: "#005430",
        values: &[4.2, 6.1, 1.8, 3.5, 1.2],
        dashed: false,
    },
    Series {
        name: "Wait Time (hrs)",
        color: "#8BAA99",
        values: &[0.8, 1.2, 0.3, 0.6, 0.2],
        dashed: false,
    },
];

/// Year-to-date accident hotspots.
pub struct AccidentHotspot {
    pub location: &'static str,
    pub accidents: u32,
    pub severity: Severity,
    pub factors: &'static [&'static str],
}

pub const ACCIDENT_HOTSPOTS: &[AccidentHotspot] = &[
    AccidentHotspot {
        location: "Highway 40 - KM 85",
        accidents: 24,
        severity: Severity::High,
        factors: &["Weather", "Speed"],
    },
    AccidentHotspot {
        location: "Ring Road - Exit 12",
        accidents: 18,
        severity: Severity::Medium,
        factors: &["Traffic", "Visibility"],
    },
    AccidentHotspot {
        location: "Route 505 - Junction A",
        accidents: 31,
        severity: Severity::High,
        factors: &["Road Condition", "Heavy Vehicles"],
    },
    AccidentHotspot {
        location: "Urban Route 15",
        accidents: 12,
        severity: Severity::Low,
        factors: &["Pedestrians", "Signals"],
    },
];

pub const USE_CASES: &[UseCaseGroup] = &[
    UseCaseGroup {
        level: MaturityLevel::Descriptive,
        cases: &[
            UseCase {
                title: "Real-time Public Transport Monitoring",
                description: "Live dashboards showing bus locations, on-time performance, and passenger load",
                status: UseCaseStatus::Active,
                metrics: &["Bus Locations", "On-Time Performance", "Passenger Load", "Route Coverage"],
            },
            UseCase {
                title: "Freight Movement Dashboard",
                description: "Visualizing truck movements, key corridors, and wait times",
                status: UseCaseStatus::Active,
                metrics: &["Truck Movements", "Corridor Performance", "Border Wait Times", "Checkpoint Delays"],
            },
        ],
    },
    UseCaseGroup {
        level: MaturityLevel::Diagnostic,
        cases: &[UseCase {
            title: "Accident Hotspot Analysis",
            description: "Analyzing accident data to identify and understand high-risk locations",
            status: UseCaseStatus::Active,
            metrics: &["Accident Frequency", "Severity Analysis", "Contributing Factors", "Risk Patterns"],
        }],
    },
    UseCaseGroup {
        level: MaturityLevel::Predictive,
        cases: &[
            UseCase {
                title: "Compliance Risk Scoring",
                description: "Predictive model for transport operator compliance risk assessment",
                status: UseCaseStatus::Active,
                metrics: &["Risk Scores", "Audit Prioritization", "Violation Prediction", "Operator Ranking"],
            },
            UseCase {
                title: "Public Transport Demand Prediction",
                description: "Forecasting passenger demand for route and schedule optimization",
                status: UseCaseStatus::Development,
                metrics: &["Demand Forecasting", "Route Optimization", "Fleet Planning", "Event Impact"],
            },
        ],
    },
    UseCaseGroup {
        level: MaturityLevel::Prescriptive,
        cases: &[UseCase {
            title: "Dynamic Route Optimization",
            description: "AI algorithms for real-time route adjustments to avoid congestion",
            status: UseCaseStatus::Development,
            metrics: &["Route Suggestions", "Congestion Avoidance", "Real-time Adjustments", "Efficiency Gains"],
        }],
    },
];
