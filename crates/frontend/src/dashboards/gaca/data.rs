//! Literal datasets for the civil-aviation dashboard.

use contracts::enums::maturity_level::MaturityLevel;
use contracts::shared::indicators::{
    KpiCard, Severity, Trend, UseCase, UseCaseGroup, UseCaseStatus,
};

use crate::shared::charts::{Series, Slice};

pub const KPI_CARDS: &[KpiCard] = &[
    KpiCard {
        title: "On-Time Performance",
        value: "84.2%",
        change: "+2.1%",
        trend: Trend::Up,
        target: "85%",
        description: "Average flight punctuality across all airports",
    },
    KpiCard {
        title: "Passenger Throughput",
        value: "2.8M",
        change: "+8.5%",
        trend: Trend::Up,
        target: "3.2M",
        description: "Monthly passenger volume",
    },
    KpiCard {
        title: "Airport Capacity Utilization",
        value: "83%",
        change: "+3.2%",
        trend: Trend::Up,
        target: "85%",
        description: "Average capacity utilization",
    },
    KpiCard {
        title: "Air Cargo Volume",
        value: "58K tons",
        change: "+6.8%",
        trend: Trend::Up,
        target: "65K tons",
        description: "Monthly cargo tonnage",
    },
];

pub const TRAFFIC_MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub const AIR_TRAFFIC_SERIES: &[Series] = &[
    Series {
        name: "Domestic",
        color: "#005430",
        values: &[45000.0, 48000.0, 52000.0, 49000.0, 55000.0, 58000.0],
        dashed: false,
    },
    Series {
        name: "International",
        color: "#8BAA99",
        values: &[32000.0, 35000.0, 38000.0, 36000.0, 42000.0, 45000.0],
        dashed: false,
    },
    Series {
        name: "Cargo",
        color: "#3e9b87",
        values: &[8500.0, 9200.0, 9800.0, 9400.0, 10500.0, 11200.0],
        dashed: false,
    },
];

pub const DELAY_CAUSES: &[Slice] = &[
    Slice { label: "Technical Issues", value: 28.0, color: "#ef4444" },
    Slice { label: "Weather", value: 22.0, color: "#f59e0b" },
    Slice { label: "Late Arrivals", value: 18.0, color: "#8b5cf6" },
    Slice { label: "Ground Handling", value: 15.0, color: "#06b6d4" },
    Slice { label: "Air Traffic Control", value: 10.0, color: "#10b981" },
    Slice { label: "Other", value: 7.0, color: "#6b7280" },
];

pub const FLOW_HOURS: &[&str] = &[
    "06:00", "08:00", "10:00", "12:00", "14:00", "16:00", "18:00", "20:00",
];

pub const PASSENGER_FLOW_SERIES: &[Series] = &[
    Series {
        name: "Check-in",
        color: "#005430",
        values: &[120.0, 280.0, 350.0, 420.0, 380.0, 450.0, 520.0, 380.0],
        dashed: false,
    },
    Series {
        name: "Security",
        color: "#8BAA99",
        values: &[95.0, 250.0, 320.0, 380.0, 340.0, 410.0, 480.0, 350.0],
        dashed: false,
    },
    Series {
        name: "Immigration",
        color: "#3e9b87",
        values: &[85.0, 220.0, 290.0, 350.0, 310.0, 380.0, 440.0, 320.0],
        dashed: false,
    },
];

pub const AIRPORTS: &[&str] = &[
    "King Khalid Intl",
    "King Abdulaziz Intl",
    "King Fahd Intl",
    "Prince Mohammed",
    "Abha Regional",
];

pub const CAPACITY_SERIES: &[Series] = &[
    Series {
        name: "Total Capacity",
        color: "#e5e7eb",
        values: &[35000.0, 30000.0, 20000.0, 15000.0, 8000.0],
        dashed: false,
    },
    Series {
        name: "Current Usage",
        color: "#005430",
        values: &[28500.0, 26200.0, 15800.0, 12300.0, 6100.0],
        dashed: false,
    },
];

/// Predictive maintenance queue for airport infrastructure.
pub struct MaintenanceAlert {
    pub equipment: &'static str,
    pub priority: Severity,
    pub eta: &'static str,
    pub kind: &'static str,
}

pub const MAINTENANCE_ALERTS: &[MaintenanceAlert] = &[
    MaintenanceAlert {
        equipment: "Baggage Carousel #3 - Terminal 1",
        priority: Severity::High,
        eta: "2 days",
        kind: "Predictive",
    },
    MaintenanceAlert {
        equipment: "Jet Bridge A15 - Terminal 2",
        priority: Severity::Medium,
        eta: "5 days",
        kind: "Predictive",
    },
    MaintenanceAlert {
        equipment: "Runway Lights - RWY 16L/34R",
        priority: Severity::High,
        eta: "1 day",
        kind: "Predictive",
    },
    MaintenanceAlert {
        equipment: "Air Conditioning - Gate B12",
        priority: Severity::Low,
        eta: "7 days",
        kind: "Scheduled",
    },
];

pub const USE_CASES: &[UseCaseGroup] = &[
    UseCaseGroup {
        level: MaturityLevel::Descriptive,
        cases: &[UseCase {
            title: "National Air Traffic Dashboard",
            description: "Comprehensive view of domestic/international flights, airport capacity, and cargo",
            status: UseCaseStatus::Active,
            metrics: &["Flight Numbers", "Airport Capacity", "Passenger Volume", "Cargo Tonnage"],
        }],
    },
    UseCaseGroup {
        level: MaturityLevel::Diagnostic,
        cases: &[UseCase {
            title: "Flight Delay Root Cause Analysis",
            description: "Automated analysis of delay causes from airlines, ATC, and airports",
            status: UseCaseStatus::Active,
            metrics: &["Delay Categories", "Root Causes", "Impact Analysis", "Trend Identification"],
        }],
    },
    UseCaseGroup {
        level: MaturityLevel::Predictive,
        cases: &[
            UseCase {
                title: "Passenger Flow Forecasting",
                description: "Predicting passenger volumes at different airport checkpoints",
                status: UseCaseStatus::Active,
                metrics: &["Hourly Predictions", "Queue Length", "Wait Times", "Resource Planning"],
            },
            UseCase {
                title: "Airspace Congestion Prediction",
                description: "Forecasting potential congestion in national airspace",
                status: UseCaseStatus::Development,
                metrics: &["Traffic Density", "Congestion Points", "Route Optimization", "Delay Prevention"],
            },
        ],
    },
    UseCaseGroup {
        level: MaturityLevel::Prescriptive,
        cases: &[UseCase {
            title: "Predictive Maintenance for Airport Infrastructure",
            description: "AI-powered maintenance scheduling to prevent equipment downtime",
            status: UseCaseStatus::Active,
            metrics: &["Equipment Health", "Failure Prediction", "Maintenance Scheduling", "Downtime Prevention"],
        }],
    },
];
