//! Literal datasets for the road-authority dashboard.

use contracts::enums::maturity_level::MaturityLevel;
use contracts::shared::indicators::{
    KpiCard, Severity, Trend, UseCase, UseCaseGroup, UseCaseStatus,
};

use crate::shared::charts::{RadarPoint, Series, Slice};

pub const KPI_CARDS: &[KpiCard] = &[
    KpiCard {
        title: "Road Network Condition",
        value: "92.3%",
        change: "+1.8%",
        trend: Trend::Up,
        target: "95.0%",
        description: "Roads in excellent/good condition",
    },
    KpiCard {
        title: "Traffic Flow Efficiency",
        value: "78.5%",
        change: "+3.2%",
        trend: Trend::Up,
        target: "85.0%",
        description: "Average traffic flow efficiency",
    },
    KpiCard {
        title: "Road Safety Index",
        value: "8.5/10",
        change: "+0.3",
        trend: Trend::Up,
        target: "9.0/10",
        description: "Composite safety performance score",
    },
    KpiCard {
        title: "Smart Systems Uptime",
        value: "96.2%",
        change: "+1.1%",
        trend: Trend::Up,
        target: "98.0%",
        description: "Traffic management systems availability",
    },
];

pub const CONDITION_MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub const ROAD_CONDITION_SERIES: &[Series] = &[
    Series {
        name: "Poor",
        color: "#ef4444",
        values: &[5.0, 4.0, 3.0, 2.0, 1.0, 0.0],
        dashed: false,
    },
    Series {
        name: "Fair",
        color: "#f59e0b",
        values: &[15.0, 13.0, 11.0, 8.0, 6.0, 4.0],
        dashed: false,
    },
    Series {
        name: "Good",
        color: "#8BAA99",
        values: &[35.0, 36.0, 37.0, 38.0, 39.0, 40.0],
        dashed: false,
    },
    Series {
        name: "Excellent",
        color: "#005430",
        values: &[45.0, 47.0, 49.0, 52.0, 54.0, 56.0],
        dashed: false,
    },
];

pub const PERFORMANCE_RADAR: &[RadarPoint] = &[
    RadarPoint { label: "Road Condition", value: 92.0, full_mark: 100.0 },
    RadarPoint { label: "Traffic Flow", value: 78.0, full_mark: 100.0 },
    RadarPoint { label: "Safety Index", value: 85.0, full_mark: 100.0 },
    RadarPoint { label: "Maintenance", value: 88.0, full_mark: 100.0 },
    RadarPoint { label: "Smart Systems", value: 94.0, full_mark: 100.0 },
    RadarPoint { label: "User Satisfaction", value: 82.0, full_mark: 100.0 },
];

pub const FLOW_HOURS: &[&str] = &[
    "00:00", "06:00", "08:00", "12:00", "16:00", "18:00", "22:00",
];

pub const TRAFFIC_VOLUME_SERIES: Series = Series {
    name: "Traffic Volume",
    color: "#8BAA99",
    values: &[1200.0, 4500.0, 8200.0, 6800.0, 7500.0, 9200.0, 3800.0],
    dashed: false,
};

pub const TRAFFIC_SPEED_SERIES: Series = Series {
    name: "Avg Speed (km/h)",
    color: "#005430",
    values: &[85.0, 65.0, 45.0, 70.0, 55.0, 40.0, 75.0],
    dashed: false,
};

pub const ROAD_TYPES: &[Slice] = &[
    Slice { label: "Highways", value: 2500.0, color: "#005430" },
    Slice { label: "Urban Roads", value: 8500.0, color: "#8BAA99" },
    Slice { label: "Rural Roads", value: 12000.0, color: "#3e9b87" },
    Slice { label: "Service Roads", value: 3200.0, color: "#58b5a3" },
];

pub const MAINTENANCE_WEEKS: &[&str] = &["W1", "W2", "W3", "W4", "W5", "W6"];

pub const MAINTENANCE_SERIES: &[Series] = &[
    Series {
        name: "Completed",
        color: "#005430",
        values: &[42.0, 48.0, 36.0, 44.0, 39.0, 34.0],
        dashed: false,
    },
    Series {
        name: "Delayed",
        color: "#f59e0b",
        values: &[2.0, 3.0, 1.0, 2.0, 1.0, 0.0],
        dashed: false,
    },
    Series {
        name: "Emergency",
        color: "#ef4444",
        values: &[8.0, 12.0, 6.0, 9.0, 5.0, 7.0],
        dashed: false,
    },
];

pub struct RegionalSafety {
    pub region: &'static str,
    pub accidents: u32,
    pub fatalities: u32,
    pub injuries: u32,
    pub severity: Severity,
}

pub const REGIONAL_SAFETY: &[RegionalSafety] = &[
    RegionalSafety { region: "Riyadh", accidents: 245, fatalities: 12, injuries: 380, severity: Severity::Medium },
    RegionalSafety { region: "Makkah", accidents: 198, fatalities: 8, injuries: 295, severity: Severity::Low },
    RegionalSafety { region: "Eastern Province", accidents: 167, fatalities: 15, injuries: 267, severity: Severity::High },
    RegionalSafety { region: "Asir", accidents: 89, fatalities: 6, injuries: 134, severity: Severity::Low },
    RegionalSafety { region: "Qassim", accidents: 76, fatalities: 4, injuries: 98, severity: Severity::Low },
    RegionalSafety { region: "Tabuk", accidents: 54, fatalities: 3, injuries: 67, severity: Severity::Low },
];

pub struct InfrastructureHealth {
    pub category: &'static str,
    pub total: u32,
    pub excellent: u32,
    pub good: u32,
    pub fair: u32,
    pub poor: u32,
    pub health: u8,
}

pub const INFRASTRUCTURE_HEALTH: &[InfrastructureHealth] = &[
    InfrastructureHealth { category: "Highways", total: 2500, excellent: 1400, good: 850, fair: 200, poor: 50, health: 92 },
    InfrastructureHealth { category: "Urban Roads", total: 8500, excellent: 4250, good: 3400, fair: 680, poor: 170, health: 88 },
    InfrastructureHealth { category: "Rural Roads", total: 12000, excellent: 6000, good: 4800, fair: 960, poor: 240, health: 85 },
    InfrastructureHealth { category: "Bridges", total: 450, excellent: 315, good: 108, fair: 22, poor: 5, health: 94 },
    InfrastructureHealth { category: "Tunnels", total: 85, excellent: 68, good: 15, fair: 2, poor: 0, health: 96 },
];

pub struct SmartSystem {
    pub system: &'static str,
    pub installed: u32,
    pub operational: u32,
    pub maintenance: u32,
    pub offline: u32,
    pub efficiency: u8,
}

pub const SMART_SYSTEMS: &[SmartSystem] = &[
    SmartSystem { system: "Traffic Lights", installed: 2850, operational: 2735, maintenance: 85, offline: 30, efficiency: 96 },
    SmartSystem { system: "Speed Cameras", installed: 1200, operational: 1165, maintenance: 25, offline: 10, efficiency: 97 },
    SmartSystem { system: "Traffic Sensors", installed: 850, operational: 815, maintenance: 25, offline: 10, efficiency: 96 },
    SmartSystem { system: "Variable Message Signs", installed: 320, operational: 305, maintenance: 12, offline: 3, efficiency: 95 },
    SmartSystem { system: "CCTV Cameras", installed: 1850, operational: 1780, maintenance: 45, offline: 25, efficiency: 96 },
];

pub const USE_CASES: &[UseCaseGroup] = &[
    UseCaseGroup {
        level: MaturityLevel::Descriptive,
        cases: &[UseCase {
            title: "Road Network Performance Dashboard",
            description: "Real-time monitoring of road conditions, traffic flow, and infrastructure health across Saudi Arabia",
            status: UseCaseStatus::Active,
            metrics: &["Road Condition Index", "Traffic Volume", "Infrastructure Health", "Maintenance Status"],
        }],
    },
    UseCaseGroup {
        level: MaturityLevel::Diagnostic,
        cases: &[UseCase {
            title: "Traffic Congestion Root Cause Analysis",
            description: "Deep analysis of traffic bottlenecks, incident patterns, and infrastructure limitations",
            status: UseCaseStatus::Active,
            metrics: &["Congestion Patterns", "Incident Analysis", "Infrastructure Gaps", "Capacity Constraints"],
        }],
    },
    UseCaseGroup {
        level: MaturityLevel::Predictive,
        cases: &[
            UseCase {
                title: "Road Maintenance Forecasting",
                description: "AI-powered prediction of road deterioration and optimal maintenance scheduling",
                status: UseCaseStatus::Active,
                metrics: &["Pavement Life Prediction", "Weather Impact", "Traffic Load Analysis", "Maintenance Planning"],
            },
            UseCase {
                title: "Traffic Flow Prediction",
                description: "Advanced traffic flow forecasting using historical patterns and real-time data",
                status: UseCaseStatus::Development,
                metrics: &["Flow Patterns", "Event Impact", "Weather Correlation", "Route Optimization"],
            },
        ],
    },
    UseCaseGroup {
        level: MaturityLevel::Prescriptive,
        cases: &[UseCase {
            title: "Smart Traffic Management System",
            description: "AI-optimized traffic signal control and dynamic route guidance for optimal flow",
            status: UseCaseStatus::Active,
            metrics: &["Signal Optimization", "Dynamic Routing", "Congestion Mitigation", "Emergency Response"],
        }],
    },
];
