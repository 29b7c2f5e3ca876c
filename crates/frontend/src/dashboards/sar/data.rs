//! Literal datasets for the railway dashboard.

use contracts::enums::maturity_level::MaturityLevel;
use contracts::shared::indicators::{KpiCard, Trend, UseCase, UseCaseGroup, UseCaseStatus};

use crate::shared::charts::{Series, Slice};

pub const KPI_CARDS: &[KpiCard] = &[
    KpiCard {
        title: "On-Time Performance",
        value: "91.5%",
        change: "+2.3%",
        trend: Trend::Up,
        target: "95.0%",
        description: "Trains arriving within 5 minutes of schedule",
    },
    KpiCard {
        title: "Passenger Volume",
        value: "358K",
        change: "+23K",
        trend: Trend::Up,
        target: "400K",
        description: "Monthly passenger count",
    },
    KpiCard {
        title: "Freight Capacity Utilization",
        value: "78.2%",
        change: "+5.1%",
        trend: Trend::Up,
        target: "85.0%",
        description: "Freight capacity utilization rate",
    },
    KpiCard {
        title: "Asset Availability",
        value: "95.0%",
        change: "+2.0%",
        trend: Trend::Up,
        target: "97.0%",
        description: "Rolling stock operational availability",
    },
];

pub const PERFORMANCE_MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub const ON_TIME_SERIES: Series = Series {
    name: "On-Time Performance %",
    color: "#005430",
    values: &[78.5, 82.1, 85.3, 87.8, 89.2, 91.5],
    dashed: false,
};

pub const PASSENGER_VOLUME_SERIES: Series = Series {
    name: "Passenger Volume",
    color: "#8BAA99",
    values: &[245000.0, 268000.0, 289000.0, 312000.0, 335000.0, 358000.0],
    dashed: false,
};

pub const SERVICE_TYPES: &[Slice] = &[
    Slice { label: "Passenger Express", value: 45.0, color: "#005430" },
    Slice { label: "Passenger Regular", value: 32.0, color: "#8BAA99" },
    Slice { label: "Freight Container", value: 15.0, color: "#3e9b87" },
    Slice { label: "Freight Bulk", value: 8.0, color: "#58b5a3" },
];

pub const DEMAND_HOURS: &[&str] = &[
    "06:00", "08:00", "10:00", "12:00", "14:00", "16:00", "18:00", "20:00",
];

pub const DEMAND_SERIES: &[Series] = &[
    Series {
        name: "Capacity",
        color: "#9ca3af",
        values: &[2000.0, 3200.0, 2400.0, 2800.0, 2400.0, 3000.0, 3600.0, 2800.0],
        dashed: true,
    },
    Series {
        name: "Predicted Demand",
        color: "#8BAA99",
        values: &[1180.0, 2750.0, 1820.0, 2150.0, 1950.0, 2580.0, 3150.0, 2450.0],
        dashed: false,
    },
    Series {
        name: "Actual Demand",
        color: "#005430",
        values: &[1200.0, 2800.0, 1800.0, 2200.0, 1900.0, 2600.0, 3200.0, 2400.0],
        dashed: false,
    },
];

pub const MAINTENANCE_WEEKS: &[&str] = &["W1", "W2", "W3", "W4", "W5", "W6"];

pub const MAINTENANCE_SERIES: &[Series] = &[
    Series {
        name: "Completed",
        color: "#005430",
        values: &[23.0, 26.0, 22.0, 27.0, 24.0, 23.0],
        dashed: false,
    },
    Series {
        name: "Overdue",
        color: "#ef4444",
        values: &[2.0, 2.0, 0.0, 3.0, 2.0, 1.0],
        dashed: false,
    },
    Series {
        name: "Critical",
        color: "#f59e0b",
        values: &[5.0, 3.0, 4.0, 6.0, 2.0, 3.0],
        dashed: false,
    },
];

pub struct RoutePerformance {
    pub route: &'static str,
    pub distance_km: u32,
    pub on_time: u8,
    pub avg_delay_min: u8,
    pub passengers: u32,
    pub freight_tons: u32,
}

pub const ROUTE_PERFORMANCE: &[RoutePerformance] = &[
    RoutePerformance {
        route: "Riyadh-Dammam",
        distance_km: 449,
        on_time: 92,
        avg_delay_min: 8,
        passengers: 45000,
        freight_tons: 850,
    },
    RoutePerformance {
        route: "Riyadh-Qassim",
        distance_km: 317,
        on_time: 89,
        avg_delay_min: 12,
        passengers: 32000,
        freight_tons: 620,
    },
    RoutePerformance {
        route: "Dammam-Hofuf",
        distance_km: 160,
        on_time: 94,
        avg_delay_min: 5,
        passengers: 28000,
        freight_tons: 480,
    },
    RoutePerformance {
        route: "Riyadh-Majmaah",
        distance_km: 180,
        on_time: 87,
        avg_delay_min: 15,
        passengers: 22000,
        freight_tons: 380,
    },
    RoutePerformance {
        route: "Haramain Express",
        distance_km: 450,
        on_time: 96,
        avg_delay_min: 3,
        passengers: 85000,
        freight_tons: 0,
    },
];

pub struct AssetHealth {
    pub category: &'static str,
    pub total: u32,
    pub operational: u32,
    pub maintenance: u32,
    pub critical: u32,
    pub health: u8,
}

pub const ASSET_HEALTH: &[AssetHealth] = &[
    AssetHealth { category: "Locomotives", total: 45, operational: 42, maintenance: 2, critical: 1, health: 93 },
    AssetHealth { category: "Passenger Cars", total: 180, operational: 168, maintenance: 8, critical: 4, health: 91 },
    AssetHealth { category: "Freight Cars", total: 320, operational: 295, maintenance: 18, critical: 7, health: 89 },
    AssetHealth { category: "Track Infrastructure", total: 1200, operational: 1150, maintenance: 35, critical: 15, health: 87 },
    AssetHealth { category: "Signaling Systems", total: 85, operational: 80, maintenance: 3, critical: 2, health: 92 },
];

pub const USE_CASES: &[UseCaseGroup] = &[
    UseCaseGroup {
        level: MaturityLevel::Descriptive,
        cases: &[UseCase {
            title: "Railway Operations Performance Dashboard",
            description: "Real-time monitoring of train punctuality, passenger volumes, and freight capacity utilization",
            status: UseCaseStatus::Active,
            metrics: &["On-Time Performance", "Passenger Volume", "Freight Utilization", "Route Performance"],
        }],
    },
    UseCaseGroup {
        level: MaturityLevel::Diagnostic,
        cases: &[UseCase {
            title: "Delay Root Cause Analysis",
            description: "Comprehensive analysis of train delays by route, time, weather, and infrastructure factors",
            status: UseCaseStatus::Active,
            metrics: &["Delay Categories", "Infrastructure Issues", "Weather Impact", "Operational Factors"],
        }],
    },
    UseCaseGroup {
        level: MaturityLevel::Predictive,
        cases: &[
            UseCase {
                title: "Passenger Demand Forecasting",
                description: "AI-powered prediction of passenger demand by route, time, and seasonal patterns",
                status: UseCaseStatus::Active,
                metrics: &["Demand Patterns", "Seasonal Trends", "Event Impact", "Capacity Planning"],
            },
            UseCase {
                title: "Predictive Maintenance Scheduling",
                description: "Condition-based maintenance predictions for rolling stock and infrastructure",
                status: UseCaseStatus::Development,
                metrics: &["Asset Health", "Failure Prediction", "Maintenance Windows", "Cost Optimization"],
            },
        ],
    },
    UseCaseGroup {
        level: MaturityLevel::Prescriptive,
        cases: &[UseCase {
            title: "Dynamic Train Scheduling Optimization",
            description: "AI-optimized train schedules to maximize capacity and minimize delays",
            status: UseCaseStatus::Active,
            metrics: &["Schedule Optimization", "Resource Allocation", "Conflict Resolution", "Performance Metrics"],
        }],
    },
];
