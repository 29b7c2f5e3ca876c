//! Literal datasets for the ports-authority dashboard.

use contracts::enums::maturity_level::MaturityLevel;
use contracts::shared::indicators::{KpiCard, Trend, UseCase, UseCaseGroup, UseCaseStatus};

use crate::shared::charts::{Series, Slice};

pub const KPI_CARDS: &[KpiCard] = &[
    KpiCard {
        title: "Vessel Turnaround Time",
        value: "15.2 hrs",
        change: "-2.1 hrs",
        trend: Trend::Down,
        target: "14.0 hrs",
        description: "Average time vessels spend in port",
    },
    KpiCard {
        title: "Container Dwell Time",
        value: "3.0 days",
        change: "-0.5 days",
        trend: Trend::Down,
        target: "2.5 days",
        description: "Average container storage time",
    },
    KpiCard {
        title: "Crane Productivity",
        value: "36 moves/hr",
        change: "+4 moves/hr",
        trend: Trend::Up,
        target: "40 moves/hr",
        description: "Container moves per hour per crane",
    },
    KpiCard {
        title: "Gate Processing Time",
        value: "34 min",
        change: "-8 min",
        trend: Trend::Down,
        target: "30 min",
        description: "Average truck processing time",
    },
];

pub const PERFORMANCE_MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub const PORT_PERFORMANCE_SERIES: &[Series] = &[
    Series {
        name: "Vessel Turnaround (hrs)",
        color: "#005430",
        values: &[18.5, 17.8, 16.9, 16.2, 15.8, 15.2],
        dashed: false,
    },
    Series {
        name: "Crane Productivity",
        color: "#8BAA99",
        values: &[28.0, 30.0, 32.0, 34.0, 35.0, 36.0],
        dashed: false,
    },
];

pub const CARGO_TYPES: &[Slice] = &[
    Slice { label: "Containers", value: 45.0, color: "#005430" },
    Slice { label: "Bulk Cargo", value: 28.0, color: "#8BAA99" },
    Slice { label: "General Cargo", value: 15.0, color: "#3e9b87" },
    Slice { label: "Liquid Bulk", value: 12.0, color: "#58b5a3" },
];

pub const SCHEDULE_DAYS: &[&str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub const VESSEL_SCHEDULE_SERIES: &[Series] = &[
    Series {
        name: "Arrived On Time",
        color: "#005430",
        values: &[11.0, 13.0, 14.0, 15.0, 16.0, 12.0, 10.0],
        dashed: false,
    },
    Series {
        name: "Delayed",
        color: "#ef4444",
        values: &[1.0, 1.0, 2.0, 0.0, 2.0, 1.0, 0.0],
        dashed: false,
    },
];

pub const CONGESTION_HOURS: &[&str] = &["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"];

pub const CONGESTION_SERIES: &[Series] = &[
    Series {
        name: "Gate Traffic",
        color: "#005430",
        values: &[15.0, 8.0, 45.0, 52.0, 38.0, 28.0],
        dashed: false,
    },
    Series {
        name: "Yard Utilization %",
        color: "#8BAA99",
        values: &[65.0, 62.0, 78.0, 85.0, 82.0, 75.0],
        dashed: false,
    },
];

/// Berth occupancy state (drives the status badge colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BerthStatus {
    Occupied,
    Scheduled,
    Available,
}

impl BerthStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BerthStatus::Occupied => "Occupied",
            BerthStatus::Scheduled => "Scheduled",
            BerthStatus::Available => "Available",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BerthStatus::Occupied => "badge badge--error",
            BerthStatus::Scheduled => "badge badge--warning",
            BerthStatus::Available => "badge badge--success",
        }
    }
}

pub struct BerthAllocation {
    pub berth: &'static str,
    pub vessel: &'static str,
    pub eta: &'static str,
    pub cargo: &'static str,
    pub status: BerthStatus,
}

pub const BERTH_ALLOCATIONS: &[BerthAllocation] = &[
    BerthAllocation {
        berth: "Berth 1",
        vessel: "MSC Confidence",
        eta: "14:30",
        cargo: "Containers",
        status: BerthStatus::Occupied,
    },
    BerthAllocation {
        berth: "Berth 2",
        vessel: "COSCO Shanghai",
        eta: "16:45",
        cargo: "Containers",
        status: BerthStatus::Scheduled,
    },
    BerthAllocation {
        berth: "Berth 3",
        vessel: "Maersk Line",
        eta: "09:15",
        cargo: "Containers",
        status: BerthStatus::Occupied,
    },
    BerthAllocation {
        berth: "Berth 4",
        vessel: "CMA CGM",
        eta: "22:00",
        cargo: "General",
        status: BerthStatus::Scheduled,
    },
    BerthAllocation {
        berth: "Berth 5",
        vessel: "Available",
        eta: "-",
        cargo: "-",
        status: BerthStatus::Available,
    },
];

pub const USE_CASES: &[UseCaseGroup] = &[
    UseCaseGroup {
        level: MaturityLevel::Descriptive,
        cases: &[UseCase {
            title: "Port Operations Performance Dashboard",
            description: "Real-time tracking of vessel turnaround, container dwell time, and crane productivity",
            status: UseCaseStatus::Active,
            metrics: &["Vessel Turnaround", "Container Dwell Time", "Crane Productivity", "Gate Processing"],
        }],
    },
    UseCaseGroup {
        level: MaturityLevel::Diagnostic,
        cases: &[UseCase {
            title: "Port Bottleneck Analysis",
            description: "End-to-end container journey analysis to identify delays at each stage",
            status: UseCaseStatus::Active,
            metrics: &["Unloading Delays", "Customs Clearance", "Yard Operations", "Gate-out Process"],
        }],
    },
    UseCaseGroup {
        level: MaturityLevel::Predictive,
        cases: &[
            UseCase {
                title: "Vessel ETA Prediction",
                description: "AI-powered vessel arrival predictions using AIS data and weather patterns",
                status: UseCaseStatus::Active,
                metrics: &["AIS Data Analysis", "Weather Impact", "Historical Performance", "Berth Planning"],
            },
            UseCase {
                title: "Port Congestion Forecasting",
                description: "Predicting high congestion periods for better resource allocation",
                status: UseCaseStatus::Development,
                metrics: &["Traffic Patterns", "Vessel Schedules", "Holiday Impact", "Capacity Planning"],
            },
        ],
    },
    UseCaseGroup {
        level: MaturityLevel::Prescriptive,
        cases: &[UseCase {
            title: "Smart Berth Allocation System",
            description: "AI-optimized berth assignments to maximize throughput and minimize waiting",
            status: UseCaseStatus::Active,
            metrics: &["Optimal Assignments", "Vessel Characteristics", "Cargo Types", "Yard Capacity"],
        }],
    },
];
