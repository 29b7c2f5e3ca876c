//! Literal datasets for the postal dashboard.

use contracts::enums::maturity_level::MaturityLevel;
use contracts::shared::indicators::{KpiCard, Trend, UseCase, UseCaseGroup, UseCaseStatus};

use crate::shared::charts::{Series, Slice};

pub const KPI_CARDS: &[KpiCard] = &[
    KpiCard {
        title: "On-Time Delivery Rate",
        value: "91.2%",
        change: "+1.5%",
        trend: Trend::Up,
        target: "95.0%",
        description: "Packages delivered on scheduled time",
    },
    KpiCard {
        title: "Processing Volume",
        value: "4.6M",
        change: "+0.4M",
        trend: Trend::Up,
        target: "5.0M",
        description: "Monthly packages processed",
    },
    KpiCard {
        title: "Customer Satisfaction",
        value: "4.3/5",
        change: "+0.1",
        trend: Trend::Up,
        target: "4.5/5",
        description: "Average customer rating",
    },
    KpiCard {
        title: "Last-Mile Efficiency",
        value: "89.2%",
        change: "+2.1%",
        trend: Trend::Up,
        target: "92.0%",
        description: "First-attempt delivery success rate",
    },
];

pub const DELIVERY_MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub const ON_TIME_SERIES: Series = Series {
    name: "On-Time %",
    color: "#005430",
    values: &[82.5, 84.2, 86.8, 88.1, 89.7, 91.2],
    dashed: false,
};

pub const VOLUME_SERIES: Series = Series {
    name: "Volume (M)",
    color: "#8BAA99",
    values: &[2.8, 3.1, 3.5, 3.8, 4.2, 4.6],
    dashed: false,
};

pub const SERVICE_TYPES: &[Slice] = &[
    Slice { label: "Express Delivery", value: 35.0, color: "#005430" },
    Slice { label: "Standard Delivery", value: 42.0, color: "#8BAA99" },
    Slice { label: "International", value: 15.0, color: "#3e9b87" },
    Slice { label: "E-commerce", value: 8.0, color: "#58b5a3" },
];

pub const ECOMMERCE_DAYS: &[&str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub const ECOMMERCE_SERIES: &[Series] = &[
    Series {
        name: "Orders",
        color: "#005430",
        values: &[12500.0, 14200.0, 16800.0, 18500.0, 22000.0, 19500.0, 15200.0],
        dashed: false,
    },
    Series {
        name: "Fulfilled",
        color: "#8BAA99",
        values: &[11800.0, 13500.0, 15900.0, 17600.0, 20900.0, 18400.0, 14500.0],
        dashed: false,
    },
];

pub const SATISFACTION_HOURS: &[&str] = &[
    "08:00", "10:00", "12:00", "14:00", "16:00", "18:00", "20:00",
];

pub const SATISFACTION_SERIES: &[Series] = &[Series {
    name: "Satisfaction Score",
    color: "#005430",
    values: &[4.1, 4.3, 4.0, 4.2, 4.4, 4.1, 4.5],
    dashed: false,
}];

pub struct LastMileZone {
    pub zone: &'static str,
    pub attempts: f64,
    pub success: u8,
    pub cost_sar: f64,
    pub time_min: u32,
}

pub const LAST_MILE_ZONES: &[LastMileZone] = &[
    LastMileZone { zone: "Riyadh Central", attempts: 1.2, success: 94, cost_sar: 12.5, time_min: 35 },
    LastMileZone { zone: "Riyadh Suburbs", attempts: 1.4, success: 89, cost_sar: 18.2, time_min: 52 },
    LastMileZone { zone: "Jeddah Central", attempts: 1.3, success: 92, cost_sar: 13.8, time_min: 38 },
    LastMileZone { zone: "Jeddah Suburbs", attempts: 1.5, success: 87, cost_sar: 19.5, time_min: 55 },
    LastMileZone { zone: "Dammam Central", attempts: 1.1, success: 95, cost_sar: 11.9, time_min: 32 },
    LastMileZone { zone: "Rural Areas", attempts: 2.1, success: 76, cost_sar: 28.4, time_min: 85 },
];

pub struct NetworkFacility {
    pub facility: &'static str,
    pub capacity: u32,
    pub utilization: u8,
    pub throughput: u32,
    pub efficiency: u8,
}

pub const NETWORK_FACILITIES: &[NetworkFacility] = &[
    NetworkFacility { facility: "Riyadh Main Hub", capacity: 50000, utilization: 78, throughput: 39000, efficiency: 92 },
    NetworkFacility { facility: "Jeddah Distribution", capacity: 35000, utilization: 82, throughput: 28700, efficiency: 89 },
    NetworkFacility { facility: "Dammam Sorting", capacity: 25000, utilization: 74, throughput: 18500, efficiency: 94 },
    NetworkFacility { facility: "Makkah Center", capacity: 15000, utilization: 68, throughput: 10200, efficiency: 87 },
    NetworkFacility { facility: "Madinah Center", capacity: 12000, utilization: 71, throughput: 8520, efficiency: 91 },
];

pub struct OperationalAsset {
    pub asset: &'static str,
    pub total: u32,
    pub operational: u32,
    pub maintenance: u32,
    pub efficiency: u8,
}

pub const OPERATIONAL_ASSETS: &[OperationalAsset] = &[
    OperationalAsset { asset: "Processing Centers", total: 45, operational: 43, maintenance: 2, efficiency: 96 },
    OperationalAsset { asset: "Delivery Vehicles", total: 2850, operational: 2735, maintenance: 85, efficiency: 96 },
    OperationalAsset { asset: "Sorting Machines", total: 120, operational: 115, maintenance: 4, efficiency: 96 },
    OperationalAsset { asset: "Tracking Systems", total: 850, operational: 820, maintenance: 25, efficiency: 96 },
    OperationalAsset { asset: "Customer Centers", total: 320, operational: 312, maintenance: 6, efficiency: 98 },
];

pub const USE_CASES: &[UseCaseGroup] = &[
    UseCaseGroup {
        level: MaturityLevel::Descriptive,
        cases: &[UseCase {
            title: "Postal Operations Performance Dashboard",
            description: "Real-time monitoring of delivery performance, processing volumes, and network utilization",
            status: UseCaseStatus::Active,
            metrics: &["Delivery Performance", "Processing Volume", "Network Utilization", "Service Quality"],
        }],
    },
    UseCaseGroup {
        level: MaturityLevel::Diagnostic,
        cases: &[UseCase {
            title: "Delivery Delay Root Cause Analysis",
            description: "Comprehensive analysis of delivery delays by route, weather, traffic, and operational factors",
            status: UseCaseStatus::Active,
            metrics: &["Delay Patterns", "Route Analysis", "Weather Impact", "Operational Bottlenecks"],
        }],
    },
    UseCaseGroup {
        level: MaturityLevel::Predictive,
        cases: &[
            UseCase {
                title: "Demand Forecasting & Capacity Planning",
                description: "AI-powered prediction of package volumes and optimal resource allocation",
                status: UseCaseStatus::Active,
                metrics: &["Volume Prediction", "Seasonal Patterns", "E-commerce Growth", "Capacity Planning"],
            },
            UseCase {
                title: "Last-Mile Delivery Optimization",
                description: "Predictive routing and delivery time estimation for improved customer experience",
                status: UseCaseStatus::Development,
                metrics: &["Route Optimization", "Delivery Windows", "Traffic Prediction", "Customer Preferences"],
            },
        ],
    },
    UseCaseGroup {
        level: MaturityLevel::Prescriptive,
        cases: &[UseCase {
            title: "Smart Logistics Optimization System",
            description: "AI-optimized sorting, routing, and delivery scheduling for maximum efficiency",
            status: UseCaseStatus::Active,
            metrics: &["Sorting Optimization", "Dynamic Routing", "Resource Allocation", "Cost Minimization"],
        }],
    },
];
