//! Literal datasets for the ecosystem overview page.

use crate::shared::charts::{Series, Slice};

/// Ecosystem-wide headline figures.
pub struct EcosystemKpi {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
    pub accent_class: &'static str,
}

pub const ECOSYSTEM_KPIS: &[EcosystemKpi] = &[
    EcosystemKpi {
        label: "On-Time Performance",
        value: "87.3%",
        trend: "+2.1%",
        accent_class: "accent--green",
    },
    EcosystemKpi {
        label: "Customer Satisfaction",
        value: "4.4/5",
        trend: "+0.3",
        accent_class: "accent--blue",
    },
    EcosystemKpi {
        label: "Operational Efficiency",
        value: "82.1%",
        trend: "+5.2%",
        accent_class: "accent--orange",
    },
    EcosystemKpi {
        label: "Safety Index",
        value: "8.7/10",
        trend: "+0.4",
        accent_class: "accent--brand",
    },
];

/// Maturity adoption across the seven entities.
pub struct MaturityCoverage {
    pub level: &'static str,
    pub entities: u8,
    pub coverage: u8,
    pub color: &'static str,
}

pub const MATURITY_COVERAGE: &[MaturityCoverage] = &[
    MaturityCoverage { level: "Descriptive", entities: 7, coverage: 100, color: "#3b82f6" },
    MaturityCoverage { level: "Diagnostic", entities: 6, coverage: 86, color: "#eab308" },
    MaturityCoverage { level: "Predictive", entities: 4, coverage: 57, color: "#ea580c" },
    MaturityCoverage { level: "Prescriptive", entities: 2, coverage: 29, color: "#16a34a" },
];

pub const TREND_MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub const TREND_SERIES: &[Series] = &[
    Series {
        name: "On-Time Performance",
        color: "#005430",
        values: &[78.0, 81.0, 83.0, 85.0, 86.0, 87.0],
        dashed: false,
    },
    Series {
        name: "Operational Efficiency",
        color: "#8BAA99",
        values: &[75.0, 78.0, 80.0, 81.0, 82.0, 82.0],
        dashed: false,
    },
];

pub const TRANSPORT_MODES: &[Slice] = &[
    Slice { label: "Road Transport", value: 45.0, color: "#005430" },
    Slice { label: "Air Transport", value: 25.0, color: "#3e9b87" },
    Slice { label: "Sea Transport", value: 20.0, color: "#58b5a3" },
    Slice { label: "Rail Transport", value: 7.0, color: "#8BAA99" },
    Slice { label: "Postal Services", value: 3.0, color: "#A8C5B8" },
];
