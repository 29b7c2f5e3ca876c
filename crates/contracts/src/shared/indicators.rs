//! Display vocabulary shared by every dashboard: KPI cards, analytics use
//! cases, and the threshold-to-bucket mappers that pick a display colour.
//!
//! Everything here is a compile-time constant on the consuming side; these
//! types never cross a wire and never change at runtime.

use crate::enums::maturity_level::MaturityLevel;

// ---------------------------------------------------------------------------
// KPI cards
// ---------------------------------------------------------------------------

/// Direction of a KPI relative to the previous period (drives arrow + colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Icon name for the trend arrow.
    pub fn icon(&self) -> &'static str {
        match self {
            Trend::Up => "arrow-up-right",
            Trend::Down => "arrow-down-right",
            Trend::Flat => "minus",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Up => "kpi-card__change--up",
            Trend::Down => "kpi-card__change--down",
            Trend::Flat => "kpi-card__change--flat",
        }
    }
}

/// One KPI card. Values are display literals, not numbers: the card shows
/// them verbatim ("3.8 hrs", "12.5%", "480M").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
    pub target: &'static str,
    pub description: &'static str,
}

// ---------------------------------------------------------------------------
// Analytics use cases
// ---------------------------------------------------------------------------

/// Delivery status of an analytics use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCaseStatus {
    Active,
    Development,
    Planned,
}

impl UseCaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            UseCaseStatus::Active => "Active",
            UseCaseStatus::Development => "In Development",
            UseCaseStatus::Planned => "Planned",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            UseCaseStatus::Active => "badge badge--success",
            UseCaseStatus::Development => "badge badge--warning",
            UseCaseStatus::Planned => "badge badge--neutral",
        }
    }
}

/// One analytics use case card on a dashboard's analytics tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseCase {
    pub title: &'static str,
    pub description: &'static str,
    pub status: UseCaseStatus,
    pub metrics: &'static [&'static str],
}

/// The use cases of one maturity level within a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseCaseGroup {
    pub level: MaturityLevel,
    pub cases: &'static [UseCase],
}

// ---------------------------------------------------------------------------
// Colour buckets
// ---------------------------------------------------------------------------

/// Severity bucket for incident/hotspot tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::High => "badge badge--error",
            Severity::Medium => "badge badge--warning",
            Severity::Low => "badge badge--success",
        }
    }
}

/// Band a composite entity score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Average,
}

impl ScoreBand {
    /// Bucket a 0-100 composite score.
    pub fn from_score(score: u8) -> ScoreBand {
        if score >= 89 {
            ScoreBand::Excellent
        } else if score >= 75 {
            ScoreBand::Good
        } else {
            ScoreBand::Average
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Average => "Average",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "badge badge--success",
            ScoreBand::Good => "badge badge--info",
            ScoreBand::Average => "badge badge--warning",
        }
    }
}

/// Band a 0-100 asset-health or efficiency percentage falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthBand {
    /// Bucket a 0-100 health/efficiency percentage.
    pub fn from_percent(value: u8) -> HealthBand {
        if value >= 95 {
            HealthBand::Excellent
        } else if value >= 90 {
            HealthBand::Good
        } else if value >= 85 {
            HealthBand::Fair
        } else {
            HealthBand::Poor
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            HealthBand::Excellent => "badge badge--success",
            HealthBand::Good => "badge badge--info",
            HealthBand::Fair => "badge badge--warning",
            HealthBand::Poor => "badge badge--error",
        }
    }
}

/// Analytics maturity stage reached by an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaturityStage {
    Advanced,
    Intermediate,
    Basic,
}

impl MaturityStage {
    pub fn label(&self) -> &'static str {
        match self {
            MaturityStage::Advanced => "Advanced",
            MaturityStage::Intermediate => "Intermediate",
            MaturityStage::Basic => "Basic",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            MaturityStage::Advanced => "badge badge--brand",
            MaturityStage::Intermediate => "badge badge--orange",
            MaturityStage::Basic => "badge badge--warning",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(89), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(88), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(75), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(74), ScoreBand::Average);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Average);
    }

    #[test]
    fn test_health_band_thresholds() {
        assert_eq!(HealthBand::from_percent(96), HealthBand::Excellent);
        assert_eq!(HealthBand::from_percent(95), HealthBand::Excellent);
        assert_eq!(HealthBand::from_percent(94), HealthBand::Good);
        assert_eq!(HealthBand::from_percent(90), HealthBand::Good);
        assert_eq!(HealthBand::from_percent(89), HealthBand::Fair);
        assert_eq!(HealthBand::from_percent(85), HealthBand::Fair);
        assert_eq!(HealthBand::from_percent(84), HealthBand::Poor);
    }

    #[test]
    fn test_trend_icons_are_distinct() {
        assert_ne!(Trend::Up.icon(), Trend::Down.icon());
        assert_ne!(Trend::Up.css_class(), Trend::Flat.css_class());
    }
}
