use serde::{Deserialize, Serialize};

/// The four analytics maturity levels of the observatory framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaturityLevel {
    Descriptive,
    Diagnostic,
    Predictive,
    Prescriptive,
}

impl MaturityLevel {
    /// Key used in navigation and deep links.
    pub fn code(&self) -> &'static str {
        match self {
            MaturityLevel::Descriptive => "descriptive",
            MaturityLevel::Diagnostic => "diagnostic",
            MaturityLevel::Predictive => "predictive",
            MaturityLevel::Prescriptive => "prescriptive",
        }
    }

    /// Readable title.
    pub fn title(&self) -> &'static str {
        match self {
            MaturityLevel::Descriptive => "Descriptive Analytics",
            MaturityLevel::Diagnostic => "Diagnostic Analytics",
            MaturityLevel::Predictive => "Predictive Analytics",
            MaturityLevel::Prescriptive => "Prescriptive & AI",
        }
    }

    /// The question each level answers.
    pub fn subtitle(&self) -> &'static str {
        match self {
            MaturityLevel::Descriptive => "What happened?",
            MaturityLevel::Diagnostic => "Why did it happen?",
            MaturityLevel::Predictive => "What will happen?",
            MaturityLevel::Prescriptive => "What should we do?",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            MaturityLevel::Descriptive => {
                "Historical data analysis, dashboards, and KPI monitoring"
            }
            MaturityLevel::Diagnostic => "Root cause analysis and correlation discovery",
            MaturityLevel::Predictive => {
                "Forecasting and risk assessment using machine learning"
            }
            MaturityLevel::Prescriptive => {
                "AI-powered optimization and automated decision-making"
            }
        }
    }

    /// Organizational stage this level corresponds to.
    pub fn stage(&self) -> &'static str {
        match self {
            MaturityLevel::Descriptive => "Basic",
            MaturityLevel::Diagnostic => "Intermediate",
            MaturityLevel::Predictive => "Advanced",
            MaturityLevel::Prescriptive => "Expert",
        }
    }

    /// Icon name understood by the frontend icon lookup.
    pub fn icon(&self) -> &'static str {
        match self {
            MaturityLevel::Descriptive => "bar-chart",
            MaturityLevel::Diagnostic => "trending-up",
            MaturityLevel::Predictive => "target",
            MaturityLevel::Prescriptive => "brain",
        }
    }

    /// Accent class used for the level icon.
    pub fn accent_class(&self) -> &'static str {
        match self {
            MaturityLevel::Descriptive => "accent--blue",
            MaturityLevel::Diagnostic => "accent--yellow",
            MaturityLevel::Predictive => "accent--orange",
            MaturityLevel::Prescriptive => "accent--green",
        }
    }

    /// All levels, in maturity order.
    pub fn all() -> [MaturityLevel; 4] {
        [
            MaturityLevel::Descriptive,
            MaturityLevel::Diagnostic,
            MaturityLevel::Predictive,
            MaturityLevel::Prescriptive,
        ]
    }

    /// Parse from the navigation key.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "descriptive" => Some(MaturityLevel::Descriptive),
            "diagnostic" => Some(MaturityLevel::Diagnostic),
            "predictive" => Some(MaturityLevel::Predictive),
            "prescriptive" => Some(MaturityLevel::Prescriptive),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for level in MaturityLevel::all() {
            assert_eq!(MaturityLevel::from_code(level.code()), Some(level));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(MaturityLevel::from_code("cognitive"), None);
        assert_eq!(MaturityLevel::from_code(""), None);
    }
}
