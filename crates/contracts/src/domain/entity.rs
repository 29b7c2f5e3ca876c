//! Static directory of the government entities shown in the observatory.
//!
//! All string fields are 'static: the directory is a compile-time constant,
//! there is no runtime source for it.

use crate::enums::view_key::EntityCode;
use crate::shared::indicators::MaturityStage;

/// Descriptor of one government entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityInfo {
    pub code: EntityCode,
    /// Full official name, shown in the header and on dashboards.
    pub name: &'static str,
    /// Abbreviation used on the home cards.
    pub short_name: &'static str,
    /// One-line mission statement.
    pub blurb: &'static str,
    /// Icon name understood by the frontend icon lookup.
    pub icon: &'static str,
    /// Composite performance score (0-100) shown on the home cards.
    pub score: u8,
    pub maturity: MaturityStage,
    /// Headline KPI chips on the home cards.
    pub highlight_kpis: &'static [&'static str],
}

pub static ENTITY_DIRECTORY: [EntityInfo; 7] = [
    EntityInfo {
        code: EntityCode::Mtls,
        name: "Ministry of Transport and Logistic Services",
        short_name: "MTLS",
        blurb: "Strategic oversight and policy coordination",
        icon: "landmark",
        score: 92,
        maturity: MaturityStage::Advanced,
        highlight_kpis: &["LPI Score: 3.7", "Logistics Cost: 12.5%", "Freight: 480M tons"],
    },
    EntityInfo {
        code: EntityCode::Tga,
        name: "Transport General Authority",
        short_name: "TGA",
        blurb: "Land transport regulation and oversight",
        icon: "truck",
        score: 87,
        maturity: MaturityStage::Intermediate,
        highlight_kpis: &["On-Time: 87%", "Safety Index: 8.2", "Compliance: 88%"],
    },
    EntityInfo {
        code: EntityCode::Gaca,
        name: "General Authority of Civil Aviation",
        short_name: "GACA",
        blurb: "Air traffic and airport management",
        icon: "plane",
        score: 84,
        maturity: MaturityStage::Intermediate,
        highlight_kpis: &["On-Time: 84.2%", "Passengers: 2.8M", "Capacity: 83%"],
    },
    EntityInfo {
        code: EntityCode::Mawani,
        name: "MAWANI (Saudi Ports Authority)",
        short_name: "MAWANI",
        blurb: "Seaport operations and management",
        icon: "ship",
        score: 89,
        maturity: MaturityStage::Advanced,
        highlight_kpis: &["Turnaround: 15.2hrs", "Dwell Time: 3.0 days", "Productivity: 36/hr"],
    },
    EntityInfo {
        code: EntityCode::Sar,
        name: "Saudi Arabian Railway Company",
        short_name: "SAR",
        blurb: "Railway network operations",
        icon: "train",
        score: 91,
        maturity: MaturityStage::Advanced,
        highlight_kpis: &["On-Time: 91.5%", "Passengers: 358K", "Utilization: 78.2%"],
    },
    EntityInfo {
        code: EntityCode::Rga,
        name: "Road General Authority",
        short_name: "RGA",
        blurb: "Road network and infrastructure",
        icon: "road",
        score: 85,
        maturity: MaturityStage::Intermediate,
        highlight_kpis: &["Condition: 92.3%", "Efficiency: 78.5%", "Safety: 8.5"],
    },
    EntityInfo {
        code: EntityCode::Spl,
        name: "Saudi Post (SPL)",
        short_name: "SPL",
        blurb: "Postal and logistics services",
        icon: "package",
        score: 88,
        maturity: MaturityStage::Intermediate,
        highlight_kpis: &["Delivery: 91.2%", "Volume: 4.6M", "Satisfaction: 4.3/5"],
    },
];

/// Directory lookup. Every `EntityCode` has exactly one entry.
pub fn entity_info(code: EntityCode) -> &'static EntityInfo {
    ENTITY_DIRECTORY
        .iter()
        .find(|info| info.code == code)
        .expect("every EntityCode has a directory entry")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_covers_every_entity() {
        for code in EntityCode::all() {
            let info = entity_info(code);
            assert_eq!(info.code, code);
            assert!(!info.name.is_empty());
            assert!(!info.highlight_kpis.is_empty());
        }
    }

    #[test]
    fn test_directory_order_matches_sidebar_order() {
        let codes: Vec<_> = ENTITY_DIRECTORY.iter().map(|info| info.code).collect();
        assert_eq!(codes, EntityCode::all().to_vec());
    }
}
