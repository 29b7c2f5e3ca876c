pub mod kpi_card;
pub mod page_header;
pub mod status_badge;
pub mod tab_strip;
pub mod use_cases;

pub use kpi_card::KpiCardGrid;
pub use page_header::PageHeader;
pub use tab_strip::{resolve_tab, TabSpec, TabStrip};
pub use use_cases::UseCaseSections;
