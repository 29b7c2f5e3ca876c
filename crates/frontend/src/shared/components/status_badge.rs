//! Small badge renderers for the colour-bucketed statuses.

use contracts::shared::indicators::{HealthBand, MaturityStage, ScoreBand, Severity, UseCaseStatus};
use leptos::prelude::*;

pub fn status_badge(status: UseCaseStatus) -> AnyView {
    view! { <span class=status.css_class()>{status.label()}</span> }.into_any()
}

pub fn severity_badge(severity: Severity) -> AnyView {
    view! { <span class=severity.css_class()>{severity.label()}</span> }.into_any()
}

/// Composite entity score rendered as its band label.
pub fn score_badge(score: u8) -> AnyView {
    let band = ScoreBand::from_score(score);
    view! { <span class=band.css_class()>{band.label()}</span> }.into_any()
}

pub fn maturity_badge(stage: MaturityStage) -> AnyView {
    view! { <span class=stage.css_class()>{stage.label()}</span> }.into_any()
}

/// Health/efficiency percentage rendered with its bucket colour.
pub fn health_badge(percent: u8) -> AnyView {
    let band = HealthBand::from_percent(percent);
    view! { <span class=band.css_class()>{format!("{}%", percent)}</span> }.into_any()
}
