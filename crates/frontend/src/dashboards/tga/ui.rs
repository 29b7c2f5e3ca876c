use leptos::prelude::*;

use super::data;
use crate::shared::charts::{GroupedBarChart, StackedAreaChart};
use crate::shared::components::status_badge::severity_badge;
use crate::shared::components::{
    resolve_tab, KpiCardGrid, PageHeader, TabSpec, TabStrip, UseCaseSections,
};
use crate::shared::icons::icon;

const TABS: &[TabSpec] = &[
    TabSpec { key: "overview", label: "Overview", icon: "bar-chart" },
    TabSpec { key: "analytics", label: "Analytics Use Cases", icon: "brain" },
];

/// Transport General Authority dashboard.
#[component]
pub fn TgaDashboard() -> impl IntoView {
    let active_tab = RwSignal::new("overview".to_string());

    view! {
        <div class="dashboard">
            <PageHeader
                icon_name="truck"
                title="Transport General Authority (TGA)"
                subtitle="Land transport regulation, safety, and efficiency oversight"
            />

            <div class="dashboard__panel">
                <TabStrip tabs=TABS active=active_tab />
                <div class="dashboard__tab-body">
                    {move || match resolve_tab(TABS, &active_tab.get()) {
                        "analytics" => {
                            view! { <UseCaseSections groups=data::USE_CASES /> }.into_any()
                        }
                        _ => overview().into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

fn overview() -> impl IntoView {
    view! {
        <div class="dashboard__overview">
            <KpiCardGrid cards=data::KPI_CARDS />

            <div class="dashboard__chart-row">
                <div class="chart-card">
                    <div class="chart-card__header">
                        {icon("bus")}
                        <h3 class="chart-card__title">"Public Transport Performance"</h3>
                    </div>
                    <StackedAreaChart
                        labels=data::SERVICE_HOURS
                        series=data::PUBLIC_TRANSPORT_SERIES.to_vec()
                    />
                </div>

                <div class="chart-card">
                    <div class="chart-card__header">
                        {icon("alert-triangle")}
                        <h3 class="chart-card__title">"Compliance Risk Trends"</h3>
                    </div>
                    <StackedAreaChart
                        labels=data::RISK_MONTHS
                        series=data::COMPLIANCE_RISK_SERIES.to_vec()
                    />
                </div>
            </div>

            <div class="chart-card">
                <div class="chart-card__header">
                    {icon("clock")}
                    <h3 class="chart-card__title">"Key Freight Corridors Performance"</h3>
                </div>
                <GroupedBarChart
                    labels=data::CORRIDORS
                    series=data::CORRIDOR_SERIES.to_vec()
                    tilt_labels=true
                />
            </div>

            <div class="chart-card">
                <h3 class="chart-card__title">"Top Accident Hotspots"</h3>
                <div class="data-table-wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Location"</th>
                                <th>"Accidents (YTD)"</th>
                                <th>"Severity"</th>
                                <th>"Contributing Factors"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {data::ACCIDENT_HOTSPOTS.iter().map(|hotspot| view! {
                                <tr>
                                    <td class="data-table__strong">{hotspot.location}</td>
                                    <td>{hotspot.accidents}</td>
                                    <td>{severity_badge(hotspot.severity)}</td>
                                    <td>
                                        <div class="data-table__chips">
                                            {hotspot.factors.iter().map(|factor| view! {
                                                <span class="data-table__chip">{*factor}</span>
                                            }).collect_view()}
                                        </div>
                                    </td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
