use leptos::prelude::*;

use super::data;
use crate::shared::charts::{GroupedBarChart, LineChart, PieChart, StackedAreaChart};
use crate::shared::components::status_badge::severity_badge;
use crate::shared::components::{
    resolve_tab, KpiCardGrid, PageHeader, TabSpec, TabStrip, UseCaseSections,
};
use crate::shared::icons::icon;

const TABS: &[TabSpec] = &[
    TabSpec { key: "overview", label: "Overview", icon: "bar-chart" },
    TabSpec { key: "analytics", label: "Analytics Use Cases", icon: "brain" },
];

/// General Authority of Civil Aviation dashboard.
#[component]
pub fn GacaDashboard() -> impl IntoView {
    let active_tab = RwSignal::new("overview".to_string());

    view! {
        <div class="dashboard">
            <PageHeader
                icon_name="plane"
                title="General Authority of Civil Aviation (GACA)"
                subtitle="Air traffic, airport operations, safety, and passenger experience"
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
                    <h3 class="chart-card__title">"Air Traffic Trends"</h3>
                    <LineChart
                        labels=data::TRAFFIC_MONTHS
                        series=data::AIR_TRAFFIC_SERIES.to_vec()
                    />
                </div>

                <div class="chart-card">
                    <h3 class="chart-card__title">"Flight Delay Root Causes"</h3>
                    <PieChart slices=data::DELAY_CAUSES />
                </div>
            </div>

            <div class="dashboard__chart-row">
                <div class="chart-card">
                    <div class="chart-card__header">
                        {icon("users")}
                        <h3 class="chart-card__title">"Passenger Flow Forecasting"</h3>
                    </div>
                    <StackedAreaChart
                        labels=data::FLOW_HOURS
                        series=data::PASSENGER_FLOW_SERIES.to_vec()
                    />
                </div>

                <div class="chart-card">
                    <h3 class="chart-card__title">"Airport Capacity Utilization"</h3>
                    <GroupedBarChart
                        labels=data::AIRPORTS
                        series=data::CAPACITY_SERIES.to_vec()
                        tilt_labels=true
                    />
                </div>
            </div>

            <div class="chart-card">
                <div class="chart-card__header">
                    {icon("wrench")}
                    <h3 class="chart-card__title">"Predictive Maintenance Alerts"</h3>
                </div>
                <div class="data-table-wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Equipment"</th>
                                <th>"Priority"</th>
                                <th>"ETA"</th>
                                <th>"Type"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {data::MAINTENANCE_ALERTS.iter().map(|alert| view! {
                                <tr>
                                    <td class="data-table__strong">{alert.equipment}</td>
                                    <td>{severity_badge(alert.priority)}</td>
                                    <td>{alert.eta}</td>
                                    <td>{alert.kind}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
