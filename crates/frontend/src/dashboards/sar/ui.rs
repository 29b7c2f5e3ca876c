use leptos::prelude::*;

use super::data;
use crate::shared::charts::{ComposedChart, GroupedBarChart, LineChart, PieChart};
use crate::shared::components::status_badge::health_badge;
use crate::shared::components::{
    resolve_tab, KpiCardGrid, PageHeader, TabSpec, TabStrip, UseCaseSections,
};
use crate::shared::icons::icon;

const TABS: &[TabSpec] = &[
    TabSpec { key: "overview", label: "Overview", icon: "bar-chart" },
    TabSpec { key: "analytics", label: "Analytics Use Cases", icon: "brain" },
];

/// Saudi Arabian Railway Company dashboard.
#[component]
pub fn SarDashboard() -> impl IntoView {
    let active_tab = RwSignal::new("overview".to_string());

    view! {
        <div class="dashboard">
            <PageHeader
                icon_name="train"
                title="SAR (Saudi Arabian Railway Company)"
                subtitle="Railway network operations, passenger/freight services, and asset management"
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
                        {icon("activity")}
                        <h3 class="chart-card__title">"Train Performance Trends"</h3>
                    </div>
                    <ComposedChart
                        labels=data::PERFORMANCE_MONTHS
                        bars=data::PASSENGER_VOLUME_SERIES
                        line=data::ON_TIME_SERIES
                    />
                </div>

                <div class="chart-card">
                    <h3 class="chart-card__title">"Service Type Distribution"</h3>
                    <PieChart slices=data::SERVICE_TYPES />
                </div>
            </div>

            <div class="dashboard__chart-row">
                <div class="chart-card">
                    <div class="chart-card__header">
                        {icon("users")}
                        <h3 class="chart-card__title">"Daily Passenger Demand Forecast"</h3>
                    </div>
                    <LineChart labels=data::DEMAND_HOURS series=data::DEMAND_SERIES.to_vec() />
                </div>

                <div class="chart-card">
                    <div class="chart-card__header">
                        {icon("wrench")}
                        <h3 class="chart-card__title">"Maintenance Schedule Performance"</h3>
                    </div>
                    <GroupedBarChart
                        labels=data::MAINTENANCE_WEEKS
                        series=data::MAINTENANCE_SERIES.to_vec()
                    />
                </div>
            </div>

            <div class="chart-card">
                <h3 class="chart-card__title">"Route Performance Analysis"</h3>
                <div class="data-table-wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Route"</th>
                                <th>"Distance (km)"</th>
                                <th>"On-Time %"</th>
                                <th>"Avg Delay (min)"</th>
                                <th>"Passengers"</th>
                                <th>"Freight (tons)"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {data::ROUTE_PERFORMANCE.iter().map(|row| view! {
                                <tr>
                                    <td class="data-table__strong">{row.route}</td>
                                    <td>{row.distance_km}</td>
                                    <td>{health_badge(row.on_time)}</td>
                                    <td>{row.avg_delay_min}</td>
                                    <td>{row.passengers}</td>
                                    <td>{row.freight_tons}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>

            <div class="chart-card">
                <h3 class="chart-card__title">"Asset Health Monitoring"</h3>
                <div class="data-table-wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Category"</th>
                                <th>"Total"</th>
                                <th>"Operational"</th>
                                <th>"In Maintenance"</th>
                                <th>"Critical"</th>
                                <th>"Health"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {data::ASSET_HEALTH.iter().map(|row| view! {
                                <tr>
                                    <td class="data-table__strong">{row.category}</td>
                                    <td>{row.total}</td>
                                    <td>{row.operational}</td>
                                    <td>{row.maintenance}</td>
                                    <td>{row.critical}</td>
                                    <td>{health_badge(row.health)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
