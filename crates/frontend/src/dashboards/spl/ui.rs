use leptos::prelude::*;

use super::data;
use crate::shared::charts::{ComposedChart, LineChart, PieChart};
use crate::shared::components::status_badge::health_badge;
use crate::shared::components::{
    resolve_tab, KpiCardGrid, PageHeader, TabSpec, TabStrip, UseCaseSections,
};
use crate::shared::icons::icon;

const TABS: &[TabSpec] = &[
    TabSpec { key: "overview", label: "Overview", icon: "bar-chart" },
    TabSpec { key: "analytics", label: "Analytics Use Cases", icon: "brain" },
];

/// Saudi Post (SPL) dashboard.
#[component]
pub fn SplDashboard() -> impl IntoView {
    let active_tab = RwSignal::new("overview".to_string());

    view! {
        <div class="dashboard">
            <PageHeader
                icon_name="package"
                title="SPL (Saudi Post)"
                subtitle="Parcel processing, logistics efficiency, and last-mile delivery optimization"
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
                        <h3 class="chart-card__title">"Delivery Performance Trends"</h3>
                    </div>
                    <ComposedChart
                        labels=data::DELIVERY_MONTHS
                        bars=data::VOLUME_SERIES
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
                    <h3 class="chart-card__title">"E-commerce Fulfillment Analytics"</h3>
                    <LineChart labels=data::ECOMMERCE_DAYS series=data::ECOMMERCE_SERIES.to_vec() />
                </div>

                <div class="chart-card">
                    <div class="chart-card__header">
                        {icon("users")}
                        <h3 class="chart-card__title">"Customer Satisfaction Trends"</h3>
                    </div>
                    <LineChart
                        labels=data::SATISFACTION_HOURS
                        series=data::SATISFACTION_SERIES.to_vec()
                        y_min=3.5
                        y_max=5.0
                    />
                </div>
            </div>

            <div class="chart-card">
                <h3 class="chart-card__title">"Last-Mile Delivery Performance by Zone"</h3>
                <div class="data-table-wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Zone"</th>
                                <th>"Avg Attempts"</th>
                                <th>"First-Attempt Success"</th>
                                <th>"Cost (SAR)"</th>
                                <th>"Avg Time (min)"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {data::LAST_MILE_ZONES.iter().map(|row| view! {
                                <tr>
                                    <td class="data-table__strong">{row.zone}</td>
                                    <td>{format!("{:.1}", row.attempts)}</td>
                                    <td>{health_badge(row.success)}</td>
                                    <td>{format!("{:.1}", row.cost_sar)}</td>
                                    <td>{row.time_min}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>

            <div class="dashboard__chart-row">
                <div class="chart-card">
                    <h3 class="chart-card__title">"Network Performance Monitoring"</h3>
                    <div class="data-table-wrap">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Facility"</th>
                                    <th>"Capacity"</th>
                                    <th>"Utilization"</th>
                                    <th>"Throughput"</th>
                                    <th>"Efficiency"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {data::NETWORK_FACILITIES.iter().map(|row| view! {
                                    <tr>
                                        <td class="data-table__strong">{row.facility}</td>
                                        <td>{row.capacity}</td>
                                        <td>{format!("{}%", row.utilization)}</td>
                                        <td>{row.throughput}</td>
                                        <td>{health_badge(row.efficiency)}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>

                <div class="chart-card">
                    <h3 class="chart-card__title">"Operational Assets Status"</h3>
                    <div class="data-table-wrap">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Asset"</th>
                                    <th>"Total"</th>
                                    <th>"Operational"</th>
                                    <th>"Maintenance"</th>
                                    <th>"Efficiency"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {data::OPERATIONAL_ASSETS.iter().map(|row| view! {
                                    <tr>
                                        <td class="data-table__strong">{row.asset}</td>
                                        <td>{row.total}</td>
                                        <td>{row.operational}</td>
                                        <td>{row.maintenance}</td>
                                        <td>{health_badge(row.efficiency)}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}
