use leptos::prelude::*;

use super::data;
use crate::shared::charts::{
    ComposedChart, GroupedBarChart, PieChart, RadarChart, StackedAreaChart,
};
use crate::shared::components::status_badge::{health_badge, severity_badge};
use crate::shared::components::{
    resolve_tab, KpiCardGrid, PageHeader, TabSpec, TabStrip, UseCaseSections,
};
use crate::shared::icons::icon;

const TABS: &[TabSpec] = &[
    TabSpec { key: "overview", label: "Overview", icon: "bar-chart" },
    TabSpec { key: "analytics", label: "Analytics Use Cases", icon: "brain" },
];

/// Road General Authority dashboard.
#[component]
pub fn RgaDashboard() -> impl IntoView {
    let active_tab = RwSignal::new("overview".to_string());

    view! {
        <div class="dashboard">
            <PageHeader
                icon_name="road"
                title="RGA (Road General Authority)"
                subtitle="Road network condition, traffic flow optimization, and infrastructure management"
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
                    <h3 class="chart-card__title">"Road Condition Trends"</h3>
                    <StackedAreaChart
                        labels=data::CONDITION_MONTHS
                        series=data::ROAD_CONDITION_SERIES.to_vec()
                    />
                </div>

                <div class="chart-card">
                    <div class="chart-card__header">
                        {icon("target")}
                        <h3 class="chart-card__title">"Overall Performance Index"</h3>
                    </div>
                    <RadarChart points=data::PERFORMANCE_RADAR color="#005430" />
                </div>
            </div>

            <div class="dashboard__chart-row">
                <div class="chart-card">
                    <div class="chart-card__header">
                        {icon("activity")}
                        <h3 class="chart-card__title">"Daily Traffic Flow Analysis"</h3>
                    </div>
                    <ComposedChart
                        labels=data::FLOW_HOURS
                        bars=data::TRAFFIC_VOLUME_SERIES
                        line=data::TRAFFIC_SPEED_SERIES
                    />
                </div>

                <div class="chart-card">
                    <h3 class="chart-card__title">"Road Network Distribution"</h3>
                    <PieChart slices=data::ROAD_TYPES unit=" km" />
                </div>
            </div>

            <div class="chart-card">
                <div class="chart-card__header">
                    {icon("wrench")}
                    <h3 class="chart-card__title">"Road Maintenance Schedule Performance"</h3>
                </div>
                <GroupedBarChart
                    labels=data::MAINTENANCE_WEEKS
                    series=data::MAINTENANCE_SERIES.to_vec()
                />
            </div>

            <div class="chart-card">
                <div class="chart-card__header">
                    {icon("alert-triangle")}
                    <h3 class="chart-card__title">"Regional Road Safety Metrics"</h3>
                </div>
                <div class="data-table-wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Region"</th>
                                <th>"Accidents"</th>
                                <th>"Fatalities"</th>
                                <th>"Injuries"</th>
                                <th>"Severity"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {data::REGIONAL_SAFETY.iter().map(|row| view! {
                                <tr>
                                    <td class="data-table__strong">{row.region}</td>
                                    <td>{row.accidents}</td>
                                    <td>{row.fatalities}</td>
                                    <td>{row.injuries}</td>
                                    <td>{severity_badge(row.severity)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>

            <div class="dashboard__chart-row">
                <div class="chart-card">
                    <h3 class="chart-card__title">"Infrastructure Health Monitoring"</h3>
                    <div class="data-table-wrap">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Category"</th>
                                    <th>"Total (km)"</th>
                                    <th>"Excellent"</th>
                                    <th>"Good"</th>
                                    <th>"Fair"</th>
                                    <th>"Poor"</th>
                                    <th>"Health"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {data::INFRASTRUCTURE_HEALTH.iter().map(|row| view! {
                                    <tr>
                                        <td class="data-table__strong">{row.category}</td>
                                        <td>{row.total}</td>
                                        <td>{row.excellent}</td>
                                        <td>{row.good}</td>
                                        <td>{row.fair}</td>
                                        <td>{row.poor}</td>
                                        <td>{health_badge(row.health)}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>

                <div class="chart-card">
                    <div class="chart-card__header">
                        {icon("zap")}
                        <h3 class="chart-card__title">"Smart Traffic Systems Status"</h3>
                    </div>
                    <div class="data-table-wrap">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"System"</th>
                                    <th>"Installed"</th>
                                    <th>"Operational"</th>
                                    <th>"Maintenance"</th>
                                    <th>"Offline"</th>
                                    <th>"Efficiency"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {data::SMART_SYSTEMS.iter().map(|row| view! {
                                    <tr>
                                        <td class="data-table__strong">{row.system}</td>
                                        <td>{row.installed}</td>
                                        <td>{row.operational}</td>
                                        <td>{row.maintenance}</td>
                                        <td>{row.offline}</td>
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
