use leptos::prelude::*;

use super::data;
use crate::shared::charts::{GroupedBarChart, LineChart, PieChart};
use crate::shared::components::{
    resolve_tab, KpiCardGrid, PageHeader, TabSpec, TabStrip, UseCaseSections,
};
use crate::shared::icons::icon;

const TABS: &[TabSpec] = &[
    TabSpec { key: "overview", label: "Overview", icon: "bar-chart" },
    TabSpec { key: "analytics", label: "Analytics Use Cases", icon: "brain" },
];

/// MAWANI (Saudi Ports Authority) dashboard.
#[component]
pub fn MawaniDashboard() -> impl IntoView {
    let active_tab = RwSignal::new("overview".to_string());

    view! {
        <div class="dashboard">
            <PageHeader
                icon_name="ship"
                title="MAWANI (Saudi Ports Authority)"
                subtitle="Seaport efficiency, capacity, and operations management"
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
                        <h3 class="chart-card__title">"Port Performance Trends"</h3>
                    </div>
                    <LineChart
                        labels=data::PERFORMANCE_MONTHS
                        series=data::PORT_PERFORMANCE_SERIES.to_vec()
                    />
                </div>

                <div class="chart-card">
                    <h3 class="chart-card__title">"Cargo Type Distribution"</h3>
                    <PieChart slices=data::CARGO_TYPES />
                </div>
            </div>

            <div class="dashboard__chart-row">
                <div class="chart-card">
                    <div class="chart-card__header">
                        {icon("anchor")}
                        <h3 class="chart-card__title">"Weekly Vessel Schedule"</h3>
                    </div>
                    <GroupedBarChart
                        labels=data::SCHEDULE_DAYS
                        series=data::VESSEL_SCHEDULE_SERIES.to_vec()
                    />
                </div>

                <div class="chart-card">
                    <h3 class="chart-card__title">"Port Congestion Forecast"</h3>
                    <LineChart
                        labels=data::CONGESTION_HOURS
                        series=data::CONGESTION_SERIES.to_vec()
                    />
                </div>
            </div>

            <div class="chart-card">
                <h3 class="chart-card__title">"Smart Berth Allocation System"</h3>
                <div class="data-table-wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Berth"</th>
                                <th>"Vessel"</th>
                                <th>"ETA"</th>
                                <th>"Cargo"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {data::BERTH_ALLOCATIONS.iter().map(|row| view! {
                                <tr>
                                    <td class="data-table__strong">{row.berth}</td>
                                    <td>{row.vessel}</td>
                                    <td>{row.eta}</td>
                                    <td>{row.cargo}</td>
                                    <td>
                                        <span class=row.status.css_class()>{row.status.label()}</span>
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
