use leptos::prelude::*;

use super::data;
use crate::shared::charts::{GroupedBarChart, LineChart, PieChart};
use crate::shared::components::{
    resolve_tab, KpiCardGrid, PageHeader, TabSpec, TabStrip, UseCaseSections,
};

const TABS: &[TabSpec] = &[
    TabSpec { key: "overview", label: "Overview", icon: "bar-chart" },
    TabSpec { key: "analytics", label: "Analytics Use Cases", icon: "brain" },
];

/// Ministry of Transport and Logistic Services dashboard.
#[component]
pub fn MtlsDashboard() -> impl IntoView {
    // Tab key local to this mounted instance; resets to Overview on remount.
    let active_tab = RwSignal::new("overview".to_string());

    view! {
        <div class="dashboard">
            <PageHeader
                icon_name="landmark"
                title="Ministry of Transport and Logistic Services"
                subtitle="Strategic oversight and national-level policy making dashboard"
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
                    <h3 class="chart-card__title">"Logistics Performance Index Trend"</h3>
                    <LineChart
                        labels=data::LPI_MONTHS
                        series=data::LPI_SERIES.to_vec()
                        y_min=3.0
                        y_max=4.0
                    />
                </div>

                <div class="chart-card">
                    <h3 class="chart-card__title">"Transport Modal Distribution"</h3>
                    <PieChart slices=data::MODAL_SPLIT />
                </div>
            </div>

            <div class="chart-card">
                <h3 class="chart-card__title">"National Transport Demand Forecasting"</h3>
                <GroupedBarChart labels=data::DEMAND_YEARS series=data::DEMAND_SERIES.to_vec() />
            </div>
        </div>
    }
}
