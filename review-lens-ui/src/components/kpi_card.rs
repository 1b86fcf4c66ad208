//! KPI Card Component
//!
//! The four summary tiles above the chart.

use leptos::*;
use review_lens::view::KpiCard as KpiModel;

use crate::state::use_global_state;

/// Row of KPI cards
#[component]
pub fn KpiRow() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            {move || {
                state.view.with(|v| v.kpis.clone())
                    .into_iter()
                    .map(|kpi| view! { <KpiCard kpi=kpi /> })
                    .collect_view()
            }}
        </div>
    }
}

/// Single KPI card
#[component]
pub fn KpiCard(kpi: KpiModel) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg p-4 border border-gray-200 dark:border-gray-700">
            <span class="text-gray-500 dark:text-gray-400 text-sm">{kpi.label}</span>
            <div class="text-3xl font-bold mt-2">{kpi.value}</div>
            <div class="text-xs text-gray-500 mt-2">{kpi.helper}</div>
        </div>
    }
}
