//! Dashboard Page
//!
//! KPI summary, sentiment chart, aspect breakdown, ask panel, filters and
//! the review table.

use leptos::*;

use crate::components::{AskPanel, AspectGrid, FilterPanel, KpiRow, ReviewTable, SentimentChart};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Customer Reviews"</h1>
                <p class="text-gray-500 dark:text-gray-400 mt-1">"Sentiment across sources, languages and service aspects"</p>
            </div>

            <section>
                <KpiRow />
            </section>

            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-white dark:bg-gray-800 rounded-xl p-6">
                    <SentimentChart />
                </section>

                <section class="bg-white dark:bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Ask the Reviews"</h2>
                    <AskPanel />
                </section>
            </div>

            <section>
                <h2 class="text-lg font-semibold mb-4">"Aspects"</h2>
                <AspectGrid />
            </section>

            <section class="bg-white dark:bg-gray-800 rounded-xl p-6 space-y-6">
                <h2 class="text-xl font-semibold">"Review Details"</h2>
                <FilterPanel />
                <ReviewTable />
            </section>
        </div>
    }
}
