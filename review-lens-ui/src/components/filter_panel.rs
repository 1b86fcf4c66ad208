//! Filter Panel Component
//!
//! Text search, a date range and the sentiment chips.

use leptos::*;
use review_lens::filter::{format_date_input, parse_date_input, SentimentFilter};
use review_lens::view::Event;

use crate::state::use_global_state;

/// Filter controls
#[component]
pub fn FilterPanel() -> impl IntoView {
    let state = use_global_state();
    let filters = create_memo(move |_| state.view.with(|v| v.filters.clone()));

    view! {
        <div class="space-y-4">
            <input
                type="search"
                placeholder="Search reviews, sources, languages..."
                prop:value=move || filters.with(|f| f.search.clone())
                on:input=move |ev| state.dispatch(Event::SearchChanged(event_target_value(&ev)))
                class="w-full bg-white dark:bg-gray-700 rounded-lg px-4 py-2
                       border border-gray-300 dark:border-gray-600 focus:border-primary-500 focus:outline-none"
            />

            <div class="flex flex-wrap items-center gap-4">
                <label class="flex items-center space-x-2 text-sm">
                    <span>"From"</span>
                    <input
                        type="date"
                        prop:value=move || format_date_input(filters.with(|f| f.date_from))
                        on:change=move |ev| {
                            state.dispatch(Event::DateFromChanged(parse_date_input(&event_target_value(&ev))))
                        }
                        class="bg-white dark:bg-gray-700 rounded px-2 py-1 border border-gray-300 dark:border-gray-600"
                    />
                </label>
                <label class="flex items-center space-x-2 text-sm">
                    <span>"To"</span>
                    <input
                        type="date"
                        prop:value=move || format_date_input(filters.with(|f| f.date_to))
                        on:change=move |ev| {
                            state.dispatch(Event::DateToChanged(parse_date_input(&event_target_value(&ev))))
                        }
                        class="bg-white dark:bg-gray-700 rounded px-2 py-1 border border-gray-300 dark:border-gray-600"
                    />
                </label>
            </div>

            <div class="flex flex-wrap gap-2">
                {SentimentFilter::ALL
                    .into_iter()
                    .map(|sentiment| view! { <SentimentChip sentiment=sentiment /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Sentiment filter chip
#[component]
fn SentimentChip(sentiment: SentimentFilter) -> impl IntoView {
    let state = use_global_state();
    let is_active = create_memo(move |_| state.dashboard.with(|s| s.criteria().sentiment == sentiment));

    view! {
        <button
            on:click=move |_| state.dispatch(Event::SentimentSelected(sentiment))
            class=move || {
                let base = "px-4 py-1 rounded-full text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-200 dark:bg-gray-700 hover:bg-gray-300 dark:hover:bg-gray-600", base)
                }
            }
        >
            {sentiment.label()}
        </button>
    }
}
