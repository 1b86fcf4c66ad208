//! Aspect Card Component
//!
//! One tile per feedback aspect. Clicking a tile focuses the chart on it;
//! clicking it again returns the chart to the overall breakdown.

use leptos::*;
use review_lens::view::{AspectTile, Event};

use crate::state::use_global_state;

/// Grid of the four aspect tiles
#[component]
pub fn AspectGrid() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            {move || {
                state.view.with(|v| v.aspects.clone())
                    .into_iter()
                    .map(|tile| view! { <AspectCard tile=tile /> })
                    .collect_view()
            }}
        </div>
    }
}

/// Single aspect tile
#[component]
pub fn AspectCard(tile: AspectTile) -> impl IntoView {
    let state = use_global_state();
    let key = tile.key;

    let class = if tile.selected {
        "rounded-lg p-4 text-left border-2 border-primary-500 bg-primary-50 dark:bg-gray-700"
    } else {
        "rounded-lg p-4 text-left border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 hover:border-gray-400"
    };

    view! {
        <button class=class on:click=move |_| state.dispatch(Event::AspectToggled(key))>
            <div class="font-semibold">{tile.label}</div>
            <div class="text-2xl font-bold mt-1">{tile.mentions}</div>
            <div class="text-xs text-gray-500">"mentions"</div>
            <div class="flex space-x-3 text-sm mt-2">
                <span class="text-red-500">{tile.negative}" neg"</span>
                <span class="text-green-500">{tile.positive}" pos"</span>
                <span class="text-gray-400">{tile.neutral}" neu"</span>
            </div>
        </button>
    }
}
