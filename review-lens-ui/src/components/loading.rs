//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Skeleton rows under a status line, shown while reviews load
#[component]
pub fn TableSkeleton(
    message: &'static str,
    #[prop(default = 5)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <p class="text-gray-500 text-center py-2">{message}</p>
            <div class="space-y-3 animate-pulse" aria-hidden="true">
                {(0..count).map(|_| view! {
                    <div class="bg-gray-200 dark:bg-gray-700 rounded h-10" />
                }).collect_view()}
            </div>
        </div>
    }
}
