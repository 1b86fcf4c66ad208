//! Review Table Component
//!
//! Scrollable table of the filtered reviews, or a message in its place.

use leptos::*;
use review_lens::view::{ReviewRow, ReviewTable as TableModel, Tone};

use crate::components::TableSkeleton;
use crate::state::use_global_state;

fn badge_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200",
        Tone::Neutral => "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-200",
        Tone::Negative => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200",
    }
}

/// Review details table
#[component]
pub fn ReviewTable() -> impl IntoView {
    let state = use_global_state();
    let table = create_memo(move |_| state.view.with(|v| v.table.clone()));

    view! {
        <div class="max-h-[32rem] overflow-y-auto">
            {move || match table.get() {
                TableModel::Loading { message } => view! { <TableSkeleton message=message /> }.into_view(),
                TableModel::Failed { message } => view! {
                    <p class="text-red-500 py-6 text-center">{message}</p>
                }.into_view(),
                TableModel::Empty { message } => view! {
                    <Table>
                        <tr>
                            <td colspan="4" class="text-gray-500 py-6 text-center">{message}</td>
                        </tr>
                    </Table>
                }.into_view(),
                TableModel::Rows { rows } => view! {
                    <Table>
                        {rows.into_iter().map(|row| view! { <Row row=row /> }).collect_view()}
                    </Table>
                }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Table(children: Children) -> impl IntoView {
    view! {
        <table class="w-full text-sm text-left">
            <thead class="sticky top-0 bg-gray-100 dark:bg-gray-800 text-gray-600 dark:text-gray-300">
                <tr>
                    <th class="px-3 py-2">"Source"</th>
                    <th class="px-3 py-2">"Text"</th>
                    <th class="px-3 py-2">"Sentiment"</th>
                    <th class="px-3 py-2">"Lang"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                {children()}
            </tbody>
        </table>
    }
}

#[component]
fn Row(row: ReviewRow) -> impl IntoView {
    view! {
        <tr>
            <td class="px-3 py-2 whitespace-nowrap">{row.source}</td>
            <td class="px-3 py-2">{row.text}</td>
            <td class="px-3 py-2">
                <span class=format!("px-2 py-0.5 rounded-full text-xs {}", badge_class(row.tone))>
                    {row.sentiment}
                </span>
            </td>
            <td class="px-3 py-2 uppercase text-gray-500">{row.language}</td>
        </tr>
    }
}
