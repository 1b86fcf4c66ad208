//! Ask Panel Component
//!
//! Free-text question box with one-click preset questions.

use leptos::*;
use review_lens::view::{AskPhase, Event, PresetButton};

use crate::components::InlineLoading;
use crate::state::use_global_state;

/// Ask-your-data panel
#[component]
pub fn AskPanel() -> impl IntoView {
    let state = use_global_state();
    let panel = create_memo(move |_| state.view.with(|v| v.ask.clone()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.dispatch(Event::AskSubmitted);
    };

    view! {
        <div class="space-y-4">
            // Quick question presets
            <div class="flex flex-wrap gap-2">
                {move || {
                    panel.with(|p| p.presets.clone())
                        .into_iter()
                        .map(|preset| view! { <QuickQuestion preset=preset /> })
                        .collect_view()
                }}
            </div>

            <form on:submit=on_submit class="flex space-x-2">
                <input
                    type="text"
                    placeholder="Ask about the reviews..."
                    prop:value=move || panel.with(|p| p.question.clone())
                    on:input=move |ev| state.dispatch(Event::QuestionEdited(event_target_value(&ev)))
                    class="flex-1 bg-white dark:bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-300 dark:border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || !panel.with(|p| p.can_submit)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-400
                           text-white rounded-lg font-medium transition-colors flex items-center space-x-2"
                >
                    {move || panel.with(|p| p.phase == AskPhase::Asking).then(|| view! { <InlineLoading /> })}
                    <span>{move || panel.with(|p| p.submit_label)}</span>
                </button>
            </form>

            // Answer, error or hint
            {move || {
                let p = panel.get();
                if let Some(error) = p.error {
                    view! { <p class="text-red-500 text-sm">{error}</p> }.into_view()
                } else if let Some(answer) = p.answer {
                    view! {
                        <div class="bg-gray-100 dark:bg-gray-700 rounded-lg p-4">
                            <p class="leading-relaxed whitespace-pre-wrap">{answer}</p>
                        </div>
                    }.into_view()
                } else {
                    view! { <p class="text-gray-500 text-sm">{p.hint}</p> }.into_view()
                }
            }}
        </div>
    }
}

/// Quick question button
#[component]
fn QuickQuestion(preset: PresetButton) -> impl IntoView {
    let state = use_global_state();
    let index = preset.index;

    view! {
        <button
            type="button"
            disabled=!preset.enabled
            on:click=move |_| state.dispatch(Event::PresetChosen(index))
            class="px-3 py-1 bg-gray-100 dark:bg-gray-700 hover:bg-gray-200 dark:hover:bg-gray-600
                   disabled:opacity-50 rounded-full text-sm transition-colors"
        >
            {preset.text}
        </button>
    }
}
