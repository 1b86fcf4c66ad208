//! Theme Toggle Component
//!
//! Flips the `dark` class on the document root. Not persisted.

use leptos::*;

/// Toggle `dark` on `<html>`; returns whether it is now set
fn toggle_dark_class() -> Option<bool> {
    let root = web_sys::window()?.document()?.document_element()?;
    root.class_list().toggle("dark").ok()
}

fn has_dark_class() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| root.class_list().contains("dark"))
        .unwrap_or(false)
}

/// Light/dark mode button
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (dark, set_dark) = create_signal(has_dark_class());

    let on_click = move |_| {
        if let Some(now_dark) = toggle_dark_class() {
            set_dark.set(now_dark);
        }
    };

    view! {
        <button
            on:click=on_click
            class="px-3 py-2 rounded-lg text-sm bg-gray-100 dark:bg-gray-700 hover:bg-gray-200 dark:hover:bg-gray-600 transition-colors"
        >
            {move || if dark.get() { "Light mode" } else { "Dark mode" }}
        </button>
    }
}
