//! Sentiment Chart Component
//!
//! Bar chart of the active positive/neutral/negative triple, drawn on an
//! HTML5 canvas.

use leptos::*;
use review_lens::view::{ChartModel, Tone};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::use_global_state;

fn tone_color(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "#4CAF50",
        Tone::Neutral => "#9ca3af",
        Tone::Negative => "#F44336",
    }
}

/// Sentiment bar chart component
#[component]
pub fn SentimentChart() -> impl IntoView {
    let state = use_global_state();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let chart = create_memo(move |_| state.view.with(|v| v.chart.clone()));

    // Redraw whenever the chart model changes
    create_effect(move |_| {
        let model = chart.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &model);
        }
    });

    view! {
        <div class="relative">
            <h3 class="text-lg font-semibold mb-3">{move || chart.with(|c| c.title.clone())}</h3>
            <canvas
                node_ref=canvas_ref
                width="600"
                height="300"
                class="w-full h-64 rounded-lg"
            />
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, chart: &ChartModel) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 40.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.clear_rect(0.0, 0.0, width, height);

    if let Some(message) = chart.empty_message {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text(message, margin_left, height / 2.0);
        return;
    }

    let max = chart.max_value().max(1) as f64;

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&"#374151".into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 4.0) * max;
        ctx.set_fill_style(&"#9ca3af".into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let slot = chart_width / chart.bars.len().max(1) as f64;
    let bar_width = slot * 0.6;

    for (idx, bar) in chart.bars.iter().enumerate() {
        let bar_height = bar.value as f64 / max * chart_height;
        let x = margin_left + idx as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&tone_color(bar.tone).into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        ctx.set_fill_style(&"#9ca3af".into());
        let _ = ctx.fill_text(bar.label, x, height - 20.0);
        let _ = ctx.fill_text(&bar.value.to_string(), x + bar_width / 2.0 - 4.0, y - 6.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_colors_are_distinct() {
        let colors = [Tone::Positive, Tone::Neutral, Tone::Negative].map(tone_color);
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_eq!(tone_color(Tone::Negative), "#F44336");
    }
}
