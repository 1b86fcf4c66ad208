//! Plain-text Dashboard Rendering
//!
//! Draws a `DashboardView` for a terminal: KPI cards, a horizontal bar chart,
//! aspect tiles, the ask panel and the review table.

use std::fmt::Write;

use crate::view::{AskPanel, AspectTile, ChartModel, DashboardView, KpiCard, ReviewTable};

/// Width of the longest chart bar, in cells
const BAR_WIDTH: usize = 40;

/// Text column width in the review table
const TEXT_WIDTH: usize = 60;

/// Render the whole dashboard
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();

    section(&mut out, "Overview");
    render_kpis(&mut out, &view.kpis);

    section(&mut out, "Sentiment Analysis");
    render_chart(&mut out, &view.chart);

    section(&mut out, "Aspect Breakdown");
    render_aspects(&mut out, &view.aspects);

    section(&mut out, "Review Details");
    render_table(&mut out, &view.table);

    out
}

/// Render only the ask panel (question, answer or error, hint)
pub fn render_ask(panel: &AskPanel) -> String {
    let mut out = String::new();

    if !panel.question.trim().is_empty() {
        let _ = writeln!(out, "Q: {}", panel.question.trim());
    }
    if let Some(error) = &panel.error {
        let _ = writeln!(out, "{}", error);
    }
    if let Some(answer) = &panel.answer {
        let _ = writeln!(out, "{}", answer);
    }
    if let Some(hint) = panel.hint {
        let _ = writeln!(out, "{}", hint);
        let _ = writeln!(out);
        for preset in &panel.presets {
            let _ = writeln!(out, "  [{}] {}", preset.index + 1, preset.text);
        }
    }

    out
}

fn section(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
}

fn render_kpis(out: &mut String, kpis: &[KpiCard]) {
    for kpi in kpis {
        let _ = writeln!(out, "{:<16} {:>16}  {}", kpi.label, kpi.value, kpi.helper);
    }
}

fn render_chart(out: &mut String, chart: &ChartModel) {
    let _ = writeln!(out, "{}", chart.title);

    if let Some(message) = chart.empty_message {
        let _ = writeln!(out, "  {}", message);
        return;
    }

    let max = chart.max_value().max(1);
    for bar in &chart.bars {
        let cells = bar.value * BAR_WIDTH / max;
        let _ = writeln!(
            out,
            "  {:<9} {:<width$} {}",
            bar.label,
            "█".repeat(cells),
            bar.value,
            width = BAR_WIDTH
        );
    }
}

fn render_aspects(out: &mut String, aspects: &[AspectTile]) {
    let _ = writeln!(
        out,
        "  {:<20} {:>8} {:>8} {:>8} {:>8}",
        "Aspect", "Mentions", "Negative", "Positive", "Neutral"
    );
    for tile in aspects {
        let marker = if tile.selected { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{} {:<20} {:>8} {:>8} {:>8} {:>8}",
            marker, tile.label, tile.mentions, tile.negative, tile.positive, tile.neutral
        );
    }
}

fn render_table(out: &mut String, table: &ReviewTable) {
    match table {
        ReviewTable::Loading { message } | ReviewTable::Empty { message } => {
            let _ = writeln!(out, "{}", message);
        }
        ReviewTable::Failed { message } => {
            let _ = writeln!(out, "{}", message);
        }
        ReviewTable::Rows { rows } => {
            let _ = writeln!(
                out,
                "{:<16} | {:<text$} | {:<9} | {}",
                "Source",
                "Text",
                "Sentiment",
                "Lang",
                text = TEXT_WIDTH
            );
            let _ = writeln!(out, "{}", "-".repeat(16 + TEXT_WIDTH + 9 + 16));
            for row in rows {
                let _ = writeln!(
                    out,
                    "{:<16} | {:<text$} | {:<9} | {}",
                    truncate(&row.source, 16),
                    truncate(&row.text, TEXT_WIDTH),
                    row.sentiment,
                    row.language,
                    text = TEXT_WIDTH
                );
            }
        }
    }
}

/// Cut `s` to at most `max` characters, marking the cut with `…`
fn truncate(s: &str, max: usize) -> String {
    let flat: String = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let mut cut: String = flat.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ReviewRecord, Sentiment};
    use crate::view::{DashboardState, Event, EMPTY_TABLE_MESSAGE, LOAD_ERROR_MESSAGE};

    fn loaded_view() -> DashboardView {
        DashboardState::new()
            .transition(Event::ReviewsLoaded(vec![
                ReviewRecord::new("1", Sentiment::Positive)
                    .source("Web")
                    .complaint("Fast and friendly")
                    .language("en"),
                ReviewRecord::new("2", Sentiment::Negative)
                    .source("App")
                    .complaint("Order arrived\ncold")
                    .language("ar"),
            ]))
            .0
            .view()
    }

    #[test]
    fn test_render_dashboard_sections() {
        let text = render_dashboard(&loaded_view());

        assert!(text.contains("Overview"));
        assert!(text.contains("Total reviews"));
        assert!(text.contains("50%"));
        assert!(text.contains("Sentiment breakdown"));
        assert!(text.contains("Driver behavior"));
        assert!(text.contains("Fast and friendly"));
        assert!(text.contains("Order arrived cold"));
    }

    #[test]
    fn test_render_empty_and_failed_tables() {
        let empty = DashboardState::new()
            .transition(Event::ReviewsLoaded(Vec::new()))
            .0
            .view();
        let text = render_dashboard(&empty);
        assert!(text.contains(EMPTY_TABLE_MESSAGE));
        assert!(text.contains("No data available for the current filters."));

        let failed = DashboardState::new().transition(Event::ReviewsFailed).0.view();
        assert!(render_dashboard(&failed).contains(LOAD_ERROR_MESSAGE));
    }

    #[test]
    fn test_render_ask_lists_presets_when_idle() {
        let text = render_ask(&loaded_view().ask);
        assert!(text.contains("[1] Why are customers unhappy with delivery times?"));
        assert!(text.contains("[5] Are there any recurring issues with drivers?"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("a  b\tc", 10), "a b c");
    }
}
