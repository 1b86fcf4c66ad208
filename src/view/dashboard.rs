//! Derived Dashboard View
//!
//! `DashboardView` is a pure function of `DashboardState`: the KPI cards,
//! chart, aspect tiles, ask panel and review table exactly as they should be
//! shown. Both the web frontend and the terminal renderer draw from it.

use serde::Serialize;

use super::ask::{AskPhase, QUICK_QUESTIONS};
use super::state::{DashboardState, LoadState};
use crate::filter::{FilterCriteria, FilterOutcome, SentimentCounts};
use crate::model::{AspectKey, Sentiment};

/// Rendered in place of a metric that has no value
pub const PLACEHOLDER: &str = "—";

pub const EMPTY_TABLE_MESSAGE: &str = "No reviews found for the current filters.";
pub const LOADING_TABLE_MESSAGE: &str = "Loading reviews…";
pub const EMPTY_CHART_MESSAGE: &str = "No data available for the current filters.";
pub const ASK_HINT: &str = "Ask a question about recent reviews, or use a quick query above.";

/// Colour family for sentiment badges and bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

impl Tone {
    /// Unrecognized sentiments are styled as neutral
    pub fn of(sentiment: &Sentiment) -> Self {
        match sentiment {
            Sentiment::Positive => Tone::Positive,
            Sentiment::Negative => Tone::Negative,
            Sentiment::Neutral | Sentiment::Other(_) => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
    pub helper: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: usize,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartModel {
    pub title: String,
    pub bars: Vec<ChartBar>,
    /// Set when all three bars are zero
    pub empty_message: Option<&'static str>,
}

impl ChartModel {
    fn new(title: String, counts: SentimentCounts) -> Self {
        let bars = vec![
            ChartBar { label: "Positive", value: counts.positive, tone: Tone::Positive },
            ChartBar { label: "Neutral", value: counts.neutral, tone: Tone::Neutral },
            ChartBar { label: "Negative", value: counts.negative, tone: Tone::Negative },
        ];
        let empty_message = (counts.sum() == 0).then_some(EMPTY_CHART_MESSAGE);
        Self { title, bars, empty_message }
    }

    pub fn max_value(&self) -> usize {
        self.bars.iter().map(|b| b.value).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AspectTile {
    pub key: AspectKey,
    pub label: &'static str,
    pub mentions: usize,
    pub negative: usize,
    pub positive: usize,
    pub neutral: usize,
    /// Whether this aspect currently feeds the chart
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetButton {
    pub index: usize,
    pub text: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskPanel {
    pub question: String,
    pub phase: AskPhase,
    pub submit_label: &'static str,
    pub can_submit: bool,
    pub presets: Vec<PresetButton>,
    pub answer: Option<String>,
    pub error: Option<String>,
    /// Shown when there is neither an answer nor an error
    pub hint: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRow {
    pub id: String,
    pub source: String,
    pub text: String,
    pub sentiment: String,
    pub tone: Tone,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReviewTable {
    Loading { message: &'static str },
    Failed { message: String },
    Empty { message: &'static str },
    Rows { rows: Vec<ReviewRow> },
}

/// The whole screen, ready to draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub kpis: Vec<KpiCard>,
    pub chart: ChartModel,
    pub aspects: Vec<AspectTile>,
    pub ask: AskPanel,
    pub filters: FilterCriteria,
    pub table: ReviewTable,
}

impl DashboardView {
    pub fn from_state(state: &DashboardState) -> Self {
        let criteria = state.criteria();
        let outcome = state.filtered();

        Self {
            kpis: kpi_cards(&outcome, criteria),
            chart: chart(&outcome, criteria),
            aspects: aspect_tiles(&outcome, criteria),
            ask: ask_panel(state),
            filters: criteria.clone(),
            table: review_table(&outcome, state.load()),
        }
    }

    pub fn kpi(&self, id: &str) -> Option<&KpiCard> {
        self.kpis.iter().find(|k| k.id == id)
    }
}

fn kpi_cards(outcome: &FilterOutcome<'_>, criteria: &FilterCriteria) -> Vec<KpiCard> {
    let summary = &outcome.summary;
    let has_data = summary.total > 0;
    let worst = outcome.worst();

    vec![
        KpiCard {
            id: "total",
            label: "Total reviews",
            value: summary.total.to_string(),
            helper: if criteria.is_filtering() {
                "Within current filters"
            } else {
                "All reviews"
            }
            .to_string(),
        },
        KpiCard {
            id: "negative_share",
            label: "Negative share",
            value: summary
                .negative_share
                .map(|n| format!("{n}%"))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            helper: if has_data {
                "Share of reviews that are negative"
            } else {
                "No data"
            }
            .to_string(),
        },
        KpiCard {
            id: "net_sentiment",
            label: "Net sentiment",
            value: summary
                .net_sentiment
                .map(|n| n.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            helper: "Scale -100 (all negative) to +100 (all positive)".to_string(),
        },
        KpiCard {
            id: "top_pain_point",
            label: "Top pain point",
            value: worst
                .map(|a| a.key.label())
                .unwrap_or("None")
                .to_string(),
            helper: match worst {
                Some(a) => format!("{} negative mentions", a.negative),
                None => "No aspect stands out negatively".to_string(),
            },
        },
    ]
}

fn chart(outcome: &FilterOutcome<'_>, criteria: &FilterCriteria) -> ChartModel {
    let title = match criteria.focus.aspect() {
        Some(key) => format!("{} sentiment", key.label()),
        None => "Sentiment breakdown".to_string(),
    };
    ChartModel::new(title, outcome.chart_counts(criteria))
}

fn aspect_tiles(outcome: &FilterOutcome<'_>, criteria: &FilterCriteria) -> Vec<AspectTile> {
    outcome
        .aspects
        .iter()
        .map(|stats| AspectTile {
            key: stats.key,
            label: stats.key.label(),
            mentions: stats.total_mentioned,
            negative: stats.negative,
            positive: stats.positive,
            neutral: stats.neutral,
            selected: criteria.focus.aspect() == Some(stats.key),
        })
        .collect()
}

fn ask_panel(state: &DashboardState) -> AskPanel {
    let ask = state.ask();
    let busy = ask.asking;

    AskPanel {
        question: ask.question.clone(),
        phase: ask.phase(),
        submit_label: if busy { "Asking…" } else { "Ask" },
        can_submit: !busy && !ask.question.trim().is_empty(),
        presets: QUICK_QUESTIONS
            .into_iter()
            .enumerate()
            .map(|(index, text)| PresetButton {
                index,
                text,
                enabled: !busy,
            })
            .collect(),
        answer: ask.answer.clone(),
        error: ask.error.clone(),
        hint: (ask.answer.is_none() && ask.error.is_none()).then_some(ASK_HINT),
    }
}

fn review_table(outcome: &FilterOutcome<'_>, load: &LoadState) -> ReviewTable {
    match load {
        LoadState::Loading => ReviewTable::Loading {
            message: LOADING_TABLE_MESSAGE,
        },
        LoadState::Errored(message) => ReviewTable::Failed {
            message: message.clone(),
        },
        LoadState::Loaded if outcome.reviews.is_empty() => ReviewTable::Empty {
            message: EMPTY_TABLE_MESSAGE,
        },
        LoadState::Loaded => ReviewTable::Rows {
            rows: outcome
                .reviews
                .iter()
                .map(|r| ReviewRow {
                    id: r.id.0.clone(),
                    source: r.source.clone(),
                    text: r.original_complaint.clone(),
                    sentiment: r.overall_sentiment.to_string(),
                    tone: Tone::of(&r.overall_sentiment),
                    language: r.detected_language.clone(),
                })
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AspectSentiment, ReviewRecord};
    use crate::view::state::{Event, LOAD_ERROR_MESSAGE};
    use crate::filter::SentimentFilter;

    fn scenario() -> Vec<ReviewRecord> {
        let not_mentioned = |r: ReviewRecord| {
            AspectKey::ALL
                .into_iter()
                .fold(r, |r, key| r.aspect(key, AspectSentiment::NotMentioned))
        };
        vec![
            not_mentioned(ReviewRecord::new("1", Sentiment::Positive).source("Web")),
            not_mentioned(ReviewRecord::new("2", Sentiment::Negative).source("App"))
                .aspect(AspectKey::DriverBehavior, AspectSentiment::Negative),
            not_mentioned(ReviewRecord::new("3", Sentiment::Negative).source("App")),
        ]
    }

    fn view_after(events: Vec<Event>) -> DashboardView {
        DashboardState::new().transition_all(events).0.view()
    }

    #[test]
    fn test_kpis_for_scenario() {
        let view = view_after(vec![Event::ReviewsLoaded(scenario())]);

        assert_eq!(view.kpi("total").unwrap().value, "3");
        assert_eq!(view.kpi("total").unwrap().helper, "All reviews");
        assert_eq!(view.kpi("negative_share").unwrap().value, "67%");
        assert_eq!(view.kpi("net_sentiment").unwrap().value, "-33");

        let pain = view.kpi("top_pain_point").unwrap();
        assert_eq!(pain.value, "Driver behavior");
        assert_eq!(pain.helper, "1 negative mentions");
    }

    #[test]
    fn test_kpis_without_data_use_placeholders() {
        let view = view_after(vec![
            Event::ReviewsLoaded(scenario()),
            Event::SentimentSelected(SentimentFilter::Neutral),
        ]);

        assert_eq!(view.kpi("total").unwrap().value, "0");
        assert_eq!(view.kpi("total").unwrap().helper, "Within current filters");
        assert_eq!(view.kpi("negative_share").unwrap().value, PLACEHOLDER);
        assert_eq!(view.kpi("negative_share").unwrap().helper, "No data");
        assert_eq!(view.kpi("net_sentiment").unwrap().value, PLACEHOLDER);
        assert_eq!(view.kpi("top_pain_point").unwrap().value, "None");
        assert_eq!(
            view.table,
            ReviewTable::Empty { message: EMPTY_TABLE_MESSAGE }
        );
        assert_eq!(view.chart.empty_message, Some(EMPTY_CHART_MESSAGE));
    }

    #[test]
    fn test_chart_follows_focus_but_kpis_do_not() {
        let overall = view_after(vec![Event::ReviewsLoaded(scenario())]);
        assert_eq!(overall.chart.title, "Sentiment breakdown");
        assert_eq!(overall.chart.max_value(), 2);

        let focused = view_after(vec![
            Event::ReviewsLoaded(scenario()),
            Event::AspectToggled(AspectKey::DriverBehavior),
        ]);
        assert_eq!(focused.chart.title, "Driver behavior sentiment");
        assert_eq!(
            focused.chart.bars.iter().map(|b| b.value).collect::<Vec<_>>(),
            vec![0, 0, 1]
        );
        assert_eq!(focused.kpis, overall.kpis);
        assert_eq!(focused.table, overall.table);
        assert!(focused.aspects[2].selected);
        assert!(!focused.aspects[0].selected);

        let back = view_after(vec![
            Event::ReviewsLoaded(scenario()),
            Event::AspectToggled(AspectKey::DriverBehavior),
            Event::AspectToggled(AspectKey::DriverBehavior),
        ]);
        assert_eq!(back.chart, overall.chart);
    }

    #[test]
    fn test_table_states() {
        let loading = view_after(vec![]);
        assert_eq!(
            loading.table,
            ReviewTable::Loading { message: LOADING_TABLE_MESSAGE }
        );

        let failed = view_after(vec![Event::ReviewsFailed]);
        assert_eq!(
            failed.table,
            ReviewTable::Failed { message: LOAD_ERROR_MESSAGE.to_string() }
        );

        let loaded = view_after(vec![Event::ReviewsLoaded(scenario())]);
        let ReviewTable::Rows { rows } = loaded.table else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].sentiment, "Negative");
        assert_eq!(rows[1].tone, Tone::Negative);
        assert_eq!(rows[0].source, "Web");
    }

    #[test]
    fn test_ask_panel_while_busy() {
        let view = view_after(vec![Event::PresetChosen(0)]);
        assert_eq!(view.ask.submit_label, "Asking…");
        assert!(!view.ask.can_submit);
        assert!(view.ask.presets.iter().all(|p| !p.enabled));
        assert_eq!(view.ask.hint, Some(ASK_HINT));
        assert_eq!(view.ask.question, QUICK_QUESTIONS[0]);
    }

    #[test]
    fn test_ask_panel_idle() {
        let view = view_after(vec![Event::QuestionEdited("  ".into())]);
        assert_eq!(view.ask.submit_label, "Ask");
        assert!(!view.ask.can_submit);
        assert_eq!(view.ask.presets.len(), 5);
        assert!(view.ask.presets.iter().all(|p| p.enabled));
    }

    #[test]
    fn test_tone_of_unknown_sentiment_is_neutral() {
        assert_eq!(Tone::of(&Sentiment::Other("Mixed".into())), Tone::Neutral);
    }
}
