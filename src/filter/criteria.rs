//! Filter criteria

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::{AspectKey, Sentiment};

/// Overall-sentiment selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SentimentFilter {
    #[default]
    All,
    Positive,
    Neutral,
    Negative,
}

impl SentimentFilter {
    /// Chip order in the filter panel
    pub const ALL: [SentimentFilter; 4] = [
        SentimentFilter::All,
        SentimentFilter::Positive,
        SentimentFilter::Neutral,
        SentimentFilter::Negative,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SentimentFilter::All => "All",
            SentimentFilter::Positive => "Positive",
            SentimentFilter::Neutral => "Neutral",
            SentimentFilter::Negative => "Negative",
        }
    }

    /// Exact match against the overall sentiment; `All` matches everything
    pub fn matches(&self, sentiment: &Sentiment) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Positive => *sentiment == Sentiment::Positive,
            SentimentFilter::Neutral => *sentiment == Sentiment::Neutral,
            SentimentFilter::Negative => *sentiment == Sentiment::Negative,
        }
    }
}

impl fmt::Display for SentimentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sentiment filter '{0}' (expected all, positive, neutral or negative)")]
pub struct ParseSentimentFilterError(pub String);

impl FromStr for SentimentFilter {
    type Err = ParseSentimentFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(SentimentFilter::All),
            "positive" => Ok(SentimentFilter::Positive),
            "neutral" => Ok(SentimentFilter::Neutral),
            "negative" => Ok(SentimentFilter::Negative),
            _ => Err(ParseSentimentFilterError(s.to_string())),
        }
    }
}

/// Which aggregate feeds the sentiment chart
///
/// Only affects the chart; never the rows or the KPI cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusedAspect {
    #[default]
    Overall,
    Aspect(AspectKey),
}

impl FocusedAspect {
    /// Clicking the focused aspect again returns to the overall aggregate
    pub fn toggled(self, key: AspectKey) -> Self {
        match self {
            FocusedAspect::Aspect(current) if current == key => FocusedAspect::Overall,
            _ => FocusedAspect::Aspect(key),
        }
    }

    pub fn aspect(&self) -> Option<AspectKey> {
        match self {
            FocusedAspect::Overall => None,
            FocusedAspect::Aspect(key) => Some(*key),
        }
    }
}

/// Current filter state of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub sentiment: SentimentFilter,
    /// Raw search text as typed; trimmed when applied
    pub search: String,
    /// Inclusive from start of day
    pub date_from: Option<NaiveDate>,
    /// Inclusive through the end of day
    pub date_to: Option<NaiveDate>,
    pub focus: FocusedAspect,
}

impl FilterCriteria {
    /// Builder method: set the sentiment selector
    pub fn sentiment(mut self, sentiment: SentimentFilter) -> Self {
        self.sentiment = sentiment;
        self
    }

    /// Builder method: set the search text
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Builder method: set both date bounds
    pub fn dates(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    /// Builder method: set the charted aggregate
    pub fn focus(mut self, focus: FocusedAspect) -> Self {
        self.focus = focus;
        self
    }

    /// Search text as applied: trimmed and lower-cased, `None` when blank
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    pub fn has_date_bounds(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some()
    }

    /// Whether any row-affecting filter is active (focus does not count)
    pub fn is_filtering(&self) -> bool {
        self.sentiment != SentimentFilter::All
            || self.search_needle().is_some()
            || self.has_date_bounds()
    }
}
