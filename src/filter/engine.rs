//! Filter Engine
//!
//! Pure functions over the in-memory review set. `apply` never fails: empty
//! input yields empty output and division-derived metrics become `None`.

use serde::Serialize;

use super::criteria::FilterCriteria;
use super::dates::{end_of_day, parse_timestamp, start_of_day};
use crate::model::{AspectKey, AspectSentiment, ReviewRecord, Sentiment};

/// Positive / neutral / negative triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn sum(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Overall-sentiment aggregates of a filtered set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SentimentSummary {
    pub total: usize,
    pub counts: SentimentCounts,
    /// Percentage of negative reviews, 0..=100; `None` when `total == 0`
    pub negative_share: Option<i64>,
    /// (positive - negative) as a percentage, -100..=100; `None` when `total == 0`
    pub net_sentiment: Option<i64>,
}

/// Mention counts for one aspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AspectStats {
    pub key: AspectKey,
    pub total_mentioned: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl AspectStats {
    fn empty(key: AspectKey) -> Self {
        Self {
            key,
            total_mentioned: 0,
            positive: 0,
            neutral: 0,
            negative: 0,
        }
    }

    pub fn counts(&self) -> SentimentCounts {
        SentimentCounts {
            positive: self.positive,
            neutral: self.neutral,
            negative: self.negative,
        }
    }
}

/// Result of filtering: the matching rows plus everything derived from them
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'a> {
    /// Matching reviews in input order
    pub reviews: Vec<&'a ReviewRecord>,
    pub summary: SentimentSummary,
    /// One entry per aspect, in `AspectKey::ALL` order
    pub aspects: [AspectStats; 4],
    /// Aspect with the strictly highest non-zero negative count
    pub worst_aspect: Option<AspectKey>,
}

impl FilterOutcome<'_> {
    pub fn aspect(&self, key: AspectKey) -> &AspectStats {
        // `aspects` is built from AspectKey::ALL, so the position always exists
        let index = AspectKey::ALL.iter().position(|k| *k == key).unwrap_or(0);
        &self.aspects[index]
    }

    pub fn worst(&self) -> Option<&AspectStats> {
        self.worst_aspect.map(|key| self.aspect(key))
    }

    /// Counts feeding the chart for the criteria's focused aspect
    pub fn chart_counts(&self, criteria: &FilterCriteria) -> SentimentCounts {
        match criteria.focus.aspect() {
            Some(key) => self.aspect(key).counts(),
            None => self.summary.counts,
        }
    }
}

/// Filter `reviews` by `criteria` and aggregate the result
pub fn apply<'a>(reviews: &'a [ReviewRecord], criteria: &FilterCriteria) -> FilterOutcome<'a> {
    let needle = criteria.search_needle();

    let filtered: Vec<&ReviewRecord> = reviews
        .iter()
        .filter(|r| matches_prepared(r, criteria, needle.as_deref()))
        .collect();

    let summary = summarize(&filtered);
    let aspects = AspectKey::ALL.map(|key| aspect_stats(&filtered, key));
    let worst_aspect = worst_aspect(&aspects);

    FilterOutcome {
        reviews: filtered,
        summary,
        aspects,
        worst_aspect,
    }
}

fn matches_prepared(review: &ReviewRecord, criteria: &FilterCriteria, needle: Option<&str>) -> bool {
    criteria.sentiment.matches(&review.overall_sentiment)
        && needle.map_or(true, |n| matches_search(review, n))
        && matches_dates(review, criteria)
}

/// `needle` must already be trimmed and lower-cased
fn matches_search(review: &ReviewRecord, needle: &str) -> bool {
    let haystack = format!(
        "{} {} {}",
        review.original_complaint, review.source, review.detected_language
    )
    .to_lowercase();
    haystack.contains(needle)
}

/// Fail-closed: with any bound set, a missing or unparsable timestamp excludes the review
fn matches_dates(review: &ReviewRecord, criteria: &FilterCriteria) -> bool {
    if !criteria.has_date_bounds() {
        return true;
    }

    let Some(created) = review.created_ts.as_deref().and_then(parse_timestamp) else {
        return false;
    };

    if let Some(from) = criteria.date_from {
        if created < start_of_day(from) {
            return false;
        }
    }
    if let Some(to) = criteria.date_to {
        if created > end_of_day(to) {
            return false;
        }
    }
    true
}

fn summarize(reviews: &[&ReviewRecord]) -> SentimentSummary {
    let mut counts = SentimentCounts::default();
    for review in reviews {
        match review.overall_sentiment {
            Sentiment::Positive => counts.positive += 1,
            Sentiment::Neutral => counts.neutral += 1,
            Sentiment::Negative => counts.negative += 1,
            Sentiment::Other(_) => {}
        }
    }

    let total = reviews.len();
    SentimentSummary {
        total,
        counts,
        negative_share: percent(counts.negative as i64, total),
        net_sentiment: percent(counts.positive as i64 - counts.negative as i64, total),
    }
}

fn aspect_stats(reviews: &[&ReviewRecord], key: AspectKey) -> AspectStats {
    let mut stats = AspectStats::empty(key);
    for value in reviews.iter().filter_map(|r| r.aspect_value(key)) {
        if !value.is_mention() {
            continue;
        }
        stats.total_mentioned += 1;
        match value {
            AspectSentiment::Positive => stats.positive += 1,
            AspectSentiment::Neutral => stats.neutral += 1,
            AspectSentiment::Negative => stats.negative += 1,
            AspectSentiment::NotMentioned | AspectSentiment::Other(_) => {}
        }
    }
    stats
}

fn worst_aspect(aspects: &[AspectStats]) -> Option<AspectKey> {
    aspects
        .iter()
        .filter(|a| a.negative > 0)
        .fold(None::<&AspectStats>, |worst, a| match worst {
            Some(w) if a.negative <= w.negative => Some(w),
            _ => Some(a),
        })
        .map(|a| a.key)
}

/// `round(100 * numerator / denominator)` with halves rounded up (toward
/// positive infinity), computed exactly in integers. `None` when the
/// denominator is zero.
pub fn percent(numerator: i64, denominator: usize) -> Option<i64> {
    if denominator == 0 {
        return None;
    }
    let den = denominator as i64;
    Some((200 * numerator + den).div_euclid(2 * den))
}
