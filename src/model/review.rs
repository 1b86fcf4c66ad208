//! Review records as delivered by `GET /api/reviews/`

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use super::sentiment::{deserialize_aspect, AspectKey, AspectSentiment, Sentiment};

/// Opaque review identifier
///
/// Backends send strings or numbers; both are kept as text. A missing or
/// non-scalar id becomes the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ReviewId(pub String);

impl<'de> Deserialize<'de> for ReviewId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(ReviewId(raw.and_then(scalar_text).unwrap_or_default()))
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReviewId {
    fn from(s: &str) -> Self {
        ReviewId(s.to_string())
    }
}

/// A single customer review, pre-labeled by the backend
///
/// Never mutated after it is received. Decoding never rejects a record over
/// a field's type: text fields take any scalar, and anything else reads as
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(default)]
    pub id: ReviewId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub source: String,
    #[serde(default)]
    pub overall_sentiment: Sentiment,
    #[serde(default, deserialize_with = "lenient_text")]
    pub original_complaint: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub detected_language: String,
    /// Raw timestamp; parsed lazily and only when a date filter is active
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_ts: Option<String>,

    #[serde(default, deserialize_with = "deserialize_aspect")]
    pub timeliness: Option<AspectSentiment>,
    #[serde(default, deserialize_with = "deserialize_aspect")]
    pub order_completeness: Option<AspectSentiment>,
    #[serde(default, deserialize_with = "deserialize_aspect")]
    pub driver_behavior: Option<AspectSentiment>,
    #[serde(default, deserialize_with = "deserialize_aspect")]
    pub cleaning_quality: Option<AspectSentiment>,
}

/// Strings verbatim, numbers and booleans stringified, anything else `None`
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(scalar_text).unwrap_or_default())
}

/// Integral numbers are epoch milliseconds and are rewritten as RFC 3339;
/// other non-strings read as absent.
fn lenient_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
        _ => None,
    })
}

impl ReviewRecord {
    /// Create a review with empty text fields and no aspect values
    pub fn new(id: impl Into<String>, overall_sentiment: Sentiment) -> Self {
        Self {
            id: ReviewId(id.into()),
            source: String::new(),
            overall_sentiment,
            original_complaint: String::new(),
            detected_language: String::new(),
            created_ts: None,
            timeliness: None,
            order_completeness: None,
            driver_behavior: None,
            cleaning_quality: None,
        }
    }

    /// Builder method: set the origin label
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Builder method: set the review body
    pub fn complaint(mut self, text: impl Into<String>) -> Self {
        self.original_complaint = text.into();
        self
    }

    /// Builder method: set the detected language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.detected_language = language.into();
        self
    }

    /// Builder method: set the raw creation timestamp
    pub fn created(mut self, ts: impl Into<String>) -> Self {
        self.created_ts = Some(ts.into());
        self
    }

    /// Builder method: set one aspect sentiment
    pub fn aspect(mut self, key: AspectKey, value: AspectSentiment) -> Self {
        *self.aspect_slot(key) = Some(value);
        self
    }

    /// Aspect sentiment for `key`, if the backend sent one
    pub fn aspect_value(&self, key: AspectKey) -> Option<&AspectSentiment> {
        match key {
            AspectKey::Timeliness => self.timeliness.as_ref(),
            AspectKey::OrderCompleteness => self.order_completeness.as_ref(),
            AspectKey::DriverBehavior => self.driver_behavior.as_ref(),
            AspectKey::CleaningQuality => self.cleaning_quality.as_ref(),
        }
    }

    /// Whether the review addresses `key` at all
    pub fn mentions(&self, key: AspectKey) -> bool {
        self.aspect_value(key).is_some_and(AspectSentiment::is_mention)
    }

    fn aspect_slot(&mut self, key: AspectKey) -> &mut Option<AspectSentiment> {
        match key {
            AspectKey::Timeliness => &mut self.timeliness,
            AspectKey::OrderCompleteness => &mut self.order_completeness,
            AspectKey::DriverBehavior => &mut self.driver_behavior,
            AspectKey::CleaningQuality => &mut self.cleaning_quality,
        }
    }
}
