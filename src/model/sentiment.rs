//! Sentiment values and aspect keys

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Overall sentiment of a review
///
/// Matching is exact and case-sensitive: `"positive"` is `Other("positive")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    /// Any value the backend sent that is not one of the above
    Other(String),
}

impl Sentiment {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Positive" => Sentiment::Positive,
            "Neutral" => Sentiment::Neutral,
            "Negative" => Sentiment::Negative,
            other => Sentiment::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
            Sentiment::Other(raw) => raw,
        }
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Sentiment::Other(String::new())
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Sentiment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Sentiment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(raw
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .map(Sentiment::parse)
            .unwrap_or_default())
    }
}

/// Sentiment of a single aspect within a review
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AspectSentiment {
    Positive,
    Neutral,
    Negative,
    /// The review does not talk about this aspect
    NotMentioned,
    Other(String),
}

impl AspectSentiment {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Positive" => AspectSentiment::Positive,
            "Neutral" => AspectSentiment::Neutral,
            "Negative" => AspectSentiment::Negative,
            "NotMentioned" => AspectSentiment::NotMentioned,
            other => AspectSentiment::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AspectSentiment::Positive => "Positive",
            AspectSentiment::Neutral => "Neutral",
            AspectSentiment::Negative => "Negative",
            AspectSentiment::NotMentioned => "NotMentioned",
            AspectSentiment::Other(raw) => raw,
        }
    }

    /// Whether this value counts as a mention of the aspect.
    ///
    /// Unrecognized values still count as mentions; they just never land in
    /// the positive/neutral/negative buckets.
    pub fn is_mention(&self) -> bool {
        !matches!(self, AspectSentiment::NotMentioned)
    }
}

impl fmt::Display for AspectSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AspectSentiment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AspectSentiment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(AspectSentiment::parse(&raw))
    }
}

/// Missing, `null` and empty-string aspect values all mean "no value"
pub(crate) fn deserialize_aspect<'de, D>(deserializer: D) -> Result<Option<AspectSentiment>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
        .map(AspectSentiment::parse))
}

/// One of the four fixed feedback dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectKey {
    Timeliness,
    OrderCompleteness,
    DriverBehavior,
    CleaningQuality,
}

impl AspectKey {
    /// Fixed enumeration order; ties in "worst aspect" resolve to the earlier key
    pub const ALL: [AspectKey; 4] = [
        AspectKey::Timeliness,
        AspectKey::OrderCompleteness,
        AspectKey::DriverBehavior,
        AspectKey::CleaningQuality,
    ];

    /// Field name in the backend payload
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectKey::Timeliness => "timeliness",
            AspectKey::OrderCompleteness => "order_completeness",
            AspectKey::DriverBehavior => "driver_behavior",
            AspectKey::CleaningQuality => "cleaning_quality",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            AspectKey::Timeliness => "Timeliness",
            AspectKey::OrderCompleteness => "Order completeness",
            AspectKey::DriverBehavior => "Driver behavior",
            AspectKey::CleaningQuality => "Cleaning quality",
        }
    }
}

impl fmt::Display for AspectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown aspect '{0}' (expected timeliness, order_completeness, driver_behavior or cleaning_quality)")]
pub struct ParseAspectError(pub String);

impl FromStr for AspectKey {
    type Err = ParseAspectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        AspectKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| ParseAspectError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_parse_is_case_sensitive() {
        assert_eq!(Sentiment::parse("Positive"), Sentiment::Positive);
        assert_eq!(
            Sentiment::parse("positive"),
            Sentiment::Other("positive".to_string())
        );
    }

    #[test]
    fn test_sentiment_null_deserializes_to_other() {
        let s: Sentiment = serde_json::from_str("null").unwrap();
        assert_eq!(s, Sentiment::Other(String::new()));
    }

    #[test]
    fn test_unknown_aspect_value_is_a_mention() {
        assert!(AspectSentiment::parse("Mixed").is_mention());
        assert!(!AspectSentiment::NotMentioned.is_mention());
    }

    #[test]
    fn test_aspect_key_from_str() {
        assert_eq!("timeliness".parse::<AspectKey>().unwrap(), AspectKey::Timeliness);
        assert_eq!(
            "driver-behavior".parse::<AspectKey>().unwrap(),
            AspectKey::DriverBehavior
        );
        assert_eq!(
            "Order Completeness".parse::<AspectKey>().unwrap(),
            AspectKey::OrderCompleteness
        );
        assert!("speed".parse::<AspectKey>().is_err());
    }

    #[test]
    fn test_aspect_key_serializes_as_field_name() {
        let json = serde_json::to_string(&AspectKey::CleaningQuality).unwrap();
        assert_eq!(json, "\"cleaning_quality\"");
    }
}
