//! Ask endpoint response body

use serde::{Deserialize, Serialize};

/// Body of a successful ask
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskReply {
    /// `None` when the backend left `answer` out or sent something other than a string
    pub answer: Option<String>,
}

impl AskReply {
    /// Read the `answer` field out of any JSON value
    pub fn from_value(value: &serde_json::Value) -> Self {
        Self {
            answer: value
                .get("answer")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ask_reply_is_lenient() {
        assert_eq!(
            AskReply::from_value(&json!({"answer": "Drivers are late"})).answer.as_deref(),
            Some("Drivers are late")
        );
        assert_eq!(AskReply::from_value(&json!({"answer": ""})).answer.as_deref(), Some(""));
        assert_eq!(AskReply::from_value(&json!({"answer": 42})).answer, None);
        assert_eq!(AskReply::from_value(&json!({})).answer, None);
        assert_eq!(AskReply::from_value(&json!(["answer"])).answer, None);
    }
}
