use serde::Serialize;
use serde_json::Value;

/// Body sent to both `/api/predict` and the model server.
#[derive(Serialize, Debug)]
pub struct ReviewRequest<'a> {
    pub review: &'a str,
}

/// The model server's answer as relayed to the client.
///
/// Both fields are copied untouched from the upstream JSON, including values
/// outside the known labels or the `[0, 1]` range. A field the model server
/// did not send is left out of the relayed body.
#[derive(Serialize, Debug, Default, PartialEq)]
pub struct PredictionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Value>,
}

impl From<&Value> for PredictionResult {
    fn from(body: &Value) -> Self {
        PredictionResult {
            sentiment: body.get("sentiment").cloned(),
            confidence: body.get("confidence").cloned(),
        }
    }
}

/// Typed view of a prediction used for rendering.
///
/// Built from whatever the proxy relayed, so it never fails: a non-string
/// sentiment keeps its JSON text and a non-numeric confidence is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub sentiment: String,
    pub confidence: Option<f64>,
}

impl From<&Value> for Prediction {
    fn from(body: &Value) -> Self {
        let sentiment = match body.get("sentiment") {
            Some(Value::String(label)) => label.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        Prediction {
            sentiment,
            confidence: body.get("confidence").and_then(Value::as_f64),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Prediction {
    /// Anything that is not positive or negative is displayed as neutral.
    pub fn sentiment_kind(&self) -> Sentiment {
        match self.sentiment.as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}
