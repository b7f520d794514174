use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::error;
use url::Url;

use crate::prediction::{Prediction, ReviewRequest, Sentiment};

/// The SentiHotel page, served at `/`.
pub const INDEX_HTML: &str = include_str!("../assets/index.html");

pub const PREDICT_PATH: &str = "/api/predict";

/// Client side state of the review form.
///
/// Mirrors the script embedded in the page: a submit with blank input is
/// ignored, a failed request leaves the last prediction on display.
#[derive(Debug, Default)]
pub struct ReviewForm {
    input: String,
    prediction: Option<Prediction>,
    busy: bool,
}

impl ReviewForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        self.prediction.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether the analyze control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.busy && !self.input.trim().is_empty()
    }

    /// Starts a request and returns the review to send, or `None` if the
    /// input is blank.
    pub fn submit(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        self.busy = true;
        Some(self.input.clone())
    }

    pub fn complete(&mut self, outcome: Result<Prediction>) {
        self.busy = false;
        match outcome {
            Ok(prediction) => self.prediction = Some(prediction),
            Err(err) => error!("Prediction error: {:#}", err),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConfidenceBar {
    confidence: f64,
}

impl ConfidenceBar {
    pub fn new(confidence: f64) -> Self {
        ConfidenceBar { confidence }
    }

    pub fn percent(&self) -> f64 {
        self.confidence * 100.0
    }

    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percent())
    }

    /// Number of filled cells in a bar `width` cells wide.
    pub fn filled_cells(&self, width: usize) -> usize {
        let filled = (self.confidence * width as f64).round();
        filled.clamp(0.0, width as f64) as usize
    }

    pub fn render(&self, width: usize) -> String {
        let filled = self.filled_cells(width);
        format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
    }
}

pub const BAR_WIDTH: usize = 30;

pub fn render_prediction(prediction: &Prediction) -> String {
    let marker = match prediction.sentiment_kind() {
        Sentiment::Positive => "▲",
        Sentiment::Negative => "▼",
        Sentiment::Neutral => "★",
    };
    let confidence = match prediction.confidence {
        Some(confidence) => {
            let bar = ConfidenceBar::new(confidence);
            format!("{}\n{}", bar.percent_label(), bar.render(BAR_WIDTH))
        }
        None => "n/a".to_string(),
    };
    format!(
        "Sentiment:  {} {}\nConfidence: {}",
        marker, prediction.sentiment, confidence
    )
}

/// Sends a review to a running SentiHotel proxy.
pub async fn request_prediction(
    client: &reqwest::Client,
    base_url: &Url,
    review: &str,
) -> Result<Prediction> {
    let url = base_url.join(PREDICT_PATH)?;
    let response = client
        .post(url)
        .json(&ReviewRequest { review })
        .send()
        .await
        .context("Failed to reach SentiHotel")?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("SentiHotel responded with status {}: {}", status, body);
    }

    let body = response
        .json::<Value>()
        .await
        .context("Prediction body is not JSON")?;
    Ok(Prediction::from(&body))
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    fn positive(confidence: f64) -> Prediction {
        Prediction {
            sentiment: "positive".into(),
            confidence: Some(confidence),
        }
    }

    #[test]
    fn test_blank_input_is_not_submitted() {
        let mut form = ReviewForm::new();
        assert_eq!(form.submit(), None);

        form.set_input("   \n\t ");
        assert!(!form.can_submit());
        assert_eq!(form.submit(), None);
        assert!(!form.is_busy());
    }

    #[test]
    fn test_submit_sets_busy_until_complete() {
        let mut form = ReviewForm::new();
        form.set_input("Lovely breakfast");

        assert_eq!(form.submit().as_deref(), Some("Lovely breakfast"));
        assert!(form.is_busy());
        assert!(!form.can_submit());

        form.complete(Ok(positive(0.8)));
        assert!(!form.is_busy());
        assert_eq!(form.prediction(), Some(&positive(0.8)));
    }

    #[test]
    fn test_failure_keeps_previous_prediction() {
        let mut form = ReviewForm::new();
        form.set_input("Great view");
        form.submit();
        form.complete(Ok(positive(0.7)));

        form.set_input("Noisy corridor");
        form.submit();
        form.complete(Err(anyhow!("connection refused")));

        assert!(!form.is_busy());
        assert_eq!(form.prediction(), Some(&positive(0.7)));
        assert_eq!(form.input(), "Noisy corridor");
    }

    #[test]
    fn test_failure_without_previous_prediction_shows_nothing() {
        let mut form = ReviewForm::new();
        form.set_input("Great view");
        form.submit();
        form.complete(Err(anyhow!("status 500")));

        assert!(form.prediction().is_none());
    }

    #[test]
    fn test_confidence_bar() {
        let bar = ConfidenceBar::new(0.93);
        assert_eq!(bar.percent_label(), "93.0%");
        assert_eq!(bar.filled_cells(100), 93);
        assert_eq!(bar.filled_cells(10), 9);

        assert_eq!(ConfidenceBar::new(0.0).render(4), "[░░░░]");
        assert_eq!(ConfidenceBar::new(1.0).render(4), "[████]");
        assert_eq!(ConfidenceBar::new(1.7).filled_cells(4), 4);
        assert_eq!(ConfidenceBar::new(-0.2).filled_cells(4), 0);
    }

    #[test]
    fn test_render_prediction() {
        let rendered = render_prediction(&positive(0.93));
        assert!(rendered.contains("▲ positive"));
        assert!(rendered.contains("93.0%"));

        let rendered = render_prediction(&Prediction {
            sentiment: "negative".into(),
            confidence: Some(0.615),
        });
        assert!(rendered.contains("▼ negative"));
    }

    #[test]
    fn test_render_prediction_without_confidence() {
        let rendered = render_prediction(&Prediction {
            sentiment: "positive".into(),
            confidence: None,
        });
        assert!(rendered.contains("Confidence: n/a"));
        assert!(!rendered.contains('['));
    }

    #[test]
    fn test_page_has_form_and_about_section() {
        assert!(INDEX_HTML.contains("SentiHotel"));
        assert!(INDEX_HTML.contains(PREDICT_PATH));
        assert!(INDEX_HTML.contains("About Our Model"));
    }

    #[test]
    fn test_page_only_matches_own_marker_keys() {
        assert!(INDEX_HTML.contains("Object.hasOwn(markers, label)"));
        assert!(!INDEX_HTML.contains("label in markers"));
    }
}
