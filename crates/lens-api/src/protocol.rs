//! Wire types for the analysis service, plus the presentation math the
//! client derives from them.

use serde::{Deserialize, Serialize};

/// Successful `/analyze` response.  Immutable once received; the client
/// holds it until reset or replaced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// Risk score, 0–100.
    pub score: u8,
    /// Categorical label as reported by the service (e.g. LOW/MEDIUM/HIGH).
    /// The label set is open, so this stays a string.
    pub risk_level: String,
    /// Free-text explanation, displayed verbatim.
    pub explanation: String,
    /// Service confidence in [0.0, 1.0].
    pub confidence: f32,
}

impl AnalysisResult {
    /// Gauge sweep for the score dial: linear, 0 → 0°, 100 → 360°.
    pub fn gauge_angle_deg(&self) -> f64 {
        f64::from(self.score) / 100.0 * 360.0
    }

    /// Confidence as a rounded percentage (0.873 → 87).
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Style class for the risk label: `risk-<lowercased level>`.
    pub fn risk_class(&self) -> String {
        format!("risk-{}", self.risk_level.to_lowercase())
    }

    /// Human-readable share payload: title, score/risk line, explanation,
    /// and the service URL the result came from.
    pub fn share_text(&self, url: &str) -> String {
        format!(
            "Scam Detector Result\n\nScam risk: {}/100 ({})\n\n{}\n\n{}",
            self.score, self.risk_level, self.explanation, url
        )
    }
}

/// `/health` response body.  Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthReport {
    pub ollama_connected: bool,
}

/// Optional error body alongside a non-2xx `/analyze` status.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> AnalysisResult {
        AnalysisResult {
            score: 72,
            risk_level: "HIGH".to_string(),
            explanation: "Urgency cues and a payment request.".to_string(),
            confidence: 0.9,
        }
    }

    #[test]
    fn gauge_angle_is_linear_in_score() {
        let mut r = fixture();
        r.score = 0;
        assert_eq!(r.gauge_angle_deg(), 0.0);
        r.score = 50;
        assert_eq!(r.gauge_angle_deg(), 180.0);
        r.score = 100;
        assert_eq!(r.gauge_angle_deg(), 360.0);
    }

    #[test]
    fn confidence_percent_rounds() {
        let mut r = fixture();
        r.confidence = 0.873;
        assert_eq!(r.confidence_percent(), 87);
        r.confidence = 0.9;
        assert_eq!(r.confidence_percent(), 90);
        r.confidence = 0.005;
        assert_eq!(r.confidence_percent(), 1);
    }

    #[test]
    fn risk_class_lowercases_label() {
        assert_eq!(fixture().risk_class(), "risk-high");
        let mut r = fixture();
        r.risk_level = "Medium".to_string();
        assert_eq!(r.risk_class(), "risk-medium");
    }

    #[test]
    fn share_text_carries_score_risk_and_url() {
        let text = fixture().share_text("http://localhost:8000");
        assert!(text.contains("72/100 (HIGH)"));
        assert!(text.contains("Urgency cues"));
        assert!(text.ends_with("http://localhost:8000"));
    }

    #[test]
    fn analysis_result_decodes_service_json() {
        let json = r#"{"score":72,"risk_level":"HIGH","explanation":"...","confidence":0.9}"#;
        let r: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(r.score, 72);
        assert_eq!(r.risk_level, "HIGH");
        assert!((r.confidence - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn health_report_ignores_extra_fields() {
        let json = r#"{"status":"ok","ollama_connected":false,"model":"llava"}"#;
        let h: HealthReport = serde_json::from_str(json).unwrap();
        assert!(!h.ollama_connected);
    }

    #[test]
    fn error_body_detail_is_optional() {
        let b: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(b.detail.is_none());
        let b: ErrorBody = serde_json::from_str(r#"{"detail":"model unavailable"}"#).unwrap();
        assert_eq!(b.detail.as_deref(), Some("model unavailable"));
    }
}
