use crate::error::UploadError;
use serde::{Deserialize, Deserializer, Serialize};

/// Success body of `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictResponse {
    pub prediction: String,
    #[serde(default, deserialize_with = "number_or_none")]
    pub confidence: Option<f32>,
}

/// Error body of `POST /predict`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

/// A validated classification label.
///
/// `confidence` is the model's probability of the positive label, whatever
/// label was returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub confidence: Option<f32>,
}

impl Prediction {
    pub fn is_positive(&self, positive_label: &str) -> bool {
        self.label == positive_label
    }

    /// Probability of the label actually returned.
    pub fn label_confidence(&self, positive_label: &str) -> Option<f32> {
        let p = self.confidence?.clamp(0.0, 1.0);
        Some(if self.is_positive(positive_label) { p } else { 1.0 - p })
    }
}

/// What came back from the wire: a status and the body, if it could be read.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Result<String, String>,
}

impl From<PredictResponse> for Prediction {
    fn from(response: PredictResponse) -> Self {
        Self {
            label: response.prediction,
            confidence: response.confidence,
        }
    }
}

// The server may send anything in `confidence`; it's informational only.
fn number_or_none<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().map(|v| v as f32))
}

/// Turns a settled HTTP exchange into a prediction or a typed failure.
pub fn interpret_response(status: u16, body: &str) -> Result<Prediction, UploadError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .filter(|text| !text.is_empty());
        return Err(UploadError::Server { status, message });
    }

    let parsed: PredictResponse = serde_json::from_str(body)
        .map_err(|e| UploadError::MalformedResponse(format!("Failed to parse response: {}", e)))?;

    if parsed.prediction.is_empty() {
        return Err(UploadError::MalformedResponse(
            "prediction field is empty".to_string(),
        ));
    }

    Ok(parsed.into())
}

/// Maps a finished request to its outcome.
///
/// `Err` means no reply arrived at all (connection failure or aborted by the
/// deadline). An error status whose body can't be read is still a server error.
pub fn interpret_exchange(reply: Result<Reply, String>) -> Result<Prediction, UploadError> {
    let reply = reply.map_err(UploadError::Transport)?;
    match reply.body {
        Ok(body) => interpret_response(reply.status, &body),
        Err(_) if !(200..300).contains(&reply.status) => interpret_response(reply.status, ""),
        Err(e) => Err(UploadError::Transport(format!("Failed to read response: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn success_with_confidence() {
        let prediction =
            interpret_response(200, r#"{"prediction":"Cancerous","confidence":0.75}"#).unwrap();
        assert_eq!(prediction.label, "Cancerous");
        assert_eq!(prediction.confidence, Some(0.75));
        assert!(prediction.is_positive("Cancerous"));
    }

    #[test]
    fn success_without_confidence() {
        let prediction = interpret_response(200, r#"{"prediction":"Benign"}"#).unwrap();
        assert_eq!(prediction.label, "Benign");
        assert_eq!(prediction.confidence, None);
        assert!(!prediction.is_positive("Cancerous"));
    }

    #[test]
    fn non_numeric_confidence_is_dropped() {
        let prediction =
            interpret_response(200, r#"{"prediction":"Benign","confidence":"high"}"#).unwrap();
        assert_eq!(prediction.confidence, None);
    }

    #[rstest]
    #[case::missing_field(r#"{"label":"Benign"}"#)]
    #[case::empty_label(r#"{"prediction":""}"#)]
    #[case::wrong_type(r#"{"prediction":1}"#)]
    #[case::not_json("<html>oops</html>")]
    #[case::empty_body("")]
    fn malformed_success_bodies(#[case] body: &str) {
        let err = interpret_response(200, body).unwrap_err();
        assert!(matches!(err, UploadError::MalformedResponse(_)));
        assert_eq!(err.to_string(), "Received invalid response from server");
    }

    #[rstest]
    #[case(400, r#"{"error":"bad image"}"#, "Server error: bad image")]
    #[case(500, r#"{"error":"Model not loaded"}"#, "Server error: Model not loaded")]
    #[case(500, r#"{}"#, "Server error: Unknown error")]
    #[case(502, "Bad Gateway", "Server error: Unknown error")]
    #[case(400, r#"{"error":""}"#, "Server error: Unknown error")]
    fn error_statuses(#[case] status: u16, #[case] body: &str, #[case] expected: &str) {
        let err = interpret_response(status, body).unwrap_err();
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn confidence_follows_the_returned_label() {
        let prediction =
            interpret_response(200, r#"{"prediction":"Non-Cancerous","confidence":0.02}"#)
                .unwrap();
        let shown = prediction.label_confidence("Cancerous").unwrap();
        assert!((shown - 0.98).abs() < 1e-6);

        let prediction =
            interpret_response(200, r#"{"prediction":"Cancerous","confidence":0.75}"#).unwrap();
        assert_eq!(prediction.label_confidence("Cancerous"), Some(0.75));
    }

    #[test]
    fn missing_confidence_stays_missing() {
        let prediction = interpret_response(200, r#"{"prediction":"Benign"}"#).unwrap();
        assert_eq!(prediction.label_confidence("Cancerous"), None);
    }

    fn reply(status: u16, body: Result<&str, &str>) -> Result<Reply, String> {
        Ok(Reply {
            status,
            body: body.map(str::to_string).map_err(str::to_string),
        })
    }

    #[rstest]
    #[case::aborted_by_deadline(Err("AbortError: The user aborted a request.".to_string()))]
    #[case::connection_refused(Err("TypeError: Failed to fetch".to_string()))]
    #[case::unreadable_success_body(reply(200, Err("body stream aborted")))]
    fn unanswered_requests_are_transport_failures(#[case] exchange: Result<Reply, String>) {
        let err = interpret_exchange(exchange).unwrap_err();
        assert!(matches!(err, UploadError::Transport(_)));
        assert_eq!(
            err.to_string(),
            "Unable to connect to the server. Please try again later."
        );
    }

    #[rstest]
    #[case(500, Err("body stream aborted"), "Server error: Unknown error")]
    #[case(400, Ok(r#"{"error":"bad image"}"#), "Server error: bad image")]
    fn error_statuses_stay_server_errors(
        #[case] status: u16,
        #[case] body: Result<&str, &str>,
        #[case] expected: &str,
    ) {
        let err = interpret_exchange(reply(status, body)).unwrap_err();
        assert!(matches!(err, UploadError::Server { .. }));
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn readable_success_reply_yields_prediction() {
        let prediction =
            interpret_exchange(reply(200, Ok(r#"{"prediction":"Benign"}"#))).unwrap();
        assert_eq!(prediction.label, "Benign");
    }

    #[test]
    fn error_status_wins_over_prediction_field() {
        let err = interpret_response(500, r#"{"prediction":"Benign"}"#).unwrap_err();
        assert_eq!(
            err,
            UploadError::Server {
                status: 500,
                message: None
            }
        );
    }
}
