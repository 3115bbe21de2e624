//! Prediction service response types.
//!
//! The payload under `prediction` is opaque to the client: it is carried as a
//! [`serde_json::Value`] and only re-serialized into the result page URL.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{UploadError, UploadResult};

/// Body returned by `POST /predict`.
///
/// Every field is optional; missing and `null` fields both decode to `None`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PredictionResponse {
    /// Where the server stored the uploaded image (`/uploads/<name>`)
    #[serde(default)]
    pub image_url: Option<Value>,
    /// Model output, e.g. top styles with percentages
    #[serde(default)]
    pub prediction: Option<Value>,
    /// Error description sent with 4xx/5xx answers
    #[serde(default)]
    pub error: Option<Value>,
}

/// What the client should do with a decoded response.
#[derive(Clone, Debug, PartialEq)]
pub enum Prediction {
    /// Both required fields are present.
    Ready { image_url: String, prediction: Value },
    /// A required field is missing or empty.
    Incomplete { server_error: Option<String> },
}

impl PredictionResponse {
    /// Decode a JSON body.
    ///
    /// Any non-object body decodes to an empty response, except `null`,
    /// which cannot be inspected at all and is a decode failure.
    pub fn from_value(value: Value) -> UploadResult<Self> {
        match value {
            Value::Null => Err(UploadError::Decode("response body is null".to_string())),
            Value::Object(_) => {
                serde_json::from_value(value).map_err(|e| UploadError::Decode(e.to_string()))
            }
            _ => Ok(Self::default()),
        }
    }

    /// Check the required fields and extract them.
    pub fn into_prediction(self) -> Prediction {
        let server_error = self.error.as_ref().and_then(|e| e.as_str()).map(str::to_string);

        match (self.image_url, self.prediction) {
            (Some(image_url), Some(prediction)) if is_truthy(&image_url) && is_truthy(&prediction) => {
                Prediction::Ready {
                    image_url: display_string(&image_url),
                    prediction,
                }
            }
            _ => Prediction::Incomplete { server_error },
        }
    }
}

/// Presence test used for the required fields: `null`, `false`, zero,
/// and the empty string count as missing. Arrays and objects always count.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// Strings are taken raw; everything else in its JSON text form.
fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
