//! Result page locations.

use serde_json::Value;

use crate::error::UploadResult;

/// Build `<result_path>?image_url=...&prediction=...`.
///
/// The prediction is serialized to compact JSON and both parameters are
/// form-urlencoded the same way `URLSearchParams` does it.
pub fn result_location(result_path: &str, image_url: &str, prediction: &Value) -> UploadResult<String> {
    let prediction = serde_json::to_string(prediction)?;

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("image_url", image_url)
        .append_pair("prediction", &prediction)
        .finish();

    Ok(format!("{}?{}", result_path, query))
}
