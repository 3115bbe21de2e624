//! Upload controller.
//!
//! Reacts to a file selection: renders a local preview and uploads the file
//! to the prediction endpoint, then either navigates to the result page or
//! notifies the user. The collaborators are injected so the same controller
//! drives the browser page and the native CLI.
//!
//! ```text
//!  selection ──┬──▶ read file ──▶ data URI ──▶ PreviewSurface
//!              │
//!              └──▶ Transport (POST /predict) ──┬──▶ Navigator   (/result?...)
//!                                               └──▶ Notifier    (alert)
//! ```

use async_trait::async_trait;
use serde_json::Value;

use crate::config::{Routes, PREDICTION_FAILED_MESSAGE, UPLOAD_ERROR_MESSAGE};
use crate::error::{UploadError, UploadResult};
use crate::models::{Prediction, PredictionResponse};
use crate::navigation::result_location;
use crate::preview::data_uri;

// =============================================================================
// Collaborators
// =============================================================================

/// A file picked by the user.
#[async_trait(?Send)]
pub trait ImageFile {
    fn name(&self) -> String;

    /// Declared media type, empty when unknown.
    fn mime_type(&self) -> String;

    async fn read_bytes(&self) -> UploadResult<Vec<u8>>;
}

/// Sends a file as a multipart form and decodes the JSON answer.
///
/// The HTTP status is not part of the contract: error answers still carry a
/// JSON body and are decoded like any other.
#[async_trait(?Send)]
pub trait Transport<F: ImageFile> {
    async fn post_file(&self, path: &str, field: &str, file: &F) -> UploadResult<Value>;
}

/// Image element showing the selected file.
pub trait PreviewSurface {
    /// Set the image source and make it visible.
    fn show(&self, data_uri: &str);
}

/// User-visible notifications.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Full navigation of the current page.
pub trait Navigator {
    fn navigate(&self, location: &str);
}

// =============================================================================
// Controller
// =============================================================================

/// Result of one upload.
#[derive(Debug)]
pub enum UploadOutcome {
    /// Navigated to the result page at this location.
    Redirected(String),
    /// The server answered without an image reference or prediction.
    PredictionFailed,
    /// The request or the decoding failed.
    Failed(UploadError),
}

impl UploadOutcome {
    pub fn is_redirect(&self) -> bool {
        matches!(self, UploadOutcome::Redirected(_))
    }
}

pub struct UploadController<T, P, N, V> {
    transport: T,
    preview: P,
    notifier: N,
    navigator: V,
    routes: Routes,
}

impl<T, P, N, V> UploadController<T, P, N, V>
where
    P: PreviewSurface,
    N: Notifier,
    V: Navigator,
{
    pub fn new(transport: T, preview: P, notifier: N, navigator: V) -> Self {
        Self {
            transport,
            preview,
            notifier,
            navigator,
            routes: Routes::default(),
        }
    }

    pub fn with_routes(mut self, routes: Routes) -> Self {
        self.routes = routes;
        self
    }

    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    /// Handle a file selection event.
    ///
    /// A cancelled picker (`None`) is ignored. Otherwise the preview and the
    /// upload run concurrently; the preview is polled first.
    pub async fn handle_selection<F>(&self, file: Option<F>) -> Option<UploadOutcome>
    where
        F: ImageFile,
        T: Transport<F>,
    {
        let Some(file) = file else {
            log::debug!("File selection cancelled");
            return None;
        };

        log::info!("📤 Selected {} ({})", file.name(), file.mime_type());

        let (_, outcome) = futures::join!(self.render_preview(&file), self.upload(&file));
        Some(outcome)
    }

    /// Read the file and show it on the preview surface.
    ///
    /// Returns `false` when the file could not be read; the preview is left
    /// as it was.
    pub async fn render_preview<F: ImageFile>(&self, file: &F) -> bool {
        match file.read_bytes().await {
            Ok(bytes) => {
                self.preview.show(&data_uri(&file.mime_type(), &bytes));
                true
            }
            Err(e) => {
                log::warn!("Preview unavailable for {}: {}", file.name(), e);
                false
            }
        }
    }

    /// Upload the file and act on the answer.
    pub async fn upload<F>(&self, file: &F) -> UploadOutcome
    where
        F: ImageFile,
        T: Transport<F>,
    {
        match self.request_prediction(file).await {
            Ok(Prediction::Ready { image_url, prediction }) => {
                match result_location(&self.routes.result, &image_url, &prediction) {
                    Ok(location) => {
                        log::info!("✅ Prediction received, opening {}", self.routes.result);
                        self.navigator.navigate(&location);
                        UploadOutcome::Redirected(location)
                    }
                    Err(e) => self.fail(e),
                }
            }
            Ok(Prediction::Incomplete { server_error }) => {
                if let Some(message) = server_error {
                    log::warn!("Prediction service error: {}", message);
                }
                self.notifier.notify(PREDICTION_FAILED_MESSAGE);
                UploadOutcome::PredictionFailed
            }
            Err(e) => self.fail(e),
        }
    }

    /// Navigate back to the home page.
    pub fn reset(&self) {
        self.navigator.navigate(&self.routes.home);
    }

    async fn request_prediction<F>(&self, file: &F) -> UploadResult<Prediction>
    where
        F: ImageFile,
        T: Transport<F>,
    {
        let body = self
            .transport
            .post_file(&self.routes.predict, &self.routes.file_field, file)
            .await?;

        Ok(PredictionResponse::from_value(body)?.into_prediction())
    }

    fn fail(&self, error: UploadError) -> UploadOutcome {
        log::error!("Error uploading file: {}", error);
        self.notifier.notify(UPLOAD_ERROR_MESSAGE);
        UploadOutcome::Failed(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Event, MemoryFile, MockTransport, Recorder, Reply};
    use futures::executor::block_on;
    use serde_json::json;

    type TestController = UploadController<MockTransport, Recorder, Recorder, Recorder>;

    fn controller(reply: Reply) -> (TestController, Recorder) {
        let recorder = Recorder::default();
        let controller = UploadController::new(
            MockTransport::new(recorder.clone(), reply),
            recorder.clone(),
            recorder.clone(),
            recorder.clone(),
        );
        (controller, recorder)
    }

    fn cat_reply() -> Reply {
        Reply::Json(json!({
            "image_url": "/static/x.png",
            "prediction": {"label": "cat", "score": 0.97}
        }))
    }

    #[test]
    fn test_successful_upload_redirects() {
        let (controller, recorder) = controller(cat_reply());

        let outcome = block_on(controller.handle_selection(Some(MemoryFile::png("x.png"))));

        let expected = "/result?image_url=%2Fstatic%2Fx.png&prediction=%7B%22label%22%3A%22cat%22%2C%22score%22%3A0.97%7D";
        assert!(matches!(outcome, Some(UploadOutcome::Redirected(ref l)) if l == expected));
        assert_eq!(recorder.navigations(), vec![expected.to_string()]);
        assert!(recorder.notifications().is_empty());
    }

    #[test]
    fn test_preview_shown_before_request() {
        let (controller, recorder) = controller(cat_reply());

        block_on(controller.handle_selection(Some(MemoryFile::png("x.png"))));

        let events = recorder.events();
        let preview = events
            .iter()
            .position(|e| matches!(e, Event::PreviewShown(_)))
            .expect("preview shown");
        let post = events
            .iter()
            .position(|e| matches!(e, Event::Posted { .. }))
            .expect("request sent");
        assert!(preview < post);
        assert_eq!(recorder.previews(), vec!["data:image/png;base64,iVBORw==".to_string()]);
    }

    #[test]
    fn test_cancelled_selection_does_nothing() {
        let (controller, recorder) = controller(cat_reply());

        let outcome = block_on(controller.handle_selection(None::<MemoryFile>));

        assert!(outcome.is_none());
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_missing_fields_notify_prediction_failed() {
        let (controller, recorder) = controller(Reply::Json(json!({})));

        let outcome = block_on(controller.handle_selection(Some(MemoryFile::png("x.png"))));

        assert!(matches!(outcome, Some(UploadOutcome::PredictionFailed)));
        assert_eq!(recorder.notifications(), vec![PREDICTION_FAILED_MESSAGE.to_string()]);
        assert!(recorder.navigations().is_empty());
    }

    #[test]
    fn test_server_error_body_notifies_prediction_failed() {
        let (controller, recorder) = controller(Reply::Json(json!({"error": "Model not loaded"})));

        let outcome = block_on(controller.upload(&MemoryFile::png("x.png")));

        assert!(matches!(outcome, UploadOutcome::PredictionFailed));
        assert_eq!(recorder.notifications(), vec![PREDICTION_FAILED_MESSAGE.to_string()]);
    }

    #[test]
    fn test_rejected_request_notifies_upload_error() {
        let (controller, recorder) = controller(Reply::Reject("connection refused".into()));

        let outcome = block_on(controller.handle_selection(Some(MemoryFile::png("x.png"))));

        assert!(matches!(outcome, Some(UploadOutcome::Failed(UploadError::Transport(_)))));
        assert_eq!(recorder.notifications(), vec![UPLOAD_ERROR_MESSAGE.to_string()]);
        assert!(recorder.navigations().is_empty());
    }

    #[test]
    fn test_undecodable_body_notifies_upload_error() {
        let (controller, recorder) = controller(Reply::Garbage("<html>502</html>".into()));

        let outcome = block_on(controller.upload(&MemoryFile::png("x.png")));

        assert!(matches!(outcome, UploadOutcome::Failed(UploadError::Decode(_))));
        assert_eq!(recorder.notifications(), vec![UPLOAD_ERROR_MESSAGE.to_string()]);
    }

    #[test]
    fn test_null_body_notifies_upload_error() {
        let (controller, recorder) = controller(Reply::Json(Value::Null));

        let outcome = block_on(controller.upload(&MemoryFile::png("x.png")));

        assert!(matches!(outcome, UploadOutcome::Failed(_)));
        assert_eq!(recorder.notifications(), vec![UPLOAD_ERROR_MESSAGE.to_string()]);
    }

    #[test]
    fn test_file_sent_under_file_field() {
        let (controller, recorder) = controller(cat_reply());
        let file = MemoryFile::new("scan.tiff", "image/tiff", vec![0u8; 4096]);

        block_on(controller.upload(&file));

        let posted: Vec<_> = recorder
            .events()
            .into_iter()
            .filter(|e| matches!(e, Event::Posted { .. }))
            .collect();
        assert_eq!(
            posted,
            vec![Event::Posted {
                path: "/predict".into(),
                field: "file".into(),
                file_name: "scan.tiff".into(),
                mime_type: "image/tiff".into(),
                size: 4096,
            }]
        );
    }

    #[test]
    fn test_unreadable_file_still_uploads() {
        let (controller, recorder) = controller(cat_reply());

        let outcome = block_on(controller.handle_selection(Some(MemoryFile::unreadable("gone.png"))));

        assert!(recorder.previews().is_empty());
        assert!(matches!(outcome, Some(UploadOutcome::Failed(UploadError::Read(_)))));
        assert_eq!(recorder.notifications(), vec![UPLOAD_ERROR_MESSAGE.to_string()]);
    }

    #[test]
    fn test_reselection_replaces_preview() {
        let (controller, recorder) = controller(Reply::Json(json!({})));

        block_on(controller.handle_selection(Some(MemoryFile::new("a.png", "image/png", b"a".to_vec()))));
        block_on(controller.handle_selection(Some(MemoryFile::new("b.png", "image/png", b"b".to_vec()))));

        let previews = recorder.previews();
        assert_eq!(previews.len(), 2);
        assert_eq!(previews.last().unwrap(), "data:image/png;base64,Yg==");
    }

    #[test]
    fn test_reset_navigates_home() {
        let (controller, recorder) = controller(cat_reply());

        block_on(controller.handle_selection(Some(MemoryFile::png("x.png"))));
        controller.reset();

        assert_eq!(recorder.navigations().last().unwrap(), "/");
    }

    #[test]
    fn test_custom_routes() {
        let (controller, recorder) = controller(cat_reply());
        let controller = controller.with_routes(Routes {
            predict: "/api/predict".into(),
            result: "/api/result".into(),
            home: "/app".into(),
            file_field: "image".into(),
        });

        let outcome = block_on(controller.upload(&MemoryFile::png("x.png")));
        controller.reset();

        assert!(matches!(outcome, UploadOutcome::Redirected(ref l) if l.starts_with("/api/result?")));
        assert!(recorder
            .events()
            .iter()
            .any(|e| matches!(e, Event::Posted { path, field, .. } if path == "/api/predict" && field == "image")));
        assert_eq!(recorder.navigations().last().unwrap(), "/app");
    }
}
