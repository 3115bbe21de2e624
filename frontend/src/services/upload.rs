//! Image upload to the prediction service with gloo-net.

use artstyle::{ImageFile, Transport, UploadError, UploadResult};
use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData};

/// File picked in the `<input type="file">` element.
#[derive(Clone, Debug)]
pub struct BrowserFile {
    file: File,
}

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self { file }
    }

    pub fn as_file(&self) -> &File {
        &self.file
    }
}

#[async_trait(?Send)]
impl ImageFile for BrowserFile {
    fn name(&self) -> String {
        self.file.name()
    }

    fn mime_type(&self) -> String {
        self.file.type_()
    }

    async fn read_bytes(&self) -> UploadResult<Vec<u8>> {
        let buffer = JsFuture::from(self.file.array_buffer())
            .await
            .map_err(|e| UploadError::Read(format!("{:?}", e)))?;

        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}

/// Sends the selected file with `fetch`.
#[derive(Clone, Debug)]
pub struct FetchTransport {
    backend_url: String,
}

impl FetchTransport {
    pub fn new(backend_url: &str) -> Self {
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait(?Send)]
impl Transport<BrowserFile> for FetchTransport {
    async fn post_file(&self, path: &str, field: &str, file: &BrowserFile) -> UploadResult<Value> {
        // Créer FormData
        let form_data = FormData::new()
            .map_err(|e| UploadError::Transport(format!("Failed to create FormData: {:?}", e)))?;

        // Ajouter le fichier
        form_data
            .append_with_blob(field, file.as_file())
            .map_err(|e| UploadError::Transport(format!("Failed to append file: {:?}", e)))?;

        // Envoyer la requête
        let url = format!("{}{}", self.backend_url, path);
        let request = Request::post(&url)
            .body(form_data)
            .map_err(|e| UploadError::Transport(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        if !response.ok() {
            log::warn!("Prediction service answered {}", response.status());
        }

        // Parser la réponse JSON
        response
            .json::<Value>()
            .await
            .map_err(|e| UploadError::Decode(e.to_string()))
    }
}
