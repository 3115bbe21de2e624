//! Multipart upload over HTTP with reqwest.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::controller::{ImageFile, Transport};
use crate::error::UploadResult;

/// Posts files to the prediction service.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl<F: ImageFile> Transport<F> for HttpTransport {
    async fn post_file(&self, path: &str, field: &str, file: &F) -> UploadResult<Value> {
        let bytes = file.read_bytes().await?;
        let size = bytes.len();

        let mut part = Part::bytes(bytes).file_name(file.name());
        let mime_type = file.mime_type();
        if !mime_type.is_empty() {
            part = part.mime_str(&mime_type)?;
        }
        let form = Form::new().part(field.to_string(), part);

        let url = self.config.resolve(path);
        log::debug!("POST {} ({} bytes)", url, size);

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Prediction service answered {}", status);
        }

        Ok(response.json::<Value>().await?)
    }
}
