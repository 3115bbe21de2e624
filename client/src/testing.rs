//! Recording test doubles for the controller collaborators.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::controller::{ImageFile, Navigator, Notifier, PreviewSurface, Transport};
use crate::error::{UploadError, UploadResult};

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    PreviewShown(String),
    Posted {
        path: String,
        field: String,
        file_name: String,
        mime_type: String,
        size: usize,
    },
    Notified(String),
    Navigated(String),
}

/// Shared, ordered log of everything the controller did.
#[derive(Clone, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Recorder {
    pub fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn previews(&self) -> Vec<String> {
        self.collect(|e| match e {
            Event::PreviewShown(uri) => Some(uri.clone()),
            _ => None,
        })
    }

    pub fn notifications(&self) -> Vec<String> {
        self.collect(|e| match e {
            Event::Notified(message) => Some(message.clone()),
            _ => None,
        })
    }

    pub fn navigations(&self) -> Vec<String> {
        self.collect(|e| match e {
            Event::Navigated(location) => Some(location.clone()),
            _ => None,
        })
    }

    fn collect(&self, pick: impl Fn(&Event) -> Option<String>) -> Vec<String> {
        self.events.borrow().iter().filter_map(pick).collect()
    }
}

impl PreviewSurface for Recorder {
    fn show(&self, data_uri: &str) {
        self.record(Event::PreviewShown(data_uri.to_string()));
    }
}

impl Notifier for Recorder {
    fn notify(&self, message: &str) {
        self.record(Event::Notified(message.to_string()));
    }
}

impl Navigator for Recorder {
    fn navigate(&self, location: &str) {
        self.record(Event::Navigated(location.to_string()));
    }
}

/// In-memory selected file.
pub struct MemoryFile {
    name: String,
    mime_type: String,
    bytes: Option<Vec<u8>>,
}

impl MemoryFile {
    pub fn new(name: &str, mime_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            bytes: Some(bytes),
        }
    }

    /// Four bytes of PNG signature.
    pub fn png(name: &str) -> Self {
        Self::new(name, "image/png", b"\x89PNG".to_vec())
    }

    pub fn unreadable(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mime_type: "image/png".to_string(),
            bytes: None,
        }
    }
}

#[async_trait(?Send)]
impl ImageFile for MemoryFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    async fn read_bytes(&self) -> UploadResult<Vec<u8>> {
        self.bytes
            .clone()
            .ok_or_else(|| UploadError::Read(format!("{} was removed", self.name)))
    }
}

/// Scripted server answer.
#[derive(Clone, Debug)]
pub enum Reply {
    Json(Value),
    /// Body that is not JSON.
    Garbage(String),
    /// Request rejected before any answer.
    Reject(String),
}

pub struct MockTransport {
    recorder: Recorder,
    reply: Reply,
}

impl MockTransport {
    pub fn new(recorder: Recorder, reply: Reply) -> Self {
        Self { recorder, reply }
    }
}

#[async_trait(?Send)]
impl<F: ImageFile> Transport<F> for MockTransport {
    async fn post_file(&self, path: &str, field: &str, file: &F) -> UploadResult<Value> {
        let bytes = file.read_bytes().await?;

        self.recorder.record(Event::Posted {
            path: path.to_string(),
            field: field.to_string(),
            file_name: file.name(),
            mime_type: file.mime_type(),
            size: bytes.len(),
        });

        match &self.reply {
            Reply::Json(value) => Ok(value.clone()),
            Reply::Garbage(body) => {
                serde_json::from_str(body).map_err(|e| UploadError::Decode(e.to_string()))
            }
            Reply::Reject(reason) => Err(UploadError::Transport(reason.clone())),
        }
    }
}
