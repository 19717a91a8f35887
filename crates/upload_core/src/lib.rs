//! Upload state core for the NFT-creation flow: captures one user-selected
//! file, dispatches a single asynchronous "read file as embeddable data URL"
//! action, and exposes a preview model once the representation is available.
//!
//! Rendering and drag-and-drop capture mechanics live in the UI layer; this
//! crate owns the state and the dispatch discipline (single writer, read-only
//! snapshots elsewhere).

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tokio::sync::{broadcast, RwLock};
use tracing::debug;

pub mod ipfs;

pub use ipfs::NetworkConfig;

/// Upload cap enforced by the acceptance filter: 30 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 30 * 1024 * 1024;
/// A drop carries exactly one file.
pub const MAX_UPLOAD_FILES: usize = 1;

pub const PLACEHOLDER_TITLE: &str = "Click or drag file to this area to upload";
pub const PLACEHOLDER_SUBTITLE: &str = "Support for single file";

/// A file handed over by the drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DroppedFile {
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file: DroppedFile,
    pub object_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadState {
    pub selected_file: Option<SelectedFile>,
}

/// Acceptance filter for the drop target: exactly one file, image MIME type,
/// at most [`MAX_UPLOAD_BYTES`]. Rejected drops yield `None` with no further
/// effect.
pub fn accept_drop(mut files: Vec<DroppedFile>) -> Option<DroppedFile> {
    if files.len() != MAX_UPLOAD_FILES {
        return None;
    }
    let file = files.remove(0);
    if !file.is_image() || file.size_bytes() > MAX_UPLOAD_BYTES {
        return None;
    }
    Some(file)
}

/// Collaborator that converts a captured file into an embeddable
/// representation.
#[async_trait]
pub trait FileReader: Send + Sync {
    async fn read_as_data_url(&self, file: &DroppedFile) -> Result<String>;
}

pub struct MissingFileReader;

#[async_trait]
impl FileReader for MissingFileReader {
    async fn read_as_data_url(&self, file: &DroppedFile) -> Result<String> {
        Err(anyhow!("file reader unavailable for {}", file.name))
    }
}

/// In-memory conversion to an RFC 2397 data URL.
pub struct DataUrlReader;

#[async_trait]
impl FileReader for DataUrlReader {
    async fn read_as_data_url(&self, file: &DroppedFile) -> Result<String> {
        Ok(format!(
            "data:{};base64,{}",
            file.mime_type,
            STANDARD.encode(&file.bytes)
        ))
    }
}

#[derive(Debug, Clone)]
pub enum UploadEvent {
    FileSelected { ns: String, name: String },
    PreviewReady { ns: String, object_url: String },
    Error { ns: String, message: String },
}

/// Single-writer state container for one upload namespace.
pub struct UploadController {
    ns: String,
    reader: Arc<dyn FileReader>,
    state: RwLock<UploadState>,
    events: broadcast::Sender<UploadEvent>,
}

impl UploadController {
    pub fn new(ns: impl Into<String>, reader: Arc<dyn FileReader>) -> Arc<Self> {
        let (events, _) = broadcast::channel(64);
        Arc::new(Self {
            ns: ns.into(),
            reader,
            state: RwLock::new(UploadState::default()),
            events,
        })
    }

    pub fn ns(&self) -> &str {
        &self.ns
    }

    pub async fn state(&self) -> UploadState {
        self.state.read().await.clone()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<UploadEvent> {
        self.events.subscribe()
    }

    /// Handle one drop/selection. Files failing the acceptance filter are
    /// silently ignored; an accepted file replaces the current selection and
    /// dispatches exactly one read of its embeddable representation.
    pub async fn handle_drop(&self, files: Vec<DroppedFile>) {
        let Some(file) = accept_drop(files) else {
            debug!(ns = %self.ns, "drop rejected by upload filter");
            return;
        };

        let name = file.name.clone();
        {
            let mut state = self.state.write().await;
            state.selected_file = Some(SelectedFile {
                file: file.clone(),
                object_url: None,
            });
        }
        let _ = self.events.send(UploadEvent::FileSelected {
            ns: self.ns.clone(),
            name: name.clone(),
        });

        match self.reader.read_as_data_url(&file).await {
            Ok(object_url) => {
                {
                    let mut state = self.state.write().await;
                    match state.selected_file.as_mut() {
                        // a newer selection may have replaced this one
                        Some(selected) if selected.file == file => {
                            selected.object_url = Some(object_url.clone());
                        }
                        _ => return,
                    }
                }
                let _ = self.events.send(UploadEvent::PreviewReady {
                    ns: self.ns.clone(),
                    object_url,
                });
            }
            Err(err) => {
                let _ = self.events.send(UploadEvent::Error {
                    ns: self.ns.clone(),
                    message: err.to_string(),
                });
            }
        }
    }
}

/// What the upload pane should render for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Image { src: String },
    Placeholder { title: &'static str, subtitle: &'static str },
}

pub fn preview(state: &UploadState, network: &NetworkConfig) -> Preview {
    match state
        .selected_file
        .as_ref()
        .and_then(|selected| selected.object_url.as_deref())
    {
        Some(uri) => Preview::Image {
            src: ipfs::uri_to_gateway_url(network, uri),
        },
        None => Preview::Placeholder {
            title: PLACEHOLDER_TITLE,
            subtitle: PLACEHOLDER_SUBTITLE,
        },
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
