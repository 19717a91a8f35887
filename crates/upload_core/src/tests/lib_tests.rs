use super::*;
use tokio::sync::Mutex;

struct RecordingReader {
    fail_with: Option<String>,
    object_url: String,
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingReader {
    fn ok(object_url: impl Into<String>) -> Self {
        Self {
            fail_with: None,
            object_url: object_url.into(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn failing(err: impl Into<String>) -> Self {
        Self {
            fail_with: Some(err.into()),
            object_url: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl FileReader for RecordingReader {
    async fn read_as_data_url(&self, file: &DroppedFile) -> Result<String> {
        self.calls.lock().await.push(file.name.clone());
        if let Some(err) = &self.fail_with {
            return Err(anyhow!(err.clone()));
        }
        Ok(self.object_url.clone())
    }
}

fn png_file(name: &str, len: usize) -> DroppedFile {
    DroppedFile {
        name: name.to_string(),
        mime_type: "image/png".to_string(),
        bytes: vec![0u8; len],
    }
}

fn test_network() -> NetworkConfig {
    NetworkConfig::new("sandbox", "https://ipfs.example.com".parse().unwrap())
}

#[tokio::test]
async fn accepted_image_dispatches_exactly_one_read() {
    let reader = RecordingReader::ok("ipfs://abc");
    let calls = Arc::clone(&reader.calls);
    let controller = UploadController::new("createNft", Arc::new(reader));

    controller
        .handle_drop(vec![png_file("art.png", 1024 * 1024)])
        .await;

    assert_eq!(*calls.lock().await, vec!["art.png".to_string()]);
    let state = controller.state().await;
    let selected = state.selected_file.expect("file selected");
    assert_eq!(selected.file.name, "art.png");
    assert_eq!(selected.object_url.as_deref(), Some("ipfs://abc"));
}

#[tokio::test]
async fn non_image_file_is_silently_ignored() {
    let reader = RecordingReader::ok("ipfs://abc");
    let calls = Arc::clone(&reader.calls);
    let controller = UploadController::new("createNft", Arc::new(reader));

    controller
        .handle_drop(vec![DroppedFile {
            name: "notes.txt".to_string(),
            mime_type: "text/plain".to_string(),
            bytes: vec![0u8; 1024],
        }])
        .await;

    assert!(calls.lock().await.is_empty());
    assert_eq!(controller.state().await, UploadState::default());
}

#[tokio::test]
async fn oversized_file_is_silently_ignored() {
    let reader = RecordingReader::ok("ipfs://abc");
    let calls = Arc::clone(&reader.calls);
    let controller = UploadController::new("createNft", Arc::new(reader));

    controller
        .handle_drop(vec![png_file("huge.png", MAX_UPLOAD_BYTES as usize + 1)])
        .await;

    assert!(calls.lock().await.is_empty());
    assert_eq!(controller.state().await, UploadState::default());
}

#[tokio::test]
async fn multi_file_drop_is_silently_ignored() {
    let reader = RecordingReader::ok("ipfs://abc");
    let calls = Arc::clone(&reader.calls);
    let controller = UploadController::new("createNft", Arc::new(reader));

    controller
        .handle_drop(vec![png_file("a.png", 16), png_file("b.png", 16)])
        .await;

    assert!(calls.lock().await.is_empty());
    assert_eq!(controller.state().await, UploadState::default());
}

#[tokio::test]
async fn new_selection_replaces_the_previous_one() {
    let reader = RecordingReader::ok("ipfs://abc");
    let controller = UploadController::new("createNft", Arc::new(reader));

    controller.handle_drop(vec![png_file("first.png", 16)]).await;
    controller.handle_drop(vec![png_file("second.png", 16)]).await;

    let state = controller.state().await;
    assert_eq!(state.selected_file.unwrap().file.name, "second.png");
}

#[tokio::test]
async fn preview_ready_event_carries_the_namespace() {
    let reader = RecordingReader::ok("ipfs://abc");
    let controller = UploadController::new("createNft", Arc::new(reader));
    let mut events = controller.subscribe_events();

    controller.handle_drop(vec![png_file("art.png", 16)]).await;

    match events.recv().await.unwrap() {
        UploadEvent::FileSelected { ns, name } => {
            assert_eq!(ns, "createNft");
            assert_eq!(name, "art.png");
        }
        other => panic!("unexpected event: {other:?}"),
    }
    match events.recv().await.unwrap() {
        UploadEvent::PreviewReady { ns, object_url } => {
            assert_eq!(ns, "createNft");
            assert_eq!(object_url, "ipfs://abc");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn reader_failure_becomes_an_error_event() {
    let reader = RecordingReader::failing("disk read failed");
    let controller = UploadController::new("createNft", Arc::new(reader));
    let mut events = controller.subscribe_events();

    controller.handle_drop(vec![png_file("art.png", 16)]).await;

    let mut saw_error = false;
    while let Ok(event) = events.try_recv() {
        if let UploadEvent::Error { message, .. } = event {
            assert!(message.contains("disk read failed"));
            saw_error = true;
        }
    }
    assert!(saw_error);

    let state = controller.state().await;
    assert_eq!(state.selected_file.unwrap().object_url, None);
}

#[tokio::test]
async fn data_url_reader_encodes_mime_and_payload() {
    let file = DroppedFile {
        name: "dot.png".to_string(),
        mime_type: "image/png".to_string(),
        bytes: vec![1, 2, 3],
    };
    let url = DataUrlReader.read_as_data_url(&file).await.unwrap();
    assert_eq!(url, "data:image/png;base64,AQID");
}

#[test]
fn preview_uses_the_gateway_transform() {
    let state = UploadState {
        selected_file: Some(SelectedFile {
            file: png_file("art.png", 16),
            object_url: Some("ipfs://abc".to_string()),
        }),
    };
    assert_eq!(
        preview(&state, &test_network()),
        Preview::Image {
            src: "https://ipfs.example.com/ipfs/abc".to_string()
        }
    );
}

#[test]
fn preview_without_selection_is_the_placeholder() {
    assert_eq!(
        preview(&UploadState::default(), &test_network()),
        Preview::Placeholder {
            title: PLACEHOLDER_TITLE,
            subtitle: PLACEHOLDER_SUBTITLE,
        }
    );
}

#[test]
fn non_ipfs_uris_pass_through_the_gateway_transform() {
    let network = test_network();
    for uri in ["https://example.com/a.png", "data:image/png;base64,AQID"] {
        assert_eq!(ipfs::uri_to_gateway_url(&network, uri), uri);
    }
}
