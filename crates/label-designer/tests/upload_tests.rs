mod common;

use common::png_file;
use label_designer::*;

#[test]
fn test_upload_kind_from_extension() {
    assert_eq!(UploadKind::from_file_name("a.png"), Some(UploadKind::Png));
    assert_eq!(UploadKind::from_file_name("a.JPG"), Some(UploadKind::Jpeg));
    assert_eq!(UploadKind::from_file_name("a.jpeg"), Some(UploadKind::Jpeg));
    assert_eq!(UploadKind::from_file_name("scan.Pdf"), Some(UploadKind::Pdf));
    assert_eq!(UploadKind::from_file_name("a.gif"), None);
    assert_eq!(UploadKind::from_file_name("png"), None);

    assert_eq!(UploadKind::Png.mime_type(), "image/png");
    assert_eq!(UploadKind::Jpeg.mime_type(), "image/jpeg");
    assert_eq!(UploadKind::Pdf.mime_type(), "application/pdf");
}

#[test]
fn test_unsupported_file_is_rejected() {
    let result = QueuedFile::new("notes.txt", b"hello".to_vec());
    match result {
        Err(DesignerError::UnsupportedFile(name)) => assert_eq!(name, "notes.txt"),
        other => panic!("Expected UnsupportedFile error, got {other:?}"),
    }
}

#[test]
fn test_queue_holds_one_file() {
    let mut queue = UploadQueue::new();
    assert!(queue.is_empty());

    assert_eq!(queue.add(png_file("first.png")), None);
    let evicted = queue.add(png_file("second.png")).unwrap();

    assert_eq!(evicted.name, "first.png");
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.file().unwrap().name, "second.png");
    assert_eq!(queue.state(), Some(FileState::Queued));
}

#[test]
fn test_file_can_be_resent_after_requeue() {
    let mut queue = UploadQueue::new();
    queue.add(png_file("logo.png"));

    let (upload, _) = queue.begin_upload().unwrap();
    assert_eq!(Some(upload), queue.id());
    assert_eq!(queue.state(), Some(FileState::Uploading));
    assert!(queue.begin_upload().is_none());

    assert!(queue.requeue(upload));
    let (_, file) = queue.begin_upload().unwrap();
    assert_eq!(file.name, "logo.png");
}

#[test]
fn test_requeue_ignores_replaced_file() {
    let mut queue = UploadQueue::new();
    queue.add(png_file("first.png"));
    let (first, _) = queue.begin_upload().unwrap();

    queue.add(png_file("second.png"));
    let (second, _) = queue.begin_upload().unwrap();
    assert_ne!(first, second);

    assert!(!queue.requeue(first));
    assert_eq!(queue.state(), Some(FileState::Uploading));
    assert!(queue.requeue(second));
    assert_eq!(queue.state(), Some(FileState::Queued));
}

#[test]
fn test_remove_empties_queue() {
    let mut queue = UploadQueue::new();
    queue.add(png_file("logo.png"));

    assert_eq!(queue.remove().unwrap().name, "logo.png");
    assert!(queue.is_empty());
    assert!(queue.begin_upload().is_none());

    // Requeue on an empty slot is a no-op
    assert!(!queue.requeue(UploadId(1)));
    assert!(queue.is_empty());
}

#[tokio::test]
async fn test_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();

    let path = dir.path().join("label.pdf");
    tokio::fs::write(&path, b"%PDF-1.4").await.unwrap();
    let file = QueuedFile::load(&path).await.unwrap();
    assert_eq!(file.name, "label.pdf");
    assert_eq!(file.kind, UploadKind::Pdf);
    assert_eq!(file.bytes, b"%PDF-1.4");

    let path = dir.path().join("label.bmp");
    tokio::fs::write(&path, b"BM").await.unwrap();
    assert!(matches!(
        QueuedFile::load(&path).await,
        Err(DesignerError::UnsupportedFile(_))
    ));
}
