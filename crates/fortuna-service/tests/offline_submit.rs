//! End-to-end submit flow in offline demo mode: no credential, no network,
//! real store on disk.

use fortuna_client::{ClientConfig, GeminiClient};
use fortuna_service::{ReadingService, ViewState};
use fortuna_store::ReadingStore;

fn offline_service(dir: &std::path::Path) -> ReadingService<GeminiClient> {
    let client = GeminiClient::new(ClientConfig::default()).unwrap();
    assert!(client.is_offline());
    let store = ReadingStore::open(dir).unwrap();
    ReadingService::new(client, store)
}

#[tokio::test]
async fn test_offline_submit_creates_a_persisted_reading() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = offline_service(dir.path());

    let image = vec![0xFF, 0xD8, 0xFF, 0xE0]; // JPEG header bytes
    let (text, reading) = service.submit(&image).await.unwrap();

    assert!(!text.is_empty());
    assert_eq!(reading.content, text);
    assert_eq!(service.list().len(), 1);
    assert_eq!(service.get_image(&reading).unwrap(), image);
    assert_eq!(service.state(), ViewState::Result(text));

    // The reading survives a restart.
    drop(service);
    let reopened = ReadingStore::open(dir.path()).unwrap();
    assert_eq!(reopened.list().len(), 1);
    assert_eq!(reopened.list()[0].id, reading.id);
}

#[tokio::test]
async fn test_offline_submit_history_accumulates_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = offline_service(dir.path());

    let (_, first) = service.submit(&[1]).await.unwrap();
    let (_, second) = service.submit(&[2]).await.unwrap();

    let ids: Vec<_> = service.list().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn test_offline_submit_empty_image_still_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = offline_service(dir.path());

    assert!(service.submit(&[]).await.is_err());
    assert!(service.list().is_empty());
}
