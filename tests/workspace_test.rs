use tempfile::TempDir;
use yt_shorts_service::workspace::Workspace;

// ===== Per-request artifact isolation =====

#[tokio::test]
async fn test_workspace_creates_its_directory() {
    let root = TempDir::new().unwrap();

    let ws = Workspace::create(root.path(), 42, 0).await.unwrap();

    assert!(ws.dir().is_dir());
    assert!(ws.dir().starts_with(root.path()));
}

#[tokio::test]
async fn test_artifact_names_inside_workspace() {
    let root = TempDir::new().unwrap();
    let ws = Workspace::create(root.path(), 42, 0).await.unwrap();

    assert_eq!(ws.source_path(), ws.dir().join("video.mp4"));
    assert_eq!(ws.short_path(), ws.dir().join("short_video.mp4"));
}

#[tokio::test]
async fn test_concurrent_requests_from_one_chat_do_not_share_paths() {
    let root = TempDir::new().unwrap();

    let first = Workspace::create(root.path(), 42, 0).await.unwrap();
    let second = Workspace::create(root.path(), 42, 1).await.unwrap();

    assert_ne!(first.dir(), second.dir());
    assert_ne!(first.source_path(), second.source_path());
    assert_ne!(first.short_path(), second.short_path());
}

#[tokio::test]
async fn test_requests_from_different_chats_do_not_share_paths() {
    let root = TempDir::new().unwrap();

    let a = Workspace::create(root.path(), 42, 7).await.unwrap();
    let b = Workspace::create(root.path(), 43, 7).await.unwrap();

    assert_ne!(a.source_path(), b.source_path());
}

#[tokio::test]
async fn test_cleanup_removes_directory_and_artifacts() {
    let root = TempDir::new().unwrap();
    let ws = Workspace::create(root.path(), 42, 0).await.unwrap();

    tokio::fs::write(ws.source_path(), b"fake video")
        .await
        .unwrap();
    tokio::fs::write(ws.short_path(), b"fake clip").await.unwrap();

    let dir = ws.dir().to_path_buf();
    ws.cleanup().await;

    assert!(!dir.exists());
}
