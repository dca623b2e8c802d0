use std::path::{Path, PathBuf};
use tokio::fs;

/// Scratch directory for one video request.
///
/// Artifact names are fixed (`video.mp4`, `short_video.mp4`) but the directory
/// is keyed by chat id plus a per-process sequence number, so concurrent
/// requests never share paths.
#[derive(Debug)]
pub struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    pub async fn create(root: &Path, chat_id: i64, request_id: u64) -> std::io::Result<Self> {
        let dir = root.join(format!("{}_{}", chat_id, request_id));
        fs::create_dir_all(&dir).await?;
        Ok(Workspace { dir })
    }

    /// Where the downloader writes the full source video.
    pub fn source_path(&self) -> PathBuf {
        self.dir.join("video.mp4")
    }

    /// Where the trimmer writes the re-encoded clip.
    pub fn short_path(&self) -> PathBuf {
        self.dir.join("short_video.mp4")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Best-effort removal, called only after a successful send. Failed
    /// requests keep their artifacts in place.
    pub async fn cleanup(self) {
        if let Err(e) = fs::remove_dir_all(&self.dir).await {
            log::warn!("Failed to remove workspace {}: {}", self.dir.display(), e);
        }
    }
}
