use std::path::Path;
use tokio::process::Command;

use crate::error::BotError;

/// Fetch a source video with yt-dlp, writing an mp4 to `output`.
///
/// The URL is passed through verbatim; yt-dlp is the only place bad input is
/// diagnosed (network errors, unsupported sites, extraction failures).
pub async fn download_video(url: &str, output: &Path) -> Result<(), BotError> {
    let result = Command::new("yt-dlp")
        .arg("-f")
        .arg("mp4")
        .arg("-o")
        .arg(output)
        .arg(url)
        .output()
        .await
        .map_err(|e| BotError::Download(format!("failed to run yt-dlp: {}", e)))?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        return Err(BotError::Download(last_stderr_line(&stderr)));
    }

    Ok(())
}

/// yt-dlp prints its `ERROR:` diagnostic as the last stderr line; everything
/// above it is progress noise.
pub fn last_stderr_line(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("yt-dlp failed without diagnostics")
        .trim()
        .to_string()
}
