use std::path::Path;
use tokio::process::Command;

use crate::error::BotError;

/// Re-encode the `[start_secs, end_secs)` window of `input` into `output`
/// (libx264 at 30 fps, like the clips the service is meant to produce).
///
/// Sources shorter than the requested window are rejected before ffmpeg runs;
/// `-t` alone would silently emit a truncated clip.
pub async fn trim_video(
    input: &Path,
    output: &Path,
    start_secs: u32,
    end_secs: u32,
) -> Result<(), BotError> {
    let duration = probe_duration(input).await?;
    if duration < end_secs as f64 {
        return Err(BotError::Encode(format!(
            "source is {:.1}s long, shorter than the requested {}s window",
            duration, end_secs
        )));
    }

    let result = Command::new("ffmpeg")
        .arg("-i")
        .arg(input)
        .arg("-ss")
        .arg(start_secs.to_string())
        .arg("-t")
        .arg((end_secs - start_secs).to_string())
        .arg("-c:v")
        .arg("libx264")
        .arg("-r")
        .arg("30")
        .arg("-c:a")
        .arg("aac")
        .arg("-y")
        .arg(output)
        .output()
        .await
        .map_err(|e| BotError::Encode(format!("failed to run ffmpeg: {}", e)))?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        return Err(BotError::Encode(format!(
            "ffmpeg failed: {}",
            stderr.lines().last().unwrap_or("no diagnostics").trim()
        )));
    }

    Ok(())
}

/// Container duration in seconds, via ffprobe.
pub async fn probe_duration(input: &Path) -> Result<f64, BotError> {
    let result = Command::new("ffprobe")
        .arg("-v")
        .arg("error")
        .arg("-show_entries")
        .arg("format=duration")
        .arg("-of")
        .arg("default=noprint_wrappers=1:nokey=1")
        .arg(input)
        .output()
        .await
        .map_err(|e| BotError::Encode(format!("failed to run ffprobe: {}", e)))?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        return Err(BotError::Encode(format!(
            "ffprobe failed: {}",
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&result.stdout);
    parse_ffprobe_duration(&stdout).ok_or_else(|| {
        BotError::Encode(format!("unreadable ffprobe duration: {:?}", stdout.trim()))
    })
}

/// ffprobe prints the duration as a bare decimal line, e.g. `59.940000`.
pub fn parse_ffprobe_duration(stdout: &str) -> Option<f64> {
    stdout.trim().parse::<f64>().ok().filter(|d| d.is_finite())
}
