use log::info;
use reqwest::{Client, multipart};
use std::path::Path;
use tokio_util::codec::{BytesCodec, FramedRead};

use crate::error::BotError;

/// Text reply. `markdown` enables Telegram's Markdown parse mode for
/// link-formatted messages.
pub async fn send_message(
    client: &Client,
    bot_token: &str,
    chat_id: i64,
    text: &str,
    markdown: bool,
) -> Result<(), BotError> {
    let url = format!("https://api.telegram.org/bot{}/sendMessage", bot_token);

    let mut params = vec![
        ("chat_id", chat_id.to_string()),
        ("text", text.to_string()),
    ];
    if markdown {
        params.push(("parse_mode", "Markdown".to_string()));
    }

    let res = client.post(&url).form(&params).send().await?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_else(|_| "Unknown error".into());
        return Err(BotError::Transport(format!(
            "Telegram API error {}: {}",
            status, body
        )));
    }

    Ok(())
}

/// Upload a video file with a caption. The file is streamed rather than read
/// into memory, since clips can still run tens of megabytes.
pub async fn send_video(
    client: &Client,
    bot_token: &str,
    chat_id: i64,
    path: &Path,
    caption: &str,
) -> Result<(), BotError> {
    let url = format!("https://api.telegram.org/bot{}/sendVideo", bot_token);

    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| BotError::Transport(format!("failed to open {}: {}", path.display(), e)))?;

    let stream = FramedRead::new(file, BytesCodec::new());
    let file_body = reqwest::Body::wrap_stream(stream);

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "video.mp4".to_string());

    let form = multipart::Form::new()
        .text("chat_id", chat_id.to_string())
        .text("caption", caption.to_string())
        .part(
            "video",
            multipart::Part::stream(file_body).file_name(file_name),
        );

    let res = client.post(&url).multipart(form).send().await?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_else(|_| "Unknown error".into());
        return Err(BotError::Transport(format!(
            "Telegram API error {}: {}",
            status, body
        )));
    }

    info!("Video sent successfully to chat {}.", chat_id);
    Ok(())
}
