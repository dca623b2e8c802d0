use std::sync::atomic::{AtomicU64, Ordering};

use log::error;
use reqwest::Client;

use crate::config::Config;
use crate::download_video::download_video;
use crate::error::BotError;
use crate::payments;
use crate::telegram;
use crate::trim_video::trim_video;
use crate::workspace::Workspace;

/// Subscription tiers: label -> monthly price in INR.
pub const PLANS: [(&str, u64); 2] = [("31-60sec", 50), ("61-90sec", 100)];

/// Trimming window applied to every submitted video.
const CLIP_START_SECS: u32 = 0;
const CLIP_END_SECS: u32 = 60;

pub const WELCOME_TEXT: &str = "👋 Welcome! Send a YouTube link to create Shorts!";
pub const PROCESSING_TEXT: &str = "🔄 Processing your video... Please wait.";
pub const INVALID_PLAN_TEXT: &str = "⚠️ Invalid plan! Choose: '31-60sec' or '61-90sec'.";

/// What an inbound text resolves to. Classification is total: anything that
/// is not a recognized command is treated as a video URL and handed to the
/// downloader as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Start,
    Subscribe { plan: Option<String> },
    VideoRequest { url: String },
}

pub fn classify(text: &str) -> Route {
    let mut tokens = text.split_whitespace();
    match tokens.next() {
        Some("/start") => Route::Start,
        Some("/subscribe") => Route::Subscribe {
            plan: tokens.next().map(str::to_string),
        },
        _ => Route::VideoRequest {
            url: text.to_string(),
        },
    }
}

pub fn plan_price(label: &str) -> Option<u64> {
    PLANS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, price)| *price)
}

/// Caption attached to every clip. The original product stubbed translation
/// out with a fixed English sample, and that behavior is kept.
pub fn auto_caption() -> String {
    let caption_text = "This is a sample caption in English";
    format!("📜 Caption: {} (Auto-generated)", caption_text)
}

pub fn payment_reply(label: &str, price: u64, order_id: &str) -> String {
    format!(
        "💳 Pay ₹{} for {} videos: [Click Here]({})",
        price,
        label,
        payments::checkout_link(order_id)
    )
}

pub fn error_reply(err: &BotError) -> String {
    format!("❌ Error: {}", err)
}

/// Shared per-process state: one HTTP client, the startup configuration, and
/// the request counter that keys artifact workspaces.
pub struct AppState {
    pub http: Client,
    pub config: Config,
    request_seq: AtomicU64,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            http: Client::new(),
            config,
            request_seq: AtomicU64::new(0),
        }
    }

    pub fn next_request_id(&self) -> u64 {
        self.request_seq.fetch_add(1, Ordering::Relaxed)
    }
}

/// Entry point for one inbound message. Exactly one route runs; every
/// failure past classification ends up as a single error reply to the chat.
pub async fn handle_message(state: &AppState, chat_id: i64, text: &str) {
    match classify(text) {
        Route::Start => {
            if let Err(e) = reply(state, chat_id, WELCOME_TEXT).await {
                error!("Failed to send welcome to chat {}: {}", chat_id, e);
            }
        }
        Route::Subscribe { plan } => handle_subscribe(state, chat_id, plan.as_deref()).await,
        Route::VideoRequest { url } => handle_video_request(state, chat_id, &url).await,
    }
}

async fn handle_subscribe(state: &AppState, chat_id: i64, plan: Option<&str>) {
    let price = plan.and_then(plan_price);
    let (Some(label), Some(price)) = (plan, price) else {
        if let Err(e) = reply(state, chat_id, INVALID_PLAN_TEXT).await {
            error!("Failed to send plan guidance to chat {}: {}", chat_id, e);
        }
        return;
    };

    let request = payments::order_request(price * 100); // rupees -> paise
    let result = payments::create_order(
        &state.http,
        &state.config.razorpay_key,
        &state.config.razorpay_secret,
        &request,
    )
    .await;

    match result {
        Ok(order) => {
            let text = payment_reply(label, price, &order.id);
            if let Err(e) = telegram::send_message(
                &state.http,
                &state.config.telegram_bot_token,
                chat_id,
                &text,
                true,
            )
            .await
            {
                error!("Failed to send checkout link to chat {}: {}", chat_id, e);
            }
        }
        Err(e) => report_failure(state, chat_id, &e).await,
    }
}

async fn handle_video_request(state: &AppState, chat_id: i64, url: &str) {
    if let Err(e) = run_video_request(state, chat_id, url).await {
        report_failure(state, chat_id, &e).await;
    }
}

/// The fallible part of the video path. Steps run strictly in order; the
/// first failure aborts the rest, so a failed download never reaches the
/// trimmer or the upload.
async fn run_video_request(state: &AppState, chat_id: i64, url: &str) -> Result<(), BotError> {
    reply(state, chat_id, PROCESSING_TEXT).await?;

    let workspace = Workspace::create(
        &state.config.downloads_dir,
        chat_id,
        state.next_request_id(),
    )
    .await?;

    download_video(url, &workspace.source_path()).await?;
    trim_video(
        &workspace.source_path(),
        &workspace.short_path(),
        CLIP_START_SECS,
        CLIP_END_SECS,
    )
    .await?;

    telegram::send_video(
        &state.http,
        &state.config.telegram_bot_token,
        chat_id,
        &workspace.short_path(),
        &auto_caption(),
    )
    .await?;

    workspace.cleanup().await;
    Ok(())
}

async fn report_failure(state: &AppState, chat_id: i64, err: &BotError) {
    error!("Request for chat {} failed ({}): {}", chat_id, err.kind(), err);
    if let Err(e) = reply(state, chat_id, &error_reply(err)).await {
        error!("Failed to report error to chat {}: {}", chat_id, e);
    }
}

async fn reply(state: &AppState, chat_id: i64, text: &str) -> Result<(), BotError> {
    telegram::send_message(
        &state.http,
        &state.config.telegram_bot_token,
        chat_id,
        text,
        false,
    )
    .await
}
