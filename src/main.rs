use axum::{Json, Router, extract::State, routing::get, routing::post};
use std::sync::Arc;

use yt_shorts_service::config::Config;
use yt_shorts_service::dispatch::{self, AppState};
use yt_shorts_service::types::TelegramWebhook;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    tokio::fs::create_dir_all(&config.downloads_dir)
        .await
        .expect("failed to create downloads directory");
    let state = Arc::new(AppState::new(config));

    let app = Router::new()
        .route("/", get(|| async { "OK" }))
        .route("/webhook", post(webhook_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    log::info!("Listening on 0.0.0.0:3000");
    axum::serve(listener, app).await.unwrap();
}

async fn webhook_handler(State(state): State<Arc<AppState>>, Json(payload): Json<TelegramWebhook>) {
    let Some(message) = payload.message else {
        return;
    };
    let Some(text) = message.text else {
        return;
    };
    let chat_id = message.chat.id;

    // Each message gets its own task so a long download doesn't hold up
    // other chats.
    tokio::spawn(async move {
        dispatch::handle_message(&state, chat_id, &text).await;
    });
}
