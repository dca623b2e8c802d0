use std::env;
use std::path::PathBuf;

/// Environment-backed settings, read once at startup and passed through the
/// router state instead of being re-read per request.
#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub razorpay_key: String,
    pub razorpay_secret: String,
    /// Declared alongside the other secrets but not used by any reachable
    /// code path; metadata lookups would go through it.
    #[allow(dead_code)]
    pub youtube_api_key: Option<String>,
    pub downloads_dir: PathBuf,
}

impl Config {
    /// Panics with an explanatory message when a required variable is
    /// missing, which aborts startup before the server binds.
    pub fn from_env() -> Self {
        Config {
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN")
                .expect("TELEGRAM_BOT_TOKEN must be set"),
            razorpay_key: env::var("RAZORPAY_KEY").expect("RAZORPAY_KEY must be set"),
            razorpay_secret: env::var("RAZORPAY_SECRET").expect("RAZORPAY_SECRET must be set"),
            youtube_api_key: env::var("YOUTUBE_API_KEY").ok(),
            downloads_dir: env::var("DOWNLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./downloads")),
        }
    }
}
