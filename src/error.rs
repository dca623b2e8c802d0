/// Custom error type covering one bot request end to end
#[derive(Debug)]
pub enum BotError {
    Download(String),
    Encode(String),
    Gateway(String),
    Transport(String),
    Io(std::io::Error),
}

impl BotError {
    /// Stable tag used for logging and tests; the user-facing reply does not
    /// distinguish kinds.
    pub fn kind(&self) -> &'static str {
        match self {
            BotError::Download(_) => "download",
            BotError::Encode(_) => "encode",
            BotError::Gateway(_) => "gateway",
            BotError::Transport(_) => "transport",
            BotError::Io(_) => "io",
        }
    }
}

impl std::fmt::Display for BotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotError::Download(msg)
            | BotError::Encode(msg)
            | BotError::Gateway(msg)
            | BotError::Transport(msg) => write!(f, "{}", msg),
            BotError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for BotError {}

impl From<std::io::Error> for BotError {
    fn from(err: std::io::Error) -> Self {
        BotError::Io(err)
    }
}

impl From<reqwest::Error> for BotError {
    fn from(err: reqwest::Error) -> Self {
        BotError::Transport(err.to_string())
    }
}
