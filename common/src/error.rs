//! エラー型定義

use thiserror::Error;

/// 分類APIの呼び出しエラー
///
/// どの種類でもセッションはエラー表示に遷移する
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Parse(String),
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("No file selected")]
    NoFileSelected,

    #[error("A request is already in flight")]
    AlreadySubmitting,

    #[error("Stale ticket #{0}")]
    StaleTicket(u64),

    #[error("Response contains no predictions")]
    EmptyPrediction,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
