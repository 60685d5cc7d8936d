use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlantDoctorError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("病害が見つかりません: {0}")]
    UnknownDisease(String),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] plant_doctor_common::Error),
}

pub type Result<T> = std::result::Result<T, PlantDoctorError>;
