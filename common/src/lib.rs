//! Plant Doctor Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod diseases;
pub mod display;
pub mod error;
pub mod parser;
pub mod session;

pub use types::{ClassifyResponse, Diagnosis, ImageUpload, Prediction};
pub use diseases::{DiseaseCatalog, DiseaseRecord, DISEASES};
pub use display::{capitalize_first, format_percent};
pub use error::{ClassifyError, Error, Result};
pub use parser::{diagnose_response, parse_classify_response};
pub use session::{Phase, SelectedImage, SubmitTicket, UploadSession, View};

/// 分類サービスのデフォルトURL
pub const DEFAULT_ENDPOINT: &str = "https://agri-cure-d8gfspt75-naaakuls-projects.vercel.app";

/// アップロードAPIのパス
pub const UPLOAD_PATH: &str = "/upload";

/// multipartフォームのフィールド名
pub const IMAGE_FIELD: &str = "image";

/// 解析失敗時にラベルの代わりに表示する文言
pub const ANALYSIS_ERROR_MESSAGE: &str = "Error analyzing the image. Please try again.";

/// ファイル未選択で送信した時のアラート文言
pub const NO_FILE_ALERT: &str = "Please upload a file first.";

/// エンドポイントからアップロードURLを組み立てる
///
/// 末尾のスラッシュは取り除いてから `/upload` を付ける
pub fn upload_url(endpoint: &str) -> String {
    format!("{}{}", endpoint.trim_end_matches('/'), UPLOAD_PATH)
}
