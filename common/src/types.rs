//! 分類APIの型定義
//!
//! - ClassifyResponse: 分類サービスのレスポンス
//! - Diagnosis: 先頭の予測とカタログ照合結果
//! - ImageUpload: 送信する画像

use serde::{Deserialize, Serialize};

use crate::diseases::{DiseaseCatalog, DiseaseRecord};
use crate::display::{capitalize_first, format_percent};

/// 予測1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub name: String,
    /// 確信度 (0.0-1.0)
    pub probability: f64,
}

/// 分類サービスのレスポンス
///
/// `{ "diseases": [ { "name": ..., "probability": ... } ] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub diseases: Vec<Prediction>,
}

impl ClassifyResponse {
    /// 先頭の予測（これ以外は使わない）
    pub fn top(&self) -> Option<&Prediction> {
        self.diseases.first()
    }
}

/// 診断結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    /// サービスが返したラベル（大文字小文字はそのまま）
    pub label: String,
    /// 確信度（パーセント）
    pub probability: f64,
    /// カタログ照合結果
    pub record: Option<&'static DiseaseRecord>,
}

impl Diagnosis {
    pub fn from_prediction(prediction: &Prediction) -> Self {
        Self {
            label: prediction.name.clone(),
            probability: prediction.probability * 100.0,
            record: DiseaseCatalog::lookup(&prediction.name),
        }
    }

    /// 見出し（例: "Rust, 87%"）
    pub fn headline(&self) -> String {
        format!("{}, {}%", capitalize_first(&self.label), format_percent(self.probability))
    }

    pub fn description(&self) -> &'static str {
        self.record.map(|r| r.description).unwrap_or_default()
    }

    pub fn treatment(&self) -> &'static str {
        self.record.map(|r| r.treatment).unwrap_or_default()
    }

    pub fn prevention(&self) -> &'static str {
        self.record.map(|r| r.prevention).unwrap_or_default()
    }
}

/// 送信する画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}
