//! 分類APIレスポンスパーサー

use crate::error::{Error, Result};
use crate::types::{ClassifyResponse, Diagnosis};

/// レスポンス本文をパース
///
/// # Examples
/// ```
/// use plant_doctor_common::parse_classify_response;
///
/// let body = r#"{"diseases":[{"name":"Rust","probability":0.87}]}"#;
/// let response = parse_classify_response(body).unwrap();
/// assert_eq!(response.diseases[0].name, "Rust");
/// ```
pub fn parse_classify_response(body: &str) -> Result<ClassifyResponse> {
    Ok(serde_json::from_str(body)?)
}

/// 先頭の予測から診断結果を作る
///
/// 予測が空の場合は `Error::EmptyPrediction`
pub fn diagnose_response(response: &ClassifyResponse) -> Result<Diagnosis> {
    response
        .top()
        .map(Diagnosis::from_prediction)
        .ok_or(Error::EmptyPrediction)
}
