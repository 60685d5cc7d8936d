//! 分類サービスクライアント
//!
//! `POST <endpoint>/upload` に `image` フィールド1つのmultipartフォームを送る。

use crate::error::Result;
use plant_doctor_common::{
    parse_classify_response, upload_url, ClassifyError, ClassifyResponse, ImageUpload, IMAGE_FIELD,
};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Duration;

/// 画像分類の呼び出し口
#[allow(async_fn_in_trait)]
pub trait Classifier {
    async fn classify(&self, image: &ImageUpload) -> std::result::Result<ClassifyResponse, ClassifyError>;
}

/// HTTP経由の分類クライアント
pub struct HttpClassifier {
    client: Client,
    upload_url: String,
}

impl HttpClassifier {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            upload_url: upload_url(endpoint),
        })
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }
}

impl Classifier for HttpClassifier {
    async fn classify(&self, image: &ImageUpload) -> std::result::Result<ClassifyResponse, ClassifyError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        tracing::debug!(
            url = %self.upload_url,
            file = %image.file_name,
            bytes = image.bytes.len(),
            "sending image"
        );

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "response received");
        if !status.is_success() {
            return Err(ClassifyError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        parse_classify_response(&body).map_err(|e| ClassifyError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_built_from_endpoint() {
        let classifier = HttpClassifier::new("http://localhost:3000/", Duration::from_secs(1)).unwrap();
        assert_eq!(classifier.upload_url(), "http://localhost:3000/upload");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // ポート1は通常listenされていない
        let classifier = HttpClassifier::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
        let image = ImageUpload {
            file_name: "leaf.jpg".into(),
            mime_type: "image/jpeg".into(),
            bytes: vec![0xff, 0xd8],
        };

        let result = classifier.classify(&image).await;
        assert!(matches!(result, Err(ClassifyError::Transport(_))));
    }
}
