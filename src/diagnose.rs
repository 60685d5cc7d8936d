//! 診断の実行
//!
//! セッションの送信開始 → 分類 → 結果反映 を1回分行う。

use crate::client::Classifier;
use crate::error::Result;
use plant_doctor_common::{Error, ImageUpload, Phase, UploadSession};

/// 選択中の画像で診断を実行し、反映後の段階を返す
///
/// 画像未選択や送信中の場合は分類を呼ばずにエラーを返す
pub async fn diagnose<C: Classifier>(
    session: &mut UploadSession<ImageUpload>,
    classifier: &C,
) -> Result<Phase> {
    let ticket = session.begin_submit()?;
    let image = session
        .selected()
        .map(|s| s.file.clone())
        .ok_or(Error::NoFileSelected)?;

    let outcome = classifier.classify(&image).await;
    match &outcome {
        Ok(response) => tracing::debug!(top = ?response.top(), "classification succeeded"),
        Err(e) => tracing::warn!(error = %e, "classification failed"),
    }

    let phase = session.complete(ticket, outcome)?;
    Ok(phase.clone())
}
