//! 画像ファイル読み込み
//!
//! 種類やサイズの検証はしない。拡張子はMIMEタイプの推定にだけ使う。

use crate::error::{PlantDoctorError, Result};
use plant_doctor_common::ImageUpload;
use std::path::Path;

const MIME_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
];

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

pub fn load_image(path: &Path) -> Result<ImageUpload> {
    if !path.is_file() {
        return Err(PlantDoctorError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(ImageUpload {
        file_name,
        mime_type: mime_type_for(path).to_string(),
        bytes,
    })
}

/// 拡張子からMIMEタイプを推定
pub fn mime_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension() else {
        return FALLBACK_MIME_TYPE;
    };
    let ext = ext.to_string_lossy().to_lowercase();

    MIME_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(FALLBACK_MIME_TYPE)
}
