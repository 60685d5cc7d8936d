//! 分類サービス連携
//!
//! `FormData` に画像を `image` フィールドで入れて `POST <endpoint>/upload` する。
//! Content-Typeはブラウザにboundary付きで設定させるため、ここでは指定しない。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};
use plant_doctor_common::{upload_url, ClassifyError, ClassifyResponse, IMAGE_FIELD};

fn transport_error(value: JsValue) -> ClassifyError {
    ClassifyError::Transport(format!("{:?}", value))
}

fn parse_error(value: JsValue) -> ClassifyError {
    ClassifyError::Parse(format!("{:?}", value))
}

/// 画像を分類サービスに送る
pub async fn classify(endpoint: &str, file: &File) -> Result<ClassifyResponse, ClassifyError> {
    let form = FormData::new().map_err(transport_error)?;
    form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())
        .map_err(transport_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(&upload_url(endpoint), &opts)
        .map_err(transport_error)?;

    let window = web_sys::window()
        .ok_or_else(|| ClassifyError::Transport("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport_error)?;
    let resp: Response = resp_value.dyn_into().map_err(transport_error)?;

    if !resp.ok() {
        return Err(ClassifyError::Status(resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(parse_error)?)
        .await
        .map_err(parse_error)?;
    gloo::console::log!("Response from Server:", json.clone());

    serde_wasm_bindgen::from_value(json).map_err(|e| ClassifyError::Parse(e.to_string()))
}
